/// Errors that can occur while mining git history.
///
/// Library crates return this type directly; the binary crate converts to
/// `miette::Report` at the boundary.
///
/// # Examples
///
/// ```
/// use ownpulse_core::OwnpulseError;
///
/// let err = OwnpulseError::Git("HEAD has no commits".into());
/// assert!(err.to_string().contains("HEAD has no commits"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum OwnpulseError {
    /// Failure spawning or reading from the git subprocess.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git exited unsuccessfully.
    #[error("git error: {0}")]
    Git(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such repo");
        let err: OwnpulseError = io_err.into();
        assert!(err.to_string().contains("no such repo"));
    }

    #[test]
    fn git_error_displays_message() {
        let err = OwnpulseError::Git("fatal: not a git repository".into());
        assert_eq!(err.to_string(), "git error: fatal: not a git repository");
    }
}
