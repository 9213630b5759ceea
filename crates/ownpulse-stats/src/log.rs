//! Git log acquisition.
//!
//! The one place the pipeline touches the outside world: runs `git log` as a
//! subprocess and hands back its raw text. Everything downstream is a pure
//! function of that text, so the parser stays testable without a repository.

use std::path::Path;
use std::process::Command;

use ownpulse_core::OwnpulseError;

/// Options for log retrieval.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::log::LogOptions;
///
/// let opts = LogOptions::default();
/// assert!(opts.since_days.is_none());
/// assert!(opts.branch.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Only include commits from the last N days (default: full history).
    pub since_days: Option<u64>,
    /// Branch to walk (default: HEAD).
    pub branch: Option<String>,
}

/// Fetch the raw log text for a repository.
///
/// Runs `git log --pretty=format:---%n%an --name-only`, which emits one
/// block per commit: a `---` delimiter line, the author name, and the
/// touched file paths. Output bytes are decoded lossily so unusual author
/// names or paths never abort the run.
///
/// # Errors
///
/// Returns [`OwnpulseError::Io`] if git cannot be spawned and
/// [`OwnpulseError::Git`] if it exits unsuccessfully (e.g. not a repository,
/// or a branch with no commits).
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ownpulse_stats::log::{fetch_log, LogOptions};
///
/// let text = fetch_log(Path::new("."), &LogOptions::default()).unwrap();
/// assert!(text.is_empty() || text.starts_with("---"));
/// ```
pub fn fetch_log(repo_path: &Path, options: &LogOptions) -> Result<String, OwnpulseError> {
    let mut cmd = Command::new("git");
    cmd.arg("-C")
        .arg(repo_path)
        .args(["log", "--pretty=format:---%n%an", "--name-only"]);

    if let Some(days) = options.since_days {
        cmd.arg(format!("--since={days}.days"));
    }
    if let Some(branch) = &options.branch {
        cmd.arg(branch);
    }

    let output = cmd.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OwnpulseError::Git(format!(
            "git log failed: {}",
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_options_default_to_full_history_on_head() {
        let opts = LogOptions::default();
        assert!(opts.since_days.is_none());
        assert!(opts.branch.is_none());
    }

    #[test]
    fn fetch_log_outside_a_repository_fails() {
        let err = fetch_log(Path::new("/"), &LogOptions::default()).unwrap_err();
        assert!(matches!(err, OwnpulseError::Git(_) | OwnpulseError::Io(_)));
    }
}
