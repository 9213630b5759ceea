//! Shared error handling for the ownpulse workspace.
//!
//! Provides [`OwnpulseError`] — the unified error type used by the library
//! crates — and a convenience [`Result`] alias. The binary crate converts to
//! `miette::Report` at the process boundary.

mod error;

pub use error::OwnpulseError;

/// A convenience `Result` type for ownpulse operations.
pub type Result<T> = std::result::Result<T, OwnpulseError>;
