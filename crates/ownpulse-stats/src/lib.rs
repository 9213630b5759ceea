//! Git history mining for directory ownership.
//!
//! Parses `git log` output into per-author, per-directory commit counts,
//! filters low-signal entries, and suggests one owned directory per author —
//! formatted as CODEOWNERS entries. The pipeline is a pure transform over
//! log text; only [`log::fetch_log`] touches the outside world.

pub mod filter;
pub mod log;
pub mod ownership;
pub mod parser;
pub mod report;
