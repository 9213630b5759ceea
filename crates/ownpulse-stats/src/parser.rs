//! Log parsing into per-author directory statistics.
//!
//! Consumes the text produced by `git log --pretty=format:---%n%an
//! --name-only`: repeated blocks of a `---` delimiter line, one author line,
//! and zero or more file-path lines. Each file touch is attributed to the
//! block's author under every directory prefix of the path, up to three
//! levels deep.

use std::collections::HashMap;

/// Line that separates commit blocks in the log output.
pub const COMMIT_DELIMITER: &str = "---";

/// Synthetic folder for paths without a separator (top-level files).
pub const ROOT_FOLDER: &str = "root";

/// Deepest directory level tracked. Prefixes beyond this are never counted.
pub const MAX_PREFIX_DEPTH: usize = 3;

/// Per-author, per-folder commit counts.
///
/// Authors iterate in first-appearance order, which downstream consumers
/// rely on for deterministic suggestion output. Folder counts within an
/// author are an unordered map; the reporter sorts them for display.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::parser::AuthorFolderStats;
///
/// let mut stats = AuthorFolderStats::new();
/// stats.record("alice", "src", 1);
/// stats.record("alice", "src", 1);
/// assert_eq!(stats.get("alice").unwrap()["src"], 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorFolderStats {
    order: Vec<String>,
    counts: HashMap<String, HashMap<String, u32>>,
}

impl AuthorFolderStats {
    /// Create an empty statistics structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an author without recording any folder counts.
    ///
    /// Used by the filter to keep authors whose entries were all removed.
    pub fn touch_author(&mut self, author: &str) {
        if !self.counts.contains_key(author) {
            self.order.push(author.to_string());
        }
        self.counts.entry(author.to_string()).or_default();
    }

    /// Add `count` commits for `author` under `folder`.
    pub fn record(&mut self, author: &str, folder: &str, count: u32) {
        if !self.counts.contains_key(author) {
            self.order.push(author.to_string());
        }
        let folders = self.counts.entry(author.to_string()).or_default();
        *folders.entry(folder.to_string()).or_default() += count;
    }

    /// Folder counts for a single author, if present.
    pub fn get(&self, author: &str) -> Option<&HashMap<String, u32>> {
        self.counts.get(author)
    }

    /// Iterate authors in first-appearance order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ownpulse_stats::parser::AuthorFolderStats;
    ///
    /// let mut stats = AuthorFolderStats::new();
    /// stats.record("bob", "docs", 1);
    /// stats.record("alice", "src", 1);
    /// let names: Vec<&str> = stats.authors().map(|(name, _)| name).collect();
    /// assert_eq!(names, ["bob", "alice"]);
    /// ```
    pub fn authors(&self) -> impl Iterator<Item = (&str, &HashMap<String, u32>)> {
        self.order
            .iter()
            .map(|author| (author.as_str(), &self.counts[author.as_str()]))
    }

    /// Number of authors present (including those with empty folder maps).
    pub fn author_count(&self) -> usize {
        self.order.len()
    }

    /// Whether no author has been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// State of the line scanner within the current commit block.
enum BlockState {
    /// A delimiter was just seen (or the log just started); the next
    /// non-empty line names the author.
    AwaitingAuthor,
    /// The author is known; every further non-empty line is a file path.
    CollectingPaths { author: String },
}

/// Parse raw `git log` text into [`AuthorFolderStats`].
///
/// Lines are trimmed before interpretation. A line exactly equal to
/// [`COMMIT_DELIMITER`] starts a new block; the first non-empty line after it
/// is taken as the author name with no further validation, so malformed logs
/// degrade to mis-attribution rather than an error. Empty lines (including
/// whitespace-only author lines) are skipped. Authors that never touch a
/// file do not appear in the result.
///
/// The parse is deterministic: the same text always yields the same
/// structure.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::parser::parse_log;
///
/// let stats = parse_log("---\nalice\nsrc/a.rs\nsrc/b.rs\n");
/// let folders = stats.get("alice").unwrap();
/// assert_eq!(folders["src"], 2);
/// assert_eq!(folders["src/a.rs"], 1);
/// ```
pub fn parse_log(log: &str) -> AuthorFolderStats {
    let mut stats = AuthorFolderStats::new();
    let mut state = BlockState::AwaitingAuthor;

    for raw in log.lines() {
        let line = raw.trim();

        if line == COMMIT_DELIMITER {
            state = BlockState::AwaitingAuthor;
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match &state {
            BlockState::AwaitingAuthor => {
                state = BlockState::CollectingPaths {
                    author: line.to_string(),
                };
            }
            BlockState::CollectingPaths { author } => {
                for prefix in folder_prefixes(line) {
                    stats.record(author, &prefix, 1);
                }
            }
        }
    }

    stats
}

/// Directory prefixes a file path contributes to.
///
/// A path with separators yields the join of its first *i* segments for
/// *i* = 1 up to `min(segments, MAX_PREFIX_DEPTH)`; a bare file name yields
/// only [`ROOT_FOLDER`].
///
/// # Examples
///
/// ```
/// use ownpulse_stats::parser::folder_prefixes;
///
/// assert_eq!(folder_prefixes("a/b/c/d.txt"), ["a", "a/b", "a/b/c"]);
/// assert_eq!(folder_prefixes("README.md"), ["root"]);
/// ```
pub fn folder_prefixes(path: &str) -> Vec<String> {
    if !path.contains('/') {
        return vec![ROOT_FOLDER.to_string()];
    }
    let segments: Vec<&str> = path.split('/').collect();
    let levels = segments.len().min(MAX_PREFIX_DEPTH);
    (1..=levels).map(|i| segments[..i].join("/")).collect()
}
