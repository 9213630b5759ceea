//! Noise filtering for author-folder statistics.
//!
//! Single-touch folders say little about ownership, so the default threshold
//! keeps only entries with more than one commit.

use crate::parser::AuthorFolderStats;

/// Default minimum commit count for an entry to survive filtering.
pub const DEFAULT_MIN_COMMITS: u32 = 2;

/// Return a copy of `stats` containing only entries with at least
/// `min_commits` commits.
///
/// Authors whose every entry falls below the threshold remain present with
/// an empty folder map; downstream consumers treat that as "no suggestion",
/// not as an error. No new entries appear and surviving counts are
/// unchanged.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::filter::{filter_stats, DEFAULT_MIN_COMMITS};
/// use ownpulse_stats::parser::parse_log;
///
/// let stats = parse_log("---\nalice\nsrc/a.rs\n---\nalice\nsrc/b.rs\n");
/// let filtered = filter_stats(&stats, DEFAULT_MIN_COMMITS);
/// let folders = filtered.get("alice").unwrap();
/// assert_eq!(folders["src"], 2);
/// assert!(!folders.contains_key("src/a.rs"));
/// ```
pub fn filter_stats(stats: &AuthorFolderStats, min_commits: u32) -> AuthorFolderStats {
    let mut filtered = AuthorFolderStats::new();
    for (author, folders) in stats.authors() {
        filtered.touch_author(author);
        for (folder, &count) in folders {
            if count >= min_commits {
                filtered.record(author, folder, count);
            }
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthorFolderStats {
        let mut stats = AuthorFolderStats::new();
        stats.record("alice", "src", 3);
        stats.record("alice", "src/lexer", 1);
        stats.record("bob", "docs", 1);
        stats
    }

    #[test]
    fn single_commit_entries_are_dropped() {
        let filtered = filter_stats(&sample(), DEFAULT_MIN_COMMITS);
        let alice = filtered.get("alice").unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice["src"], 3);
    }

    #[test]
    fn fully_filtered_authors_stay_with_empty_maps() {
        let filtered = filter_stats(&sample(), DEFAULT_MIN_COMMITS);
        assert_eq!(filtered.author_count(), 2);
        assert!(filtered.get("bob").unwrap().is_empty());
    }

    #[test]
    fn surviving_counts_are_unchanged_and_nothing_is_added() {
        let stats = sample();
        let filtered = filter_stats(&stats, DEFAULT_MIN_COMMITS);
        for (author, folders) in filtered.authors() {
            let original = stats.get(author).unwrap();
            for (folder, &count) in folders {
                assert_eq!(original[folder], count);
            }
        }
    }

    #[test]
    fn threshold_is_respected() {
        let filtered = filter_stats(&sample(), 4);
        assert!(filtered.get("alice").unwrap().is_empty());
        assert!(filtered.get("bob").unwrap().is_empty());
    }

    #[test]
    fn empty_stats_filter_to_empty() {
        let filtered = filter_stats(&AuthorFolderStats::new(), DEFAULT_MIN_COMMITS);
        assert!(filtered.is_empty());
    }

    #[test]
    fn author_order_survives_filtering() {
        let filtered = filter_stats(&sample(), DEFAULT_MIN_COMMITS);
        let names: Vec<&str> = filtered.authors().map(|(name, _)| name).collect();
        assert_eq!(names, ["alice", "bob"]);
    }
}
