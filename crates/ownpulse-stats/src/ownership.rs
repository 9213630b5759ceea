//! Ownership selection: one suggested directory per author.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parser::AuthorFolderStats;

/// A suggested CODEOWNERS entry: the directory an author most plausibly owns.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::ownership::OwnershipSuggestion;
///
/// let suggestion = OwnershipSuggestion {
///     folder: "src/parser".into(),
///     author: "alice".into(),
/// };
/// assert_eq!(suggestion.codeowners_line(), "src/parser/  @alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipSuggestion {
    /// Directory prefix the author should own.
    pub folder: String,
    /// Author name as it appears in the log.
    pub author: String,
}

impl OwnershipSuggestion {
    /// Render as a CODEOWNERS-style line: `<folder>/  @<author>`.
    pub fn codeowners_line(&self) -> String {
        format!("{}/  @{}", self.folder, self.author)
    }
}

/// Pick one suggestion per author with a non-empty folder map.
///
/// The winning folder maximizes commit count; ties go to the deeper (more
/// specific) prefix, and ties on both count and depth go to the
/// lexicographically smaller prefix so output is deterministic. Authors with
/// empty maps are skipped. Suggestions come out in author first-appearance
/// order.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::ownership::suggest_owners;
/// use ownpulse_stats::parser::AuthorFolderStats;
///
/// let mut stats = AuthorFolderStats::new();
/// stats.record("alice", "lib", 4);
/// stats.record("alice", "lib/core", 4);
/// let suggestions = suggest_owners(&stats);
/// assert_eq!(suggestions[0].folder, "lib/core");
/// ```
pub fn suggest_owners(stats: &AuthorFolderStats) -> Vec<OwnershipSuggestion> {
    let mut suggestions = Vec::new();
    for (author, folders) in stats.authors() {
        let Some(folder) = select_primary_folder(folders) else {
            continue;
        };
        suggestions.push(OwnershipSuggestion {
            folder,
            author: author.to_string(),
        });
    }
    suggestions
}

/// Number of path segments in a folder prefix.
pub fn folder_depth(folder: &str) -> usize {
    folder.split('/').count()
}

fn select_primary_folder(folders: &HashMap<String, u32>) -> Option<String> {
    folders
        .iter()
        .max_by(|(folder_a, count_a), (folder_b, count_b)| {
            (count_a, folder_depth(folder_a.as_str()))
                .cmp(&(count_b, folder_depth(folder_b.as_str())))
                // Smaller prefix wins the remaining tie, so invert.
                .then_with(|| folder_b.cmp(folder_a))
        })
        .map(|(folder, _)| folder.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_count_wins() {
        let mut stats = AuthorFolderStats::new();
        stats.record("alice", "src", 3);
        stats.record("alice", "src/a.py", 2);
        let suggestions = suggest_owners(&stats);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].folder, "src");
    }

    #[test]
    fn deeper_folder_wins_a_count_tie() {
        let mut stats = AuthorFolderStats::new();
        stats.record("alice", "lib", 4);
        stats.record("alice", "lib/core", 4);
        let suggestions = suggest_owners(&stats);
        assert_eq!(suggestions[0].folder, "lib/core");
    }

    #[test]
    fn lexicographic_order_breaks_full_ties() {
        let mut stats = AuthorFolderStats::new();
        stats.record("alice", "net/tcp", 4);
        stats.record("alice", "fs/ext4", 4);
        let suggestions = suggest_owners(&stats);
        assert_eq!(suggestions[0].folder, "fs/ext4");
    }

    #[test]
    fn authors_with_empty_maps_get_no_suggestion() {
        let mut stats = AuthorFolderStats::new();
        stats.touch_author("alice");
        stats.record("bob", "docs", 2);
        let suggestions = suggest_owners(&stats);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].author, "bob");
    }

    #[test]
    fn suggestions_follow_author_order() {
        let mut stats = AuthorFolderStats::new();
        stats.record("carol", "ui", 5);
        stats.record("alice", "src", 2);
        let suggestions = suggest_owners(&stats);
        let authors: Vec<&str> = suggestions.iter().map(|s| s.author.as_str()).collect();
        assert_eq!(authors, ["carol", "alice"]);
    }

    #[test]
    fn folder_depth_counts_segments() {
        assert_eq!(folder_depth("src"), 1);
        assert_eq!(folder_depth("src/parser"), 2);
        assert_eq!(folder_depth("a/b/c"), 3);
    }

    #[test]
    fn codeowners_line_format() {
        let suggestion = OwnershipSuggestion {
            folder: "src".into(),
            author: "alice".into(),
        };
        assert_eq!(suggestion.codeowners_line(), "src/  @alice");
    }

    #[test]
    fn suggestion_serializes_to_plain_fields() {
        let suggestion = OwnershipSuggestion {
            folder: "src".into(),
            author: "alice".into(),
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["folder"], "src");
        assert_eq!(json["author"], "alice");
    }
}
