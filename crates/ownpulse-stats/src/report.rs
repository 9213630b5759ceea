//! Report assembly and rendering.
//!
//! Turns filtered statistics into a display-ready structure: per-author
//! folder counts sorted shallowest-first then alphabetically, plus the
//! suggested CODEOWNERS entries. `Display` produces the plain-text report;
//! JSON and Markdown renderings are available for machine consumption and
//! docs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ownership::{suggest_owners, OwnershipSuggestion};
use crate::parser::AuthorFolderStats;

/// A single folder's commit count within an author section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCount {
    /// Directory prefix.
    pub folder: String,
    /// Commits by this author under the prefix.
    pub commits: u32,
}

/// One author's section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorReport {
    /// Author name as it appears in the log.
    pub author: String,
    /// Folder counts, sorted by (separator count, lexicographic).
    pub folders: Vec<FolderCount>,
}

/// The full report: author sections plus ownership suggestions.
///
/// # Examples
///
/// ```
/// use ownpulse_stats::parser::parse_log;
/// use ownpulse_stats::report::StatsReport;
///
/// let stats = parse_log("---\nalice\nsrc/a.rs\n---\nalice\nsrc/b.rs\n");
/// let report = StatsReport::build(&stats);
/// assert_eq!(report.authors.len(), 1);
/// assert_eq!(report.suggestions[0].codeowners_line(), "src/  @alice");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Authors with at least one surviving folder entry.
    pub authors: Vec<AuthorReport>,
    /// One suggested CODEOWNERS entry per qualifying author.
    pub suggestions: Vec<OwnershipSuggestion>,
}

impl StatsReport {
    /// Assemble a report from (typically filtered) statistics.
    ///
    /// Authors with empty folder maps are omitted from the sections and
    /// receive no suggestion. Section and suggestion order follows author
    /// first-appearance order.
    pub fn build(stats: &AuthorFolderStats) -> Self {
        let mut authors = Vec::new();
        for (author, folders) in stats.authors() {
            if folders.is_empty() {
                continue;
            }
            let mut entries: Vec<FolderCount> = folders
                .iter()
                .map(|(folder, &commits)| FolderCount {
                    folder: folder.clone(),
                    commits,
                })
                .collect();
            // Shallower directories first, alphabetical within a depth.
            entries.sort_by(|a, b| {
                (separator_count(&a.folder), a.folder.as_str())
                    .cmp(&(separator_count(&b.folder), b.folder.as_str()))
            });
            authors.push(AuthorReport {
                author: author.to_string(),
                folders: entries,
            });
        }

        Self {
            authors,
            suggestions: suggest_owners(stats),
        }
    }

    /// Render as GitHub-flavored Markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Directory Ownership\n\n");

        for section in &self.authors {
            out.push_str(&format!("## {}\n\n", section.author));
            out.push_str("| Folder | Commits |\n");
            out.push_str("|--------|---------|\n");
            for entry in &section.folders {
                out.push_str(&format!("| `{}` | {} |\n", entry.folder, entry.commits));
            }
            out.push('\n');
        }

        out.push_str("## Suggested CODEOWNERS\n\n");
        out.push_str("```\n");
        for suggestion in &self.suggestions {
            out.push_str(&suggestion.codeowners_line());
            out.push('\n');
        }
        out.push_str("```\n");
        out
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.authors {
            writeln!(f, "Author: {}", section.author)?;
            for entry in &section.folders {
                writeln!(f, "  Folder: {}, Commits: {}", entry.folder, entry.commits)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Suggested CODEOWNERS entries:")?;
        for suggestion in &self.suggestions {
            writeln!(f, "{}", suggestion.codeowners_line())?;
        }
        Ok(())
    }
}

fn separator_count(folder: &str) -> usize {
    folder.matches('/').count()
}
