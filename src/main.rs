use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};

use ownpulse_stats::filter::filter_stats;
use ownpulse_stats::log::{fetch_log, LogOptions};
use ownpulse_stats::parser::parse_log;
use ownpulse_stats::report::StatsReport;

#[derive(Parser)]
#[command(
    name = "ownpulse",
    version,
    about = "Suggest CODEOWNERS entries from git commit history",
    long_about = "Ownpulse mines git history for per-author, per-directory commit frequency\n\
                   and suggests one owned directory per author as a CODEOWNERS entry.\n\n\
                   Directories are tracked up to three levels deep; folders an author touched\n\
                   only once are filtered out as noise.\n\n\
                   Examples:\n  \
                     ownpulse                          Report on the current repository\n  \
                     ownpulse --path ../other-repo     Report on another repository\n  \
                     ownpulse --since 90               Only consider the last 90 days\n  \
                     ownpulse --format json            Machine-readable output"
)]
struct Cli {
    /// Repository path (default: current directory)
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(
        long,
        default_value = "text",
        long_help = "Output format for the report.\n\n\
                       Formats:\n  \
                         text      Per-author folder counts plus CODEOWNERS lines (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  GitHub-flavored Markdown"
    )]
    format: OutputFormat,

    /// Only include commits from the last N days (default: full history)
    #[arg(long)]
    since: Option<u64>,

    /// Branch to walk (default: HEAD)
    #[arg(long)]
    branch: Option<String>,

    /// Minimum commits for a folder to appear in the report
    #[arg(long, default_value = "2")]
    min_commits: u32,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Machine-readable JSON
    Json,
    /// GitHub-flavored Markdown
    Markdown,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    if !cli.path.join(".git").exists() {
        miette::bail!(miette::miette!(
            help = "Run ownpulse from inside a git repository, or point --path at one",
            "Not a git repository: {}",
            cli.path.display()
        ));
    }

    let options = LogOptions {
        since_days: cli.since,
        branch: cli.branch.clone(),
    };

    eprintln!("Mining git history at {} ...", cli.path.display());
    let log_text = fetch_log(&cli.path, &options).into_diagnostic()?;

    let stats = parse_log(&log_text);
    let filtered = filter_stats(&stats, cli.min_commits);

    if cli.verbose {
        let surviving = filtered
            .authors()
            .filter(|(_, folders)| !folders.is_empty())
            .count();
        eprintln!(
            "Parsed {} authors; {} have folders with at least {} commits.",
            stats.author_count(),
            surviving,
            cli.min_commits,
        );
    }

    let report = StatsReport::build(&filtered);

    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
    }

    Ok(())
}
