//! Clap argument types.

use clap::Parser;

use usersort::config::Config;
use usersort::output::OutputFormat;
use usersort::sort::SortKey;

/// Fetch GitHub users and list them sorted by login, id or type.
#[derive(Parser, Debug)]
#[command(name = "usersort", version = usersort::constants::VERSION)]
pub struct Cli {
    /// API root to fetch from (default: https://api.github.com).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of users to request.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,

    /// Number of users shown per sorted view.
    #[arg(long, global = true, value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// Request timeout in seconds (default: none).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Running without one shows the showcase.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show every prescribed sorted view and the available operations.
    Showcase,

    /// Show a single sorted view.
    Sort(SortArgs),

    /// Print version information.
    Version,
}

/// Arguments for the `sort` subcommand.
#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Field to sort by.
    #[arg(value_enum)]
    pub key: SortKey,

    /// Reverse the key comparison.
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Parse a display limit; zero would hide every entry.
fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Apply CLI flags on top of the loaded config (highest priority layer).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(per_page) = self.per_page {
            config.api.per_page = per_page;
        }
        if let Some(limit) = self.limit {
            config.display.limit = limit;
        }
        if let Some(secs) = self.timeout_secs {
            config.api.timeout_secs = Some(secs);
        }
    }
}
