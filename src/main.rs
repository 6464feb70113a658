//! usersort: fetch GitHub users and list them sorted by login, id or type.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use usersort::config;
use usersort::constants;
use usersort::env;
use usersort::fetch;
use usersort::orchestrator;
use usersort::output;
use usersort::sort;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, SortArgs};
use config::Config;
use env::Env;
use fetch::GithubClient;
use orchestrator::Showcase;
use output::OutputFormat;
use sort::SortOrder;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout carries only the listing.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    cli.apply_to(&mut config);
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        None | Some(Command::Showcase) => run_showcase(&config).await,
        Some(Command::Sort(args)) => run_sort(&config, args).await,
        Some(Command::Version) => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Fetch once and print all five sorted views.
async fn run_showcase(config: &Config) -> Result<()> {
    let client = github_client(config)?;
    let renderer = OutputFormat::Terminal.renderer();
    let showcase = Showcase::new(renderer.as_ref(), config.api.per_page, config.display.limit);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    showcase
        .run(&client, &mut out)
        .await
        .context("failed to list users")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Fetch once and print a single sorted view.
async fn run_sort(config: &Config, args: SortArgs) -> Result<()> {
    let client = github_client(config)?;
    let renderer = args.format.renderer();
    let showcase = Showcase::new(renderer.as_ref(), config.api.per_page, config.display.limit);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    showcase
        .run_single(&client, args.key, SortOrder::from_descending(args.desc), &mut out)
        .await
        .with_context(|| format!("failed to list users sorted by {}", args.key))?;
    if args.format == OutputFormat::Json {
        writeln!(out).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn github_client(config: &Config) -> Result<GithubClient> {
    GithubClient::new(&config.api.base_url, config.api.timeout())
        .context("failed to build HTTP client")
}
