// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use git_autosync::utils::logging;
use git_autosync::{
    Config, DEFAULT_PROVIDER, DEFAULT_ROOT_DIR, OperationTimer, ProcessGit, RepoReport, RepoSyncer,
    SyncError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git_autosync")]
#[command(version = "0.1.0")]
#[command(about = "Keeps a directory of git checkouts committed and pushed upstream", long_about = None)]
struct Cli {
    /// Directory whose immediate children are scanned
    #[arg(long, value_name = "DIR", env = "MOUNTED_DIR", default_value = DEFAULT_ROOT_DIR)]
    root: PathBuf,

    /// Account that owns the repositories to synchronize
    #[arg(short, long, env = "GIT_USER")]
    user: Option<String>,

    /// Hosting provider hostname used to match remote URLs
    #[arg(long, env = "GIT_PROVIDER", default_value = DEFAULT_PROVIDER)]
    provider: String,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize every owned working copy under the root
    Run,

    /// Report what a run would touch, without mutating anything
    Scan {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logger(cli.color, cli.verbose);

    let config = Config::new(cli.root, cli.user, cli.provider).context("Invalid configuration")?;

    match cli.command {
        Commands::Run => cmd_run(config)?,
        Commands::Scan { json } => cmd_scan(config, json)?,
    }

    Ok(())
}

fn cmd_run(config: Config) -> Result<()> {
    let timer = OperationTimer::new("repository sync");

    let syncer = RepoSyncer::new(config, ProcessGit::new());
    syncer.run().context("Repository sync failed")?;

    timer.finish();
    Ok(())
}

fn cmd_scan(config: Config, json: bool) -> Result<()> {
    let syncer = RepoSyncer::new(config, ProcessGit::new());
    let reports = syncer.survey().context("Repository survey failed")?;

    if json {
        let rendered = serde_json::to_string_pretty(&reports)
            .map_err(|e| SyncError::Serialization(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    for report in &reports {
        println!("{}", format_report(report));
    }

    Ok(())
}

fn format_report(report: &RepoReport) -> String {
    if report.kind != "repository" {
        return logging::format_warning(&format!("{} ({})", report.path, report.kind));
    }

    match (&report.remote_url, &report.owner) {
        (Some(url), Some(owner)) if report.owned => {
            logging::format_success(&format!("{} -> {} ({})", report.path, url, owner))
        }
        (Some(url), Some(owner)) => {
            logging::format_warning(&format!("{} -> {} (owned by {})", report.path, url, owner))
        }
        (Some(url), None) => {
            logging::format_error(&format!("{} -> unparseable remote '{}'", report.path, url))
        }
        _ => logging::format_error(&format!("{} -> no readable remote", report.path)),
    }
}
