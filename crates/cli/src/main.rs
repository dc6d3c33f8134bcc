// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wsops - bulk operations for remote workspace fleets

mod commands;
mod completions;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wsops_adapters::{AwsCliApi, TracedApi};
use wsops_core::{Action, ExitCode};
use wsops_engine::{RunOptions, Runner, DEFAULT_TAG_BUDGET};

#[derive(Parser)]
#[command(
    name = "wsops",
    version,
    about = "Resolve ambiguous workspace names and start/stop fleets in bulk"
)]
struct Cli {
    /// Comma-separated workspace ids, computer names, or user names
    #[arg(long, global = true)]
    names: Option<String>,

    /// File of targets, one per line or comma-separated; `#` starts a comment
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Credential profile passed through to the platform CLI
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Region passed through to the platform CLI
    #[arg(long, global = true)]
    region: Option<String>,

    /// Also try to resolve targets by their Name tag
    #[arg(long, global = true)]
    include_tags: bool,

    /// Cap on per-workspace tag lookups when --include-tags is set
    #[arg(long, global = true, default_value_t = DEFAULT_TAG_BUDGET)]
    max_tag_lookups: usize,

    /// Report what would happen without calling the remote service
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve targets to workspace ids and print the resolution table
    Resolve,
    /// Start workspaces that are currently stopped
    Start,
    /// Stop workspaces that are currently available
    Stop,
    /// List assigned users for the resolved workspaces
    Users,
    /// Show lifecycle state for the resolved workspaces
    Status,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let action = match &cli.command {
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            return ExitCode::Success.code();
        }
        Commands::Resolve => Action::Resolve,
        Commands::Start => Action::Start,
        Commands::Stop => Action::Stop,
        Commands::Users => Action::Users,
        Commands::Status => Action::Status,
    };

    let _guard = logging::init(action);

    let targets = match input::load_targets(cli.names.as_deref(), cli.file.as_deref()) {
        Ok(targets) => targets,
        Err(err) => {
            tracing::error!(error = %err, "invalid input");
            return ExitCode::NoMatches.code();
        }
    };

    let api = TracedApi::new(AwsCliApi::new(cli.profile, cli.region));
    let runner = Runner::new(
        api,
        RunOptions {
            include_tags: cli.include_tags,
            max_tag_lookups: cli.max_tag_lookups,
            dry_run: cli.dry_run,
        },
    );

    let report = match runner.run(action, &targets).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "remote service error");
            return ExitCode::ServiceError.code();
        }
    };

    logging::log_events(&report.events);
    commands::render(&report);

    let summary = report.summary;
    tracing::info!(
        resolved = summary.resolved,
        unresolved = summary.unresolved,
        skipped = summary.skipped,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "run complete"
    );
    summary.exit_code().code()
}
