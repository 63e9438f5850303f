use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Questlog - XP, levels and titles for habits, grades, reading and goals")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.questlog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// User whose progress to use (defaults to settings.user_id)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = cli::Context {
        config_path: cli.config,
        user: cli.user,
    };

    match cli.command {
        Commands::Init { force } => cli::init::init_command(&ctx, force),
        Commands::Status { json } => cli::status::status_command(&ctx, json),
        Commands::Award {
            category,
            amount,
            reason,
        } => cli::award::award_command(&ctx, &category, amount, reason.as_deref()),
        Commands::Record { action } => cli::record::record_command(&ctx, action),
        Commands::Habit { command } => {
            cli::activity::activity_command(&ctx, questlog::progress::ActivityKind::Habit, command)
        }
        Commands::Hobby { command } => {
            cli::activity::activity_command(&ctx, questlog::progress::ActivityKind::Hobby, command)
        }
        Commands::Achievements { command } => {
            cli::achievements::achievements_command(&ctx, command)
        }
        Commands::Export => cli::export::export_command(&ctx),
        Commands::Users => cli::users::users_command(&ctx),
        Commands::Reset { yes } => cli::reset::reset_command(&ctx, yes),
    }
}
