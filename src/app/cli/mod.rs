//! CLI Adapter.

mod generate;
mod logging;
mod templates;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clawdeploy")]
#[command(version)]
#[command(
    about = "Generate Fly.io and Docker Compose deployment scaffolding for claw agents",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the deployment scaffold for an app
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Inspect or eject the bundled templates
    #[clap(visible_alias = "t")]
    Templates {
        #[command(subcommand)]
        command: templates::TemplatesCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_level.as_deref());

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Templates { command } => match command {
            templates::TemplatesCommands::List => templates::run_templates_list(),
            templates::TemplatesCommands::Eject { dest, force } => {
                templates::run_templates_eject(&dest, force)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
