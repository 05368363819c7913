use clap::Parser;
use std::process::ExitCode;

use dashnav::cli::{Cli, Commands, ConfigAction, OutputOptions};
use dashnav::commands::{cmd_actions, cmd_config_path, cmd_config_show, cmd_order, cmd_palette};
use dashnav::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Palette => cmd_palette().await,
        Commands::Actions { mode, query, json } => {
            cmd_actions(mode, &query, OutputOptions::json(json))
        }
        Commands::Order { number, json } => cmd_order(&number, OutputOptions::json(json)).await,

        // Configuration commands
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(OutputOptions::json(json)),
            ConfigAction::Path { json } => cmd_config_path(OutputOptions::json(json)),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
