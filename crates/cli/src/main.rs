mod args;

use args::GlobalArgs;
use clap::{Parser, Subcommand};
use donate_lib::{
    log::setup_logging,
    rpc::get_rpc_client,
    server::{run_server, DonateAction, ServerArgs},
    validator::config_validator::ConfigValidator,
    Config,
};
use std::sync::Arc;

#[derive(Subcommand)]
enum Commands {
    /// Start the donation action server
    #[command(
        about = "Start the donation action server",
        long_about = "Start the HTTP server for the donation action.\n\nThe configuration is validated before the server binds; errors abort startup."
    )]
    Start {
        #[command(flatten)]
        server_args: ServerArgs,
    },
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate configuration file (fast, no RPC calls)
    Validate,
    /// Validate configuration file with RPC validation (checks presets against rent)
    ValidateWithRpc,
}

#[derive(Parser)]
#[command(author, version, about = "Solana donation action server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config =
        Config::load_or_default(&cli.global_args.config, cli.global_args.is_default_config())
            .unwrap_or_else(|e| {
                print_error(&format!("Failed to load config: {e}"));
                std::process::exit(1);
            });

    let rpc_client = get_rpc_client(&cli.global_args.rpc_url, config.server.rpc_timeout_secs);

    match cli.command {
        Some(Commands::Config { config_command }) => {
            let skip_rpc_validation = matches!(config_command, ConfigCommands::Validate);
            let result =
                ConfigValidator::validate_with_result(&config, &rpc_client, skip_rpc_validation)
                    .await;
            std::process::exit(if result.is_ok() { 0 } else { 1 });
        }
        Some(Commands::Start { server_args }) => {
            match ConfigValidator::validate_with_result(&config, &rpc_client, true).await {
                Err(errors) => {
                    for e in errors {
                        print_error(&format!("Validation error: {e}"));
                    }
                    std::process::exit(1);
                }
                Ok(warnings) => {
                    for w in warnings {
                        println!("Warning: {w}");
                    }
                }
            }

            setup_logging(server_args.logging_format);

            let action = DonateAction::new(rpc_client, Arc::new(config));
            let mut handle = run_server(action, server_args.socket_addr()).await?;

            tokio::signal::ctrl_c().await?;
            println!("Shutting down server...");

            handle.stop()?;
            handle.stopped().await?;
            log::info!("Server stopped");
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  start                    - Start the donation action server");
            println!("  config validate          - Validate configuration");
            println!("  config validate-with-rpc - Validate configuration with RPC calls");
        }
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}
