use clap::Parser;
use log::error;
use std::process::ExitCode;
use syncswapper::cli::{commands, Cli, Commands, SwapArgs};
use syncswapper::core::{Config, SwapResult};
use syncswapper::logging::{self, LogConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Startup errors can happen before the logger is installed.
            if log::max_level() == log::LevelFilter::Off {
                eprintln!("Error: {}", e);
            } else {
                error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> SwapResult<()> {
    // Load configuration; flags win over the environment
    let config = Config::from_env()?.apply(cli.global.into_overrides());

    logging::init(&LogConfig {
        default_filter: None,
        file: config.log_file.clone(),
    })?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Swap(SwapArgs::default())) {
        Commands::Swap(args) => commands::swap::execute(config, args).await,
        Commands::Balances => commands::balances::execute(config).await,
        Commands::Networks => commands::networks::execute(),
    }
}
