//! Selector extractor CLI
//!
//! 1. pipe - Read content from stdin, write its selector tokens to stdout
//! 2. check - Validate a purge configuration file and print it resolved

use anyhow::{Context, Result};
use clap::Parser;
use selector_extractor::{handle_check_command, handle_pipe_command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let debug_hook = matches!(&cli.command, Commands::Pipe(args) if args.debug);
    if cli.verbose || debug_hook {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Pipe(args) => {
            handle_pipe_command(args)
                .await
                .context("Failed to extract tokens from stdin")?;
        }
        Commands::Check(args) => {
            let resolved = handle_check_command(&args)
                .with_context(|| format!("Invalid configuration {:?}", args.config))?;
            println!("{}", resolved);
        }
    }

    Ok(())
}
