use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Selector token extraction CLI - splits markup and scripts into candidate selector tokens
#[derive(Parser, Debug)]
#[command(name = "selector-extractor-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable debug logging"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read content from stdin and write its tokens to stdout
    Pipe(PipeArgs),
    /// Load and validate a configuration file
    Check(CheckArgs),
}

/// Output format for the pipe command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Lines,
    /// JSON token report
    Json,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone, Default)]
pub struct PipeArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON); without --extension its html extractor is used"
    )]
    pub config: Option<PathBuf>,

    /// Extension whose registered extractor should be used
    #[arg(
        short = 'x',
        long = "extension",
        value_name = "EXT",
        help = "Use the extractor registered for this file extension"
    )]
    pub extension: Option<String>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Lines,
        help = "Output format for the extracted tokens"
    )]
    pub format: OutputFormat,

    /// Drop repeated tokens
    #[arg(
        short = 'u',
        long = "unique",
        default_value_t = false,
        help = "Only emit the first occurrence of each token"
    )]
    pub unique: bool,

    /// Log input and tokens
    #[arg(
        long = "debug",
        default_value_t = false,
        help = "Log the scanned content and its tokens at debug level"
    )]
    pub debug: bool,

    /// Compact JSON
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Emit compact instead of pretty JSON"
    )]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        required = true,
        help = "Path to configuration file (YAML or JSON)"
    )]
    pub config: PathBuf,
}

impl PipeArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ext) = &self.extension {
            if ext.trim().trim_start_matches('.').is_empty() {
                return Err("Extension must not be empty".to_string());
            }
        }

        if self.compact && self.format != OutputFormat::Json {
            return Err("--compact only applies to --format json".to_string());
        }

        Ok(())
    }
}
