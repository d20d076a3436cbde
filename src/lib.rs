pub mod args;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod hooks;
pub mod manifest;
pub mod registry;

pub use args::{CheckArgs, Cli, Commands, OutputFormat, PipeArgs};
pub use config::{ExtractorEntry, PurgeConfig};
pub use errors::{ExtractorError, Result};
pub use extractor::{extract, extract_tokens, Extractor, TokenExtractor, TOKEN_PATTERN};
pub use hooks::{ExtractionHook, LogHook};
pub use manifest::{ReportMetadata, TokenReport};
pub use registry::ExtractorRegistry;

/// Extension whose registration the pipe command uses when none is given
pub const DEFAULT_EXTENSION: &str = "html";

/// Pick the extractor the pipe command should run
pub fn select_extractor(args: &PipeArgs) -> Result<TokenExtractor> {
    let config = match &args.config {
        Some(path) => PurgeConfig::load(path)?,
        None => PurgeConfig::default(),
    };

    let extractor = match (&args.extension, &args.config) {
        (Some(ext), _) => {
            let registry = ExtractorRegistry::from_config(&config)?;
            registry.for_extension(ext).cloned().ok_or_else(|| {
                ExtractorError::InvalidInput(format!(
                    "No extractor registered for extension '{}'",
                    ext
                ))
            })?
        }
        // A config without --extension uses its html registration, if it has one
        (None, Some(_)) => {
            let registry = ExtractorRegistry::from_config(&config)?;
            registry
                .for_extension(DEFAULT_EXTENSION)
                .cloned()
                .unwrap_or_default()
        }
        (None, None) => TokenExtractor::new(),
    };

    if args.debug && !extractor.has_hook() {
        Ok(extractor.with_hook(LogHook))
    } else {
        Ok(extractor)
    }
}

/// Turn content into the pipe command's output text
///
/// Returns an empty string for whitespace-only content. The extractor still
/// runs on it, so an attached hook sees every input.
pub fn render_tokens(content: &str, extractor: &TokenExtractor, args: &PipeArgs) -> Result<String> {
    let mut tokens = extractor.extract(content);
    if content.trim().is_empty() {
        return Ok(String::new());
    }

    if args.unique {
        let mut seen = std::collections::HashSet::new();
        tokens.retain(|token| seen.insert(token.clone()));
    }

    log::debug!("Extracted {} tokens from {} bytes", tokens.len(), content.len());

    match args.format {
        OutputFormat::Lines => {
            let mut out = tokens.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = TokenReport::from_tokens(tokens, Some("stdin".to_string()));
            let mut out = if args.compact {
                report.to_compact_json()?
            } else {
                report.to_pretty_json()?
            };
            out.push('\n');
            Ok(out)
        }
    }
}

/// Handle pipe command - read content from stdin, write tokens to stdout
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

    args.validate().map_err(ExtractorError::InvalidInput)?;
    let extractor = select_extractor(&args)?;

    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin.read_to_string(&mut input).await
        .map_err(|e| ExtractorError::InputError(format!("Failed to read from stdin: {}", e)))?;

    let output = render_tokens(&input, &extractor, &args)?;
    if output.is_empty() {
        return Ok(());
    }

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes()).await
        .map_err(|e| ExtractorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    stdout.flush().await
        .map_err(|e| ExtractorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    Ok(())
}

/// Handle check command - load, validate and print the resolved configuration
pub fn handle_check_command(args: &CheckArgs) -> Result<String> {
    let config = PurgeConfig::load(&args.config)?;
    let registry = ExtractorRegistry::from_config(&config)?;

    log::info!(
        "{}: {} content pattern(s), {} css pattern(s), extractors for {:?}",
        args.config.display(),
        config.content.len(),
        config.css.len(),
        registry.extensions().collect::<Vec<_>>()
    );

    Ok(serde_json::to_string_pretty(&config)?)
}
