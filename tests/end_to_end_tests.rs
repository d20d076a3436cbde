use selector_extractor::{
    handle_check_command, handle_pipe_command, render_tokens, select_extractor, CheckArgs,
    ExtractorError, ExtractorRegistry, OutputFormat, PipeArgs, PurgeConfig, TokenExtractor,
    TOKEN_PATTERN,
};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

const PAGE: &str = r#"<div class=":hover--opacity:40">this is a test</div>"#;

fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_pipe_lines_output() {
    let args = PipeArgs::default();
    let extractor = select_extractor(&args).unwrap();

    let output = render_tokens(PAGE, &extractor, &args).unwrap();
    assert_eq!(
        output,
        "<div\nclass\n:hover--opacity:40\n>this\nis\na\ntest<\ndiv>\n"
    );
}

#[test]
fn test_pipe_unique_json_output() {
    let args = PipeArgs {
        format: OutputFormat::Json,
        unique: true,
        ..PipeArgs::default()
    };
    let extractor = select_extractor(&args).unwrap();

    let output = render_tokens("btn btn-primary btn", &extractor, &args).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["tokens"], serde_json::json!(["btn", "btn-primary"]));
    assert_eq!(report["metadata"]["token_count"], 2);
    assert_eq!(report["metadata"]["unique_count"], 2);
    assert_eq!(report["metadata"]["source"], "stdin");
}

#[test]
fn test_pipe_whitespace_input_renders_nothing() {
    let args = PipeArgs::default();
    let output = render_tokens("  \n\t ", &TokenExtractor::new(), &args).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_pipe_whitespace_input_still_reaches_hook() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let extractor = TokenExtractor::new().with_hook(move |content: &str, tokens: &[String]| {
        sink.lock().unwrap().push((content.to_string(), tokens.len()));
    });

    let output = render_tokens(" \n ", &extractor, &PipeArgs::default()).unwrap();

    assert!(output.is_empty());
    assert_eq!(*seen.lock().unwrap(), vec![(" \n ".to_string(), 0)]);
}

#[test]
fn test_pipe_delimiter_only_input_renders_empty_report() {
    let args = PipeArgs {
        format: OutputFormat::Json,
        compact: true,
        ..PipeArgs::default()
    };
    let output = render_tokens("...;;", &TokenExtractor::new(), &args).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["tokens"], serde_json::json!([]));
}

#[test]
fn test_extension_uses_configured_pattern() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.yaml",
        r#"
content: ["src/**/*.js"]
css: ["dist/*.css"]
extractors:
  - pattern: "[a-z]+"
    extensions: ["js"]
"#,
    );

    let args = PipeArgs {
        config: Some(config),
        extension: Some(".js".to_string()),
        ..PipeArgs::default()
    };
    let extractor = select_extractor(&args).unwrap();

    let output = render_tokens("md:p-4 <div>", &extractor, &args).unwrap();
    assert_eq!(output, "md\np\ndiv\n");
}

#[test]
fn test_config_without_extension_uses_html_registration() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.yaml",
        r#"
extractors:
  - pattern: "[a-z]+"
    extensions: ["html"]
"#,
    );

    let args = PipeArgs {
        config: Some(config),
        ..PipeArgs::default()
    };
    let extractor = select_extractor(&args).unwrap();

    assert_eq!(extractor.pattern(), "[a-z]+");
    assert_eq!(render_tokens("md:p-4", &extractor, &args).unwrap(), "md\np\n");
}

#[test]
fn test_config_without_html_registration_uses_default_pattern() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.json",
        r#"{ "extractors": [{ "pattern": "[a-z]+", "extensions": ["js"] }] }"#,
    );

    let args = PipeArgs {
        config: Some(config),
        ..PipeArgs::default()
    };

    assert_eq!(select_extractor(&args).unwrap().pattern(), TOKEN_PATTERN);
}

#[test]
fn test_config_registration_missing_extensions_fails() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.yaml",
        r#"
extractors:
  - pattern: "[a-z]+"
"#,
    );

    let args = PipeArgs {
        config: Some(config),
        ..PipeArgs::default()
    };

    let err = select_extractor(&args).unwrap_err();
    assert!(matches!(err, ExtractorError::ConfigError { .. }));
}

#[test]
fn test_unregistered_extension_fails() {
    let args = PipeArgs {
        extension: Some("css".to_string()),
        ..PipeArgs::default()
    };

    let err = select_extractor(&args).unwrap_err();
    assert!(matches!(err, ExtractorError::InvalidInput(_)));
    assert!(err.to_string().contains("css"));
}

#[test]
fn test_debug_flag_attaches_hook() {
    let args = PipeArgs {
        debug: true,
        ..PipeArgs::default()
    };
    assert!(select_extractor(&args).unwrap().has_hook());
    assert!(!select_extractor(&PipeArgs::default()).unwrap().has_hook());
}

#[test]
fn test_check_command_prints_resolved_config() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.json",
        r#"{ "extractors": [{ "extensions": ["html", "vue"], "debug": true }] }"#,
    );

    let resolved = handle_check_command(&CheckArgs { config }).unwrap();
    let parsed: PurgeConfig = serde_json::from_str(&resolved).unwrap();

    assert_eq!(parsed.content, vec!["debug/example.html"]);
    assert_eq!(parsed.css, vec!["debug/purge-please.css"]);
    assert_eq!(parsed.extractors[0].extensions, vec!["html", "vue"]);
    assert!(parsed.extractors[0].debug);
}

#[test]
fn test_check_command_rejects_invalid_config() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "purge.yml",
        r#"
extractors:
  - extensions: ["html"]
  - extensions: ["HTML"]
"#,
    );

    let err = handle_check_command(&CheckArgs { config }).unwrap_err();
    assert!(err.to_string().contains("html"));
}

#[test]
fn test_check_command_reports_missing_file() {
    let temp_dir = tempdir().unwrap();
    let err = handle_check_command(&CheckArgs {
        config: temp_dir.path().join("missing.yaml"),
    })
    .unwrap_err();

    assert!(matches!(err, ExtractorError::ConfigError { .. }));
}

#[test]
fn test_registry_dispatch_by_path() {
    let registry = ExtractorRegistry::from_config(&PurgeConfig::default()).unwrap();
    let tokens = registry
        .extract_for_path(Path::new("debug/example.html"), PAGE)
        .unwrap();

    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[2], ":hover--opacity:40");
}

#[tokio::test]
async fn test_pipe_command_rejects_invalid_args_before_reading() {
    let args = PipeArgs {
        compact: true,
        ..PipeArgs::default()
    };

    let result = handle_pipe_command(args).await;
    assert!(matches!(result, Err(ExtractorError::InvalidInput(_))));
}
