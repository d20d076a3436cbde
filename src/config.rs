use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::errors::{ExtractorError, Result};
use crate::extractor::TokenExtractor;

/// Purge pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Content files (markup and scripts) to scan for used selectors
    pub content: Vec<String>,

    /// Stylesheet files whose unused rules may be removed
    pub css: Vec<String>,

    /// Extractors and the file extensions they apply to
    pub extractors: Vec<ExtractorEntry>,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            content: vec!["debug/example.html".to_string()],
            css: vec!["debug/purge-please.css".to_string()],
            extractors: vec![ExtractorEntry::for_extensions(&["html"])],
        }
    }
}

/// A single extractor registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorEntry {
    /// Custom token pattern; the built-in token pattern when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// File extensions handled by this extractor; empty fails validation
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Log every extraction at debug level
    #[serde(default)]
    pub debug: bool,
}

impl ExtractorEntry {
    /// Built-in token pattern registered for `extensions`
    pub fn for_extensions<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            pattern: None,
            extensions: extensions.iter().map(|ext| ext.as_ref().to_string()).collect(),
            debug: false,
        }
    }

    /// Compile this registration into an extractor (without hook)
    pub fn build(&self) -> Result<TokenExtractor> {
        match &self.pattern {
            Some(pattern) => TokenExtractor::with_pattern(pattern),
            None => Ok(TokenExtractor::new()),
        }
    }

    /// Whether this registration covers `extension`
    pub fn handles(&self, extension: &str) -> bool {
        let wanted = normalize_extension(extension);
        self.extensions
            .iter()
            .any(|ext| normalize_extension(ext) == wanted)
    }
}

/// Strip a leading dot and lowercase an extension for comparison
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

impl PurgeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ExtractorError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Load and validate in one step
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check globs, extension registrations and custom patterns
    pub fn validate(&self) -> Result<()> {
        for pattern in self.content.iter().chain(self.css.iter()) {
            glob::Pattern::new(pattern)?;
        }

        let mut seen = std::collections::HashSet::new();
        for (index, entry) in self.extractors.iter().enumerate() {
            if entry.extensions.is_empty() {
                return Err(ExtractorError::ConfigError {
                    message: format!("Extractor #{} has no extensions", index),
                });
            }

            for ext in &entry.extensions {
                let normalized = normalize_extension(ext);
                if normalized.is_empty() {
                    return Err(ExtractorError::ConfigError {
                        message: format!("Extractor #{} has an empty extension", index),
                    });
                }
                if !seen.insert(normalized.clone()) {
                    return Err(ExtractorError::ConfigError {
                        message: format!("Extension '{}' is registered more than once", normalized),
                    });
                }
            }

            entry.build()?;
        }

        Ok(())
    }

    /// Registration covering `extension`, if any
    pub fn extractor_for(&self, extension: &str) -> Option<&ExtractorEntry> {
        self.extractors.iter().find(|entry| entry.handles(extension))
    }

    /// Merge with another configuration
    pub fn merge(mut self, other: Self) -> Self {
        for path in other.content {
            if !self.content.contains(&path) {
                self.content.push(path);
            }
        }

        for path in other.css {
            if !self.css.contains(&path) {
                self.css.push(path);
            }
        }

        // Registrations from `other` take over any extension they redeclare
        for entry in other.extractors {
            for existing in &mut self.extractors {
                existing.extensions.retain(|ext| !entry.handles(ext));
            }
            self.extractors.retain(|existing| !existing.extensions.is_empty());
            self.extractors.push(entry);
        }

        self
    }
}
