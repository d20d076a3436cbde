use crate::config::{normalize_extension, PurgeConfig};
use crate::errors::Result;
use crate::extractor::TokenExtractor;
use crate::hooks::LogHook;
use indexmap::IndexMap;
use std::path::Path;

/// Extractors keyed by the file extension they are registered for.
#[derive(Debug, Clone, Default)]
pub struct ExtractorRegistry {
    by_extension: IndexMap<String, TokenExtractor>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every registration in `config`.
    ///
    /// Registrations with `debug` set get a [`LogHook`]. A later registration
    /// for an already known extension replaces the earlier one.
    pub fn from_config(config: &PurgeConfig) -> Result<Self> {
        let mut registry = Self::new();

        for entry in &config.extractors {
            let mut extractor = entry.build()?;
            if entry.debug {
                extractor = extractor.with_hook(LogHook);
            }
            for ext in &entry.extensions {
                registry.register(ext, extractor.clone());
            }
        }

        log::debug!(
            "Registered extractors for extensions: {:?}",
            registry.extensions().collect::<Vec<_>>()
        );

        Ok(registry)
    }

    pub fn register(&mut self, extension: &str, extractor: TokenExtractor) {
        self.by_extension.insert(normalize_extension(extension), extractor);
    }

    pub fn for_extension(&self, extension: &str) -> Option<&TokenExtractor> {
        self.by_extension.get(&normalize_extension(extension))
    }

    pub fn for_path(&self, path: &Path) -> Option<&TokenExtractor> {
        let ext = path.extension()?.to_str()?;
        self.for_extension(ext)
    }

    /// Tokens for `content` using the extractor registered for `path`.
    ///
    /// `None` when nothing is registered for the path's extension.
    pub fn extract_for_path(&self, path: &Path, content: &str) -> Option<Vec<String>> {
        self.for_path(path).map(|extractor| extractor.extract(content))
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.by_extension.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}
