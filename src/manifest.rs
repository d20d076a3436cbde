use serde::{Deserialize, Serialize};
use serde_json::Value;
use indexmap::IndexMap;
use chrono::{DateTime, Utc};

/// Metadata for a token report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Total number of tokens, duplicates included
    pub token_count: usize,

    /// Number of distinct tokens
    pub unique_count: usize,

    /// Label of the scanned content (file name, "stdin", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Extractor version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_version: Option<String>,
}

/// Result of one extraction, ready to be serialized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReport {
    pub metadata: ReportMetadata,

    /// Tokens in the order they were found
    pub tokens: Vec<String>,

    /// Occurrences per token, in first-seen order
    pub counts: IndexMap<String, usize>,
}

impl TokenReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            metadata: ReportMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                token_count: 0,
                unique_count: 0,
                source: None,
                extractor_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            tokens: Vec::new(),
            counts: IndexMap::new(),
        }
    }

    /// Build a report from extracted tokens
    pub fn from_tokens<I>(tokens: I, source: Option<String>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut report = Self::new();
        report.metadata.source = source;
        for token in tokens {
            report.add_token(token);
        }
        report
    }

    /// Record one more token occurrence
    pub fn add_token(&mut self, token: String) {
        *self.counts.entry(token.clone()).or_insert(0) += 1;
        self.tokens.push(token);
        self.metadata.token_count = self.tokens.len();
        self.metadata.unique_count = self.counts.len();
    }

    /// Distinct tokens in first-seen order
    pub fn unique_tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Convert report to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert report to pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert report to compact JSON string
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for TokenReport {
    fn default() -> Self {
        Self::new()
    }
}
