use crate::errors::{ExtractorError, Result};
use crate::hooks::ExtractionHook;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Characters that make up a selector token: ASCII letters and digits plus
/// `-`, `_`, `:`, `<`, `>` and `@`.
///
/// `<` and `>` are kept in the set, so markup fragments such as `<div` or
/// `test<` come out as tokens alongside real class names.
pub const TOKEN_PATTERN: &str = r"(?:[A-Za-z0-9]|-|_|:|<|>|@)+";

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN_PATTERN).unwrap());

/// Split `content` into selector tokens.
///
/// Every maximal run of [`TOKEN_PATTERN`] characters becomes one token, in
/// the order it appears. Anything else is a delimiter and is dropped. Content
/// without a single token character yields an empty vector.
pub fn extract(content: &str) -> Vec<String> {
    extract_tokens(content).map(str::to_string).collect()
}

/// Borrowing form of [`extract`].
pub fn extract_tokens(content: &str) -> impl Iterator<Item = &str> + '_ {
    TOKEN_REGEX.find_iter(content).map(|m| m.as_str())
}

/// Something that turns file content into candidate selector tokens.
pub trait Extractor {
    fn extract(&self, content: &str) -> Vec<String>;
}

impl<F> Extractor for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn extract(&self, content: &str) -> Vec<String> {
        self(content)
    }
}

/// Regex-driven extractor with an optional diagnostic hook.
#[derive(Clone)]
pub struct TokenExtractor {
    regex: Regex,
    hook: Option<Arc<dyn ExtractionHook>>,
}

impl TokenExtractor {
    /// Extractor using [`TOKEN_PATTERN`] and no hook.
    pub fn new() -> Self {
        Self {
            regex: Regex::clone(&TOKEN_REGEX),
            hook: None,
        }
    }

    /// Extractor using a custom token pattern.
    ///
    /// Fails if the pattern does not compile, or if it matches empty input,
    /// since such a pattern would produce empty tokens.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        if regex.is_match("") {
            return Err(ExtractorError::InvalidInput(format!(
                "token pattern '{}' matches the empty string",
                pattern
            )));
        }

        Ok(Self { regex, hook: None })
    }

    /// Attach a hook that observes every extraction.
    pub fn with_hook<H>(mut self, hook: H) -> Self
    where
        H: ExtractionHook + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Split `content` into tokens, then notify the hook if one is attached.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let tokens: Vec<String> = self
            .regex
            .find_iter(content)
            .map(|m| m.as_str())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        if let Some(hook) = &self.hook {
            hook.on_extract(content, &tokens);
        }

        tokens
    }
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TokenExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        TokenExtractor::extract(self, content)
    }
}

impl fmt::Debug for TokenExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenExtractor")
            .field("pattern", &self.regex.as_str())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}
