//! Optional diagnostic side-channel for extraction.
//!
//! A hook observes the content handed to an extractor and the tokens it
//! produced. It runs after the scan and cannot change the result, so an
//! extractor without a hook and one with a hook return identical tokens.

/// Observer invoked after every extraction performed by a [`TokenExtractor`].
///
/// [`TokenExtractor`]: crate::extractor::TokenExtractor
pub trait ExtractionHook: Send + Sync {
    /// Called with the scanned content and the tokens returned for it.
    fn on_extract(&self, content: &str, tokens: &[String]);
}

impl<F> ExtractionHook for F
where
    F: Fn(&str, &[String]) + Send + Sync,
{
    fn on_extract(&self, content: &str, tokens: &[String]) {
        self(content, tokens)
    }
}

/// Hook that writes each extraction to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHook;

impl LogHook {
    pub const TARGET: &'static str = "selector_extractor::extract";
}

impl ExtractionHook for LogHook {
    fn on_extract(&self, content: &str, tokens: &[String]) {
        log::debug!(
            target: Self::TARGET,
            "content={:?} tokens={:?}",
            content,
            tokens
        );
    }
}
