//! Error sequence formatting utilities.

use crate::types::alloc_type::{format, String, ToString};
use crate::types::Error;
use core::fmt::Display;

/// Trait for customizing how a sequence of errors is rendered.
pub trait ErrorFormatter {
    fn format_item(&self, _index: usize, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_sequence<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        let mut result = String::new();
        for (i, item) in items.enumerate() {
            if i > 0 {
                result.push_str(self.separator());
            }
            result.push_str(&self.format_item(i, item));
        }
        result
    }
}

/// Configuration-based error formatter.
///
/// The default configuration reproduces [`Errors::message`](crate::Errors::message):
/// messages in order, one per line, with no decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub item_suffix: Option<String>,
    /// Prefix each message with its 1-based position, e.g. `"2. "`.
    pub numbered: bool,
    /// Show at most this many errors, followed by an "and N more" line.
    pub max_items: Option<usize>,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self { separator: "\n".into(), item_prefix: None, item_suffix: None, numbered: false, max_items: None }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn numbered() -> Self {
        Self { numbered: true, ..Default::default() }
    }

    #[inline]
    pub fn bulleted() -> Self {
        Self { item_prefix: Some("- ".into()), ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, index: usize, item: &dyn Display) -> String {
        let mut result = String::new();
        if self.numbered {
            result.push_str(&format!("{}. ", index + 1));
        }
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }
        result.push_str(&item.to_string());
        if let Some(suffix) = &self.item_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_sequence<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        let mut result = String::new();
        let mut hidden = 0usize;
        for (i, item) in items.enumerate() {
            if self.max_items.is_some_and(|max| i >= max) {
                hidden += 1;
                continue;
            }
            if i > 0 {
                result.push_str(&self.separator);
            }
            result.push_str(&self.format_item(i, item));
        }
        if hidden > 0 {
            if !result.is_empty() {
                result.push_str(&self.separator);
            }
            result.push_str(&format!("... and {} more", hidden));
        }
        result
    }
}

/// Builder for customizing error sequence display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) errors: &'a [Error],
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(errors: &'a [Error]) -> Self {
        Self { errors, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn numbered(mut self, enabled: bool) -> Self {
        self.config.numbered = enabled;
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.config.max_items = Some(max);
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn bulleted(mut self) -> Self {
        self.config = ErrorFormatConfig::bulleted();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let items = self.errors.iter().map(|e| e as &dyn Display);
        f.write_str(&self.config.format_sequence(items))
    }
}
