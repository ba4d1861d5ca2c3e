//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole record before it is tokenized. Each filter
//! maps one string to another and never fails on ordinary text.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode case folding
//! - [`transliterate::TransliterateCharFilter`] - Closest plain-ASCII spelling
//! - [`url::UrlCharFilter`] - Removes `http(s)://` and `www.` URLs
//! - [`mapping::MappingCharFilter`] - Ordered literal replacements (contractions, punctuation)
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement (digits)
//!
//! # Examples
//!
//! ```
//! use lexiclean::analysis::char_filter::CharFilter;
//! use lexiclean::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Hello WORLD"), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Whitespace as understood by the pipeline.
///
/// Unicode `White_Space` plus the ASCII information separators
/// `U+001C..=U+001F`, which are also treated as word breaks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split on whitespace and rejoin the pieces with single spaces.
///
/// Leading and trailing whitespace disappears.
///
/// ```
/// use lexiclean::analysis::char_filter::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \t b\n\nc "), "a b c");
/// ```
pub fn collapse_whitespace(input: &str) -> String {
    input
        .split(is_separator)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub mod contractions;
pub mod lowercase;
pub mod mapping;
pub mod pattern_replace;
pub mod transliterate;
pub mod url;
