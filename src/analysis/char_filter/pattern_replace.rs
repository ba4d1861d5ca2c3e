use regex::Regex;

use super::{CharFilter, collapse_whitespace};
use crate::error::{LexicleanError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// Optionally collapses runs of whitespace left behind by the replacement.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    collapse: bool,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                LexicleanError::analysis(format!("invalid pattern {pattern:?}: {e}"))
            })?,
            replacement: replacement.to_string(),
            collapse: false,
            name: "pattern_replace",
        })
    }

    /// Replace every decimal digit with a space and collapse whitespace.
    pub fn digits() -> Result<Self> {
        Ok(Self::new(r"\d", " ")?
            .collapse_whitespace(true)
            .with_name("digits"))
    }

    /// Collapse whitespace after replacing.
    pub fn collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // NoExpand: the replacement is literal, `$` carries no group meaning.
        let replaced = self
            .pattern
            .replace_all(input, regex::NoExpand(&self.replacement));
        if self.collapse {
            collapse_whitespace(&replaced)
        } else {
            replaced.into_owned()
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
