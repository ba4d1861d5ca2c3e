use super::contractions::ENGLISH_CONTRACTIONS;
use super::{CharFilter, collapse_whitespace};

/// Characters removed by [`MappingCharFilter::punctuation`], in order.
///
/// The first three entries are the two-character sequences backslash-n,
/// backslash-r and backslash-t, not control characters; real line breaks and
/// tabs are whitespace and disappear when whitespace is collapsed.
pub const PUNCTUATION: &[&str] = &[
    r"\n", r"\r", r"\t", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".",
    "/", ":", ";", "<", "=", ">", "?", "@", "[", "\\", "]", "^", "_", "`", "{", "|", "}", "~",
];

/// A char filter that applies an ordered list of literal replacements.
///
/// Each pair is applied to the output of the previous one, replacing every
/// occurrence of the key. Unlike a single-pass multi-pattern matcher, a later
/// key can match text produced by an earlier replacement, and an earlier key
/// can consume text a later key would have matched.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    mapping: Vec<(String, String)>,
    collapse: bool,
    name: &'static str,
}

impl MappingCharFilter {
    /// Create a new mapping char filter from ordered (from, to) pairs.
    ///
    /// Pairs with an empty key are ignored.
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mapping = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self {
            mapping,
            collapse: false,
            name: "mapping",
        }
    }

    /// Expand English contractions (`"don't"` to `"do not"`).
    pub fn english_contractions() -> Self {
        Self::new(ENGLISH_CONTRACTIONS.iter().copied())
            .collapse_whitespace(true)
            .with_name("contractions")
    }

    /// Replace ASCII punctuation with spaces.
    pub fn punctuation() -> Self {
        Self::new(PUNCTUATION.iter().map(|p| (*p, " ")))
            .collapse_whitespace(true)
            .with_name("punctuation")
    }

    /// Collapse whitespace after all replacements ran.
    pub fn collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Number of replacement pairs.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (from, to) in &self.mapping {
            if output.contains(from.as_str()) {
                output = output.replace(from.as_str(), to);
            }
        }
        if self.collapse {
            collapse_whitespace(&output)
        } else {
            output
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
