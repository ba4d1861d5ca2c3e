//! URL removal.
//!
//! Matches scheme-qualified (`http://`, `https://`) and bare `www.` URLs
//! whose host has at least one dot followed by two or more non-whitespace
//! characters, and replaces each with a single space.
//!
//! Four shapes are recognised:
//!
//! ```text
//! https?://(www.|<not www>)<alnum><alnum or ->+<alnum>.<non-space>{2,}
//! www.<alnum><alnum or ->+<alnum>.<non-space>{2,}
//! https?://(www.|<not www>)<alnum>+.<non-space>{2,}
//! www.<alnum>+.<non-space>{2,}
//! ```
//!
//! `regex` has no look-around, so `<not www>` is spelled out on the leading
//! characters of the host. Every shape ends in a greedy `\S{2,}`, so a match
//! always runs to the next whitespace and only the start position matters.

use regex::Regex;

use super::{CharFilter, collapse_whitespace};
use crate::error::{LexicleanError, Result};

/// `[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}`
const HYPHEN_HOST: &str = r"[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.[^\s]{2,}";

/// `[a-zA-Z0-9]+\.\S{2,}`
const PLAIN_HOST: &str = r"[a-zA-Z0-9]+\.[^\s]{2,}";

/// [`HYPHEN_HOST`] restricted to hosts that do not start with `www`.
const HYPHEN_HOST_NOT_WWW: &str = concat!(
    r"(?:",
    r"[a-vx-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]",
    r"|w[a-vx-zA-Z0-9-][a-zA-Z0-9-]*[a-zA-Z0-9]",
    r"|ww[a-vx-zA-Z0-9]",
    r"|ww[a-vx-zA-Z0-9-][a-zA-Z0-9-]*[a-zA-Z0-9]",
    r")\.[^\s]{2,}"
);

/// [`PLAIN_HOST`] restricted to hosts that do not start with `www`.
const PLAIN_HOST_NOT_WWW: &str = r"(?:(?:ww?)?[a-vx-zA-Z0-9][a-zA-Z0-9]*|ww?)\.[^\s]{2,}";

/// A char filter that strips URLs and collapses the leftover whitespace.
#[derive(Clone, Debug)]
pub struct UrlCharFilter {
    pattern: Regex,
}

impl UrlCharFilter {
    /// Create a new URL char filter.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&Self::pattern_source())
            .map_err(|e| LexicleanError::analysis(format!("invalid URL pattern: {e}")))?;
        Ok(Self { pattern })
    }

    fn pattern_source() -> String {
        format!(
            r"https?://(?:www\.(?:{HYPHEN_HOST}|{PLAIN_HOST})|{HYPHEN_HOST_NOT_WWW}|{PLAIN_HOST_NOT_WWW})|www\.(?:{HYPHEN_HOST}|{PLAIN_HOST})"
        )
    }

    /// Check whether the text contains anything this filter would remove.
    pub fn contains_url(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

impl CharFilter for UrlCharFilter {
    fn filter(&self, input: &str) -> String {
        collapse_whitespace(&self.pattern.replace_all(input, " "))
    }

    fn name(&self) -> &'static str {
        "url"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        UrlCharFilter::new().unwrap().filter(input)
    }

    #[test]
    fn test_scheme_url() {
        assert_eq!(strip("check https://example.com/path now"), "check now");
        assert_eq!(strip("see http://a.co/x?y=1 ok"), "see ok");
    }

    #[test]
    fn test_bare_www_url() {
        assert_eq!(strip("visit www.my-site.org today"), "visit today");
        assert_eq!(strip("visit www.abc.de"), "visit");
    }

    #[test]
    fn test_scheme_with_www() {
        assert_eq!(strip("go https://www.example.com/a b"), "go b");
    }

    #[test]
    fn test_short_tld_is_kept() {
        // one character after the dot is not enough
        assert_eq!(strip("http://example.c"), "http://example.c");
    }

    #[test]
    fn test_www_prefix_without_dot_after_scheme() {
        // "wwwx" is neither "www." nor a host that avoids a leading "www"
        assert_eq!(strip("a http://wwwx.com b"), "a http://wwwx.com b");
        assert_eq!(strip("a http://wwx.com b"), "a b");
        assert_eq!(strip("a http://ww.com b"), "a b");
    }

    #[test]
    fn test_url_glued_to_text() {
        // the match runs to the next whitespace
        assert_eq!(strip("prefixhttps://example.com/x suffix"), "prefix suffix");
    }

    #[test]
    fn test_no_url() {
        let filter = UrlCharFilter::new().unwrap();
        assert!(!filter.contains_url("nothing to see here."));
        assert_eq!(filter.filter("nothing  to see"), "nothing to see");
    }
}
