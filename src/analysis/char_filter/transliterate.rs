use unidecode::unidecode;

use super::CharFilter;

/// A char filter that rewrites each character to its closest ASCII spelling.
///
/// Accents and diacritics are dropped (`"café"` becomes `"cafe"`), letters
/// from other scripts are romanized, and characters with no ASCII
/// representation vanish.
#[derive(Clone, Debug, Default)]
pub struct TransliterateCharFilter;

impl TransliterateCharFilter {
    /// Create a new transliterate char filter.
    pub fn new() -> Self {
        TransliterateCharFilter
    }
}

impl CharFilter for TransliterateCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }
        unidecode(input)
    }

    fn name(&self) -> &'static str {
        "transliterate"
    }
}
