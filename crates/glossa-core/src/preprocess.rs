use unicode_normalization::UnicodeNormalization;

/// Query normalization applied before any dictionary comparison
pub trait Preprocessor {
    // Default: case folding only, the query is otherwise untouched
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// NFKC folding before lowercasing, so full-width and compatibility forms
/// (`ｃａｔ`, `ﬁ`) compare equal to their plain spellings
pub struct UnicodePreprocessor;
impl Preprocessor for UnicodePreprocessor {
    fn process(&self, text: &str) -> String {
        text.nfkc().collect::<String>().to_lowercase()
    }
}

/// Pick the preprocessor for a lookup
pub fn preprocessor(normalize_unicode: bool) -> &'static dyn Preprocessor {
    if normalize_unicode {
        &UnicodePreprocessor
    } else {
        &DefaultPreprocessor
    }
}
