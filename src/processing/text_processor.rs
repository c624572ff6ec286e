//! Text normalization: lowercase, strip, tokenize, filter stop words, lemmatize

use crate::processing::lemmatizer::Lemmatizer;
use crate::resources::stopwords::NORMALIZER_STOP_WORDS_SET;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Normalizer shared by every scoring component.
///
/// Holds only references to static tables and a compiled regex, so cloning it
/// into each component is cheap.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: &'static HashSet<&'static str>,
    lemmatizer: Lemmatizer,
    non_alpha_regex: Regex,
}

/// Lemmatized, stop-word filtered lowercase tokens in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    tokens: Vec<String>,
}

impl NormalizedText {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Space-joined form consumed by the term-weighting engine
    pub fn as_document(&self) -> String {
        self.tokens.join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let non_alpha_regex = Regex::new(r"[^a-z\s]").expect("Invalid non-alphabetic regex");

        Self {
            stop_words: &*NORMALIZER_STOP_WORDS_SET,
            lemmatizer: Lemmatizer::new(),
            non_alpha_regex,
        }
    }

    /// Run the full normalization pipeline
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let cleaned = self.clean_text(text);
        let tokens = self
            .tokenize(&cleaned)
            .into_iter()
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect();

        NormalizedText { tokens }
    }

    /// Lowercase and drop everything that is not an ASCII letter or whitespace.
    /// Digits go too, so "5 years" keeps only "years".
    pub fn clean_text(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.non_alpha_regex.replace_all(&lowered, "").into_owned()
    }

    /// Split cleaned text into words, dropping stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| word.to_string())
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let normalizer = TextNormalizer::new();
        let text = "I have 5 years experience in Python, and led a team!";

        let normalized = normalizer.normalize(text);

        assert_eq!(
            normalized.tokens(),
            &["year", "experience", "python", "led", "team"]
        );
        assert_eq!(normalized.as_document(), "year experience python led team");
    }

    #[test]
    fn test_clean_text_drops_digits_and_punctuation() {
        let normalizer = TextNormalizer::new();

        let cleaned = normalizer.clean_text("Node.js, C++ & 40% growth!");

        assert_eq!(
            cleaned.split_whitespace().collect::<Vec<_>>(),
            vec!["nodejs", "c", "growth"]
        );
    }

    #[test]
    fn test_output_alphabetic_without_stop_words() {
        let normalizer = TextNormalizer::new();
        let text = "Résumé: The QUICK brown foxes jumped over 3 lazy dogs -- they're fast.";

        let normalized = normalizer.normalize(text);

        assert!(!normalized.is_empty());
        for token in normalized.tokens() {
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {}", token);
            assert!(!normalizer.is_stop_word(token));
        }
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new();
        let text = "Managed teams of engineers building databases and analytics pipelines for companies.";

        let once = normalizer.normalize(text).as_document();
        let twice = normalizer.normalize(&once).as_document();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("123 !!! 456").is_empty());
        assert!(normalizer.normalize("the and of").is_empty());
    }
}
