//! Keyword extraction ranked by TF-IDF weight

use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::TermWeighting;
use log::debug;
use std::collections::HashMap;

/// Vocabulary cap of the single-document keyword space
const MAX_KEYWORD_FEATURES: usize = 100;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    normalizer: TextNormalizer,
    weighting: TermWeighting,
}

impl KeywordExtractor {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self {
            normalizer,
            weighting: TermWeighting::for_keywords(MAX_KEYWORD_FEATURES),
        }
    }

    /// Top `top_n` terms of `text` by weight, ties in first-seen order
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        let document = self.normalizer.normalize(text).as_document();

        match self.weighting.fit(&[document.as_str()]) {
            Ok(space) => space
                .ranked_terms(0)
                .into_iter()
                .take(top_n)
                .map(|(term, _)| term)
                .collect(),
            Err(e) => {
                debug!("Keyword vectorization failed ({}), ranking by frequency", e);
                Self::rank_by_frequency(&document, top_n)
            }
        }
    }

    /// Frequency ranking over raw tokens, same tie-break as the weighted path
    fn rank_by_frequency(document: &str, top_n: usize) -> Vec<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut word_freq: HashMap<&str, usize> = HashMap::new();

        for word in document.split_whitespace() {
            let count = word_freq.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        order.sort_by(|a, b| word_freq[b].cmp(&word_freq[a]));
        order
            .into_iter()
            .take(top_n)
            .map(|word| word.to_string())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(TextNormalizer::new())
    }
}
