//! TF-IDF term weighting and cosine similarity.
//!
//! Every comparison fits its own vector space over only the documents passed
//! in. With two documents the idf of a term takes just two values (shared or
//! not shared), so scores saturate quickly. Weights from different fits are
//! not comparable.

use crate::error::{Result, ResumeScorerError};
use crate::resources::stopwords::VECTORIZER_STOP_WORDS_SET;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Shortest token the vectorizer indexes
const MIN_TOKEN_LEN: usize = 2;

/// Term → weight map for one document inside one fitted space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between two vectors; 0.0 when either is zero
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let dot: f64 = small
            .weights
            .iter()
            .map(|(term, weight)| weight * large.weight(term))
            .sum();

        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            0.0
        } else {
            dot / norms
        }
    }
}

/// A vector space fitted over a small document set
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Terms in first-seen order across the documents
    vocabulary: Vec<String>,
    idf: HashMap<String, f64>,
    vectors: Vec<TermVector>,
}

impl VectorSpace {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn vector(&self, index: usize) -> Option<&TermVector> {
        self.vectors.get(index)
    }

    pub fn document_count(&self) -> usize {
        self.vectors.len()
    }

    /// Terms of one document by weight descending, ties in first-seen order
    pub fn ranked_terms(&self, index: usize) -> Vec<(String, f64)> {
        let Some(vector) = self.vectors.get(index) else {
            return Vec::new();
        };

        let mut ranked: Vec<(String, f64)> = self
            .vocabulary
            .iter()
            .filter_map(|term| {
                let weight = vector.weight(term);
                (weight > 0.0).then(|| (term.clone(), weight))
            })
            .collect();

        // sort_by is stable, so equal weights keep vocabulary order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Vectorizer settings plus the fit and similarity operations
#[derive(Debug, Clone)]
pub struct TermWeighting {
    stop_words: Option<&'static HashSet<&'static str>>,
    max_features: Option<usize>,
}

impl Default for TermWeighting {
    fn default() -> Self {
        Self::new()
    }
}

impl TermWeighting {
    /// Vectorizer used for similarity comparisons: English stop list applied
    pub fn new() -> Self {
        Self {
            stop_words: Some(&*VECTORIZER_STOP_WORDS_SET),
            max_features: None,
        }
    }

    /// Vectorizer used for keyword ranking: no stop list, capped vocabulary
    pub fn for_keywords(max_features: usize) -> Self {
        Self {
            stop_words: None,
            max_features: Some(max_features),
        }
    }

    /// Split a document into the tokens the vectorizer indexes
    pub fn analyze(&self, document: &str) -> Vec<String> {
        document
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .filter(|token| {
                self.stop_words
                    .map_or(true, |stop_words| !stop_words.contains(token.as_str()))
            })
            .collect()
    }

    /// Fit a space over `documents`: raw counts times smoothed idf, L2-normalized
    pub fn fit(&self, documents: &[&str]) -> Result<VectorSpace> {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|doc| self.analyze(doc)).collect();

        let mut vocabulary: Vec<String> = Vec::new();
        let mut corpus_counts: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for tokens in &analyzed {
            let mut seen = HashSet::new();
            for token in tokens {
                let count = corpus_counts.entry(token.clone()).or_insert(0);
                if *count == 0 {
                    vocabulary.push(token.clone());
                }
                *count += 1;

                if seen.insert(token.as_str()) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(ResumeScorerError::EmptyDocument(
                "empty vocabulary; documents contain only stop words or nothing".to_string(),
            ));
        }

        if let Some(max_features) = self.max_features {
            if vocabulary.len() > max_features {
                let mut by_count: Vec<&String> = vocabulary.iter().collect();
                by_count.sort_by(|a, b| corpus_counts[*b].cmp(&corpus_counts[*a]));
                let kept: HashSet<String> =
                    by_count.into_iter().take(max_features).cloned().collect();
                vocabulary.retain(|term| kept.contains(term));
            }
        }

        let n = documents.len() as f64;
        let idf: HashMap<String, f64> = vocabulary
            .iter()
            .map(|term| {
                let df = document_frequency[term] as f64;
                (term.clone(), ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let vectors = analyzed
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<String, f64> = HashMap::new();
                for token in tokens {
                    if idf.contains_key(token) {
                        *counts.entry(token.clone()).or_insert(0.0) += 1.0;
                    }
                }

                let mut weights: HashMap<String, f64> = counts
                    .into_iter()
                    .map(|(term, count)| {
                        let weight = count * idf[&term];
                        (term, weight)
                    })
                    .collect();

                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in weights.values_mut() {
                        *weight /= norm;
                    }
                }

                TermVector { weights }
            })
            .collect();

        Ok(VectorSpace {
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Cosine similarity of two documents in a space fitted over just the pair.
    ///
    /// Fails with [`ResumeScorerError::EmptyDocument`] when either side has no
    /// indexable terms; callers fall back to a neutral score.
    pub fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64> {
        if self.analyze(doc_a).is_empty() || self.analyze(doc_b).is_empty() {
            return Err(ResumeScorerError::EmptyDocument(
                "one side of the comparison has no indexable terms".to_string(),
            ));
        }

        let space = self.fit(&[doc_a, doc_b])?;
        let similarity = match (space.vector(0), space.vector(1)) {
            (Some(a), Some(b)) => a.cosine(b),
            _ => 0.0,
        };

        debug!(
            "Similarity {:.4} over {} terms",
            similarity,
            space.vocabulary().len()
        );

        Ok(similarity.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let engine = TermWeighting::new();
        let similarity = engine
            .similarity("python react docker team", "python react docker team")
            .unwrap();

        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetry() {
        let engine = TermWeighting::new();
        let a = "python python java cloud experience";
        let b = "java cloud kubernetes leadership";

        let ab = engine.similarity(a, b).unwrap();
        let ba = engine.similarity(b, a).unwrap();

        assert!((ab - ba).abs() < 1e-6);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn test_disjoint_documents() {
        let engine = TermWeighting::new();
        let similarity = engine.similarity("python java", "finance audit").unwrap();
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_known_value() {
        // shared term idf = 1, unshared idf = ln(3/2) + 1
        let engine = TermWeighting::new();
        let similarity = engine.similarity("python java", "python").unwrap();

        let unshared = (1.5f64).ln() + 1.0;
        let expected = 1.0 / (1.0 + unshared * unshared).sqrt();
        assert!((similarity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_side_fails() {
        let engine = TermWeighting::new();

        let result = engine.similarity("", "python java");
        assert!(matches!(result, Err(ResumeScorerError::EmptyDocument(_))));

        // only stop words and single letters survive nothing
        let result = engine.similarity("system one two a", "python");
        assert!(result.unwrap_err().is_empty_document());
    }

    #[test]
    fn test_analyze_filters() {
        let engine = TermWeighting::new();
        let tokens = engine.analyze("go python system r sql");
        assert_eq!(tokens, vec!["python", "sql"]);

        let keyword_engine = TermWeighting::for_keywords(100);
        let tokens = keyword_engine.analyze("go python system r");
        assert_eq!(tokens, vec!["go", "python", "system"]);
    }

    #[test]
    fn test_ranked_terms_stable() {
        let engine = TermWeighting::for_keywords(100);
        let space = engine.fit(&["beta alpha beta gamma alpha delta"]).unwrap();

        let ranked: Vec<String> = space.ranked_terms(0).into_iter().map(|(t, _)| t).collect();
        assert_eq!(ranked, vec!["beta", "alpha", "gamma", "delta"]);
    }

    #[test]
    fn test_max_features() {
        let engine = TermWeighting::for_keywords(2);
        let space = engine.fit(&["one two two three three three"]).unwrap();
        assert_eq!(space.vocabulary(), &["two".to_string(), "three".to_string()]);
    }
}
