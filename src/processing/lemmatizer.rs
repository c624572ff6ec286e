//! Rule-based noun lemmatizer.
//!
//! Reduces inflected nouns to their dictionary form: irregular plurals come
//! from a fixed table, regular plurals are detached by suffix rules. Words that
//! merely end in `s` (proper nouns, adverbs, product names) are protected.
//! Verbs are left alone, so "led" stays "led".

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("curricula", "curriculum"),
        ("alumni", "alumnus"),
        ("syllabi", "syllabus"),
        ("analyses", "analysis"),
        ("diagnoses", "diagnosis"),
        ("hypotheses", "hypothesis"),
        ("theses", "thesis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
    ]
    .into_iter()
    .collect()
});

static PROTECTED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "always", "perhaps", "sometimes", "towards", "afterwards", "whereas", "news",
        "series", "species", "kubernetes", "jenkins", "pandas", "keras", "postgres",
        "windows", "means", "devops",
    ]
    .into_iter()
    .collect()
});

/// Endings that look plural but are not detached
const PROTECTED_SUFFIXES: &[&str] = &["ss", "us", "is", "js", "ics"];

/// Suffixes replaced by their base ending, checked in order
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lemmatize a single lowercase token. Applying it twice gives the same result.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = IRREGULAR_NOUNS.get(word) {
            return (*base).to_string();
        }

        if word.len() <= 3 || PROTECTED_WORDS.contains(word) {
            return word.to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                // "ies" needs a real stem: "lies" is not "ly"
                if stem.len() >= 2 {
                    return format!("{}{}", stem, replacement);
                }
            }
        }

        if PROTECTED_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
            return word.to_string();
        }

        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }
}
