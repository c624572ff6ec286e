//! Static reference tables: stop lists, reference corpora, skill vocabularies
//! and fixed suggestion texts. Loaded once, never mutated.

pub mod corpus;
pub mod stopwords;
pub mod suggestions;
pub mod vocabulary;

pub use corpus::REFERENCE_CORPUS_VERSION;
