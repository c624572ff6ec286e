//! Text processing and analysis module

pub mod analyzer;
pub mod category_scorer;
pub mod job_matcher;
pub mod keywords;
pub mod lemmatizer;
pub mod role_identifier;
pub mod skills;
pub mod text_processor;
pub mod tfidf;
