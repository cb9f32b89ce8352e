//! This crate recommends recipes similar to a query using TF-IDF vectors and cosine similarity.

pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod render;
pub mod utils;
pub mod vectorizer;

/// Recommender Context
/// The top-level struct of this crate. It holds everything a query needs:
/// - The recipe corpus (display and normalized texts)
/// - The TF-IDF vectorizer (vocabulary, idf table, one sparse vector per recipe)
/// - The all-pairs cosine similarity matrix
/// - Match label thresholds and the default `top-k`
///
/// It is built once and never mutated; share it by reference or `Arc`.
/// Use `ContextCell` for lazy, at-most-once construction across threads.
pub use context::{ContextCell, Recommendation, RecommenderContext, Stats};

/// TF-IDF Vectorizer
/// Converts a document collection into sparse TF-IDF vectors over a
/// stopword-filtered vocabulary.
///
/// The weighting scheme is picked with `build_with::<E, _>`, where `E`
/// implements `TFIDFEngine` (`DefaultTFIDFEngine` for raw counts,
/// `SublinearTFIDFEngine` for `1 + ln(count)`).
pub use vectorizer::TFIDFVectorizer;

/// Options for vocabulary construction (`min_df`, `max_df`, `min_token_len`)
pub use vectorizer::VectorizerOptions;

/// Stopword set, with the built-in recipe-domain list
pub use vectorizer::stopwords::StopWords;

/// TF-IDF Engine trait and its implementations.
/// idf is smoothed: `ln((1 + N) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine, TFIDFEngine};

/// Similarity matrix
/// Dense symmetric all-pairs cosine similarity, values in `[0, 1]`.
pub use vectorizer::evaluate::similarity::SimilarityMatrix;

/// Query resolution
/// Maps a free-text query to the first document containing it.
pub use vectorizer::evaluate::query::{QueryResolver, Resolution};

/// Ranking
/// `rank` returns the top-k neighbours of an anchor document, itself excluded.
pub use vectorizer::evaluate::scoring::{rank, rank_with, HitEntry, Hits, MatchLabel, MatchThresholds};

/// Corpus loading
pub use dataset::{Document, RecipeCorpus};

/// Configuration
pub use config::{ColumnNames, RecommenderConfig};

/// Errors
pub use error::{RecommendError, Result};
