//! This crate is a small vector space retrieval engine.

pub mod error;
pub mod utils;
pub mod vectorizer;

/// Vector Space
/// The top-level struct of this crate.
/// It maps a fixed document collection and incoming queries onto dense term
/// count vectors over a shared vocabulary and ranks the documents.
///
/// Internally, it holds:
/// - The vocabulary (term -> dimension, first occurrence order)
/// - One raw term count vector per document
/// - The corpus frequency of every dimension
///
/// Query operations, each returning one score per document in corpus order:
/// - `tf_cosine`: raw counts + cosine similarity
/// - `tf_euclidean`: raw counts + euclidean distance
/// - `idf_cosine`: IDF weighting + cosine similarity
/// - `idf_euclidean`: IDF weighting + euclidean distance
/// - `feedback_cosine`: Rocchio refined query + IDF weighting + cosine similarity
///
/// # Thread Safety
/// Fully built before it is returned, and immutable afterwards.
/// Queries take `&self` and can run from multiple threads.
pub use vectorizer::VectorSpace;

/// Engine configuration
/// IDF scale constant, optional frequency floor, feedback weight,
/// unknown term policy and build size limits.
pub use vectorizer::config::{EngineConfig, UnknownTermPolicy};

/// Vocabulary
/// Immutable term -> dimension mapping.
pub use vectorizer::vocabulary::Vocabulary;

/// Term count vectors and their builder
pub use vectorizer::term::{TermVector, VectorBuilder};

/// IDF Calculation Engine Trait
/// Plug a different IDF formula into `VectorSpace<Z, E>`.
/// `DefaultIdfEngine` computes `log10(K / freq)` with a fixed K.
pub use vectorizer::tfidf::{DefaultIdfEngine, IdfEngine, WeightedMatrix};

/// Similarity / distance functions
pub use vectorizer::compare::{Compare, DefaultCompare};

/// Rocchio feedback outcome
pub use vectorizer::feedback::FeedbackResult;

/// Search Hits and scoring modes
/// - `ScoringMode`: the five query operations, and their sort direction
/// - `Hits`: keyed scores with sort / truncate / fixed precision display
pub use vectorizer::evaluate::scoring::{Hits, ScoringMode};

/// Text normalization
pub use utils::normalizer::{DefaultNormalizer, TextNormalizer};

pub use error::{Result, VsmError};
