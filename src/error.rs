//! Errors raised by the vector space engine.

/// Every fallible operation of the crate returns this error.
/// A failure never leaves a built `VectorSpace` in a different state.
#[derive(Debug, thiserror::Error)]
pub enum VsmError {
    /// A query term produced by normalization is not part of the vocabulary.
    #[error("unknown term `{term}`: not present in the vocabulary")]
    UnknownTerm { term: String },

    /// The corpus frequency of a dimension is zero, so `log10(K / freq)` is undefined.
    #[error("zero corpus frequency for dimension {dimension}")]
    ZeroFrequency { dimension: usize },

    /// Two vectors of different length were compared.
    #[error("dimension mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A document position outside the corpus was requested.
    #[error("document {id} out of range (corpus holds {len} documents)")]
    DocumentOutOfRange { id: usize, len: usize },

    #[error("corpus too large: {actual} documents exceeds the limit of {limit}")]
    CorpusTooLarge { limit: usize, actual: usize },

    #[error("vocabulary too large: {actual} terms exceeds the limit of {limit}")]
    VocabularyTooLarge { limit: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config decode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VsmError>;
