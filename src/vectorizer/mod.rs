pub mod compare;
pub mod config;
pub mod evaluate;
pub mod feedback;
pub mod term;
pub mod tfidf;
pub mod vocabulary;

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    error::{Result, VsmError},
    utils::normalizer::{DefaultNormalizer, TextNormalizer},
    vectorizer::{
        compare::{Compare, DefaultCompare},
        config::{EngineConfig, UnknownTermPolicy},
        evaluate::scoring::ScoringMode,
        feedback::FeedbackResult,
        term::{corpus_frequency, TermVector, VectorBuilder},
        tfidf::{DefaultIdfEngine, IdfEngine, WeightedMatrix},
        vocabulary::Vocabulary,
    },
};

/// Vector space over one fixed corpus.
///
/// Everything is built in `build` and never mutated afterwards:
/// - the vocabulary
/// - one raw term count vector per document (corpus order)
/// - the corpus frequency of every dimension, summed from the document vectors
///
/// Query vectors are built from the vocabulary alone and never feed back into
/// the corpus frequency. The IDF weighted matrix is derived on demand.
///
/// `VectorSpace<Z, E, C>` has the following generic parameters:
/// - `Z`: text normalizer (tokenize + stopword removal)
/// - `E`: IDF engine
/// - `C`: similarity / distance functions
#[derive(Debug, Clone)]
pub struct VectorSpace<Z = DefaultNormalizer, E = DefaultIdfEngine, C = DefaultCompare>
where
    Z: TextNormalizer,
    E: IdfEngine,
    C: Compare,
{
    config: EngineConfig,
    normalizer: Z,
    vocabulary: Vocabulary,
    documents: Vec<TermVector>,
    frequency: Vec<u64>,
    _marker: PhantomData<(E, C)>,
}

impl VectorSpace {
    /// Build with the English stopword normalizer and the default config
    pub fn new<T>(documents: &[T]) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        Self::build(documents, DefaultNormalizer::new(), EngineConfig::default())
    }

    /// Build with the English stopword normalizer
    ///
    /// # Arguments
    /// * `documents` - document strings, corpus order
    /// * `config` - validated before anything is built
    ///
    /// # Returns
    /// * `VsmError::Config` on an invalid config, or the size limit error it sets
    pub fn with_config<T>(documents: &[T], config: EngineConfig) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        Self::build(documents, DefaultNormalizer::new(), config)
    }
}

impl<Z, E, C> VectorSpace<Z, E, C>
where
    Z: TextNormalizer,
    E: IdfEngine,
    C: Compare,
{
    /// Create the vector space for the given document strings
    #[instrument(skip_all, fields(documents = documents.len()))]
    pub fn build<T>(documents: &[T], normalizer: Z, config: EngineConfig) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        config.validate()?;
        if let Some(limit) = config.max_documents {
            if documents.len() > limit {
                return Err(VsmError::CorpusTooLarge { limit, actual: documents.len() });
            }
        }

        let vocabulary = Vocabulary::build(documents, &normalizer);
        if let Some(limit) = config.max_vocabulary {
            if vocabulary.len() > limit {
                return Err(VsmError::VocabularyTooLarge { limit, actual: vocabulary.len() });
            }
        }

        // every document term is in the vocabulary, so Reject never fires here
        let builder = VectorBuilder::new(&vocabulary, UnknownTermPolicy::Reject);
        let vectors = documents
            .par_iter()
            .map(|doc| builder.build(&normalizer.normalize(doc.as_ref())))
            .collect::<Result<Vec<_>>>()?;
        let frequency = corpus_frequency(&vectors, vocabulary.len());
        debug!(vocabulary = vocabulary.len(), "vector space built");

        Ok(Self {
            config,
            normalizer,
            vocabulary,
            documents: vectors,
            frequency,
            _marker: PhantomData,
        })
    }

    /// Convert query terms into a term vector.
    /// The terms are joined with a space and normalized like a document.
    ///
    /// # Arguments
    /// * `terms` - query terms
    ///
    /// # Returns
    /// * `TermVector` - raw counts, vocabulary length
    /// * `VsmError::UnknownTerm` - under `UnknownTermPolicy::Reject` only
    pub fn query_vector<T>(&self, terms: &[T]) -> Result<TermVector>
    where
        T: AsRef<str>,
    {
        let joined = terms.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(" ");
        let normalized = self.normalizer.normalize(&joined);
        VectorBuilder::new(&self.vocabulary, self.config.unknown_terms).build(&normalized)
    }

    /// IDF weighted document vectors.
    /// Pure: derived from the build time frequency every call.
    pub fn weighted_matrix(&self) -> Result<WeightedMatrix> {
        WeightedMatrix::compute::<E>(&self.frequency, &self.documents, &self.config)
    }

    /// Same as `tf_cosine`
    pub fn search<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        self.tf_cosine(terms)
    }

    /// Raw term counts + cosine similarity, higher is better
    pub fn tf_cosine<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        let query = self.query_vector(terms)?;
        debug!(mode = ?ScoringMode::TfCosine, "scoring");
        self.documents
            .par_iter()
            .map(|doc| C::cosine_similarity(&query, doc))
            .collect()
    }

    /// Raw term counts + euclidean distance, lower is better
    pub fn tf_euclidean<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        let query = self.query_vector(terms)?;
        debug!(mode = ?ScoringMode::TfEuclidean, "scoring");
        self.documents
            .par_iter()
            .map(|doc| C::euclidean_distance(&query, doc))
            .collect()
    }

    /// IDF weighted documents + cosine similarity.
    /// The query itself stays unweighted.
    pub fn idf_cosine<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        let query = self.query_vector(terms)?;
        let weighted = self.weighted_matrix()?;
        debug!(mode = ?ScoringMode::IdfCosine, "scoring");
        feedback::cosine_scores::<C, _>(&query, &weighted)
    }

    /// IDF weighted documents + euclidean distance against the raw query
    pub fn idf_euclidean<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        let query = self.query_vector(terms)?;
        let weighted = self.weighted_matrix()?;
        debug!(mode = ?ScoringMode::IdfEuclidean, "scoring");
        weighted
            .rows
            .par_iter()
            .map(|row| C::euclidean_distance(&query, row))
            .collect()
    }

    /// Full Rocchio round, including the selected document and refined query
    pub fn feedback<T: AsRef<str>>(&self, terms: &[T]) -> Result<FeedbackResult> {
        let query = self.query_vector(terms)?;
        let weighted = self.weighted_matrix()?;
        let result = feedback::rocchio::<C>(
            &query,
            &weighted,
            &self.documents,
            self.config.feedback_weight,
        )?;
        debug!(mode = ?ScoringMode::FeedbackCosine, top_document = result.top_document, "scoring");
        Ok(result)
    }

    /// Rocchio refined query + IDF weighted documents + cosine similarity
    pub fn feedback_cosine<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<f64>> {
        Ok(self.feedback(terms)?.scores)
    }

    /// Scores for one of the query operations
    ///
    /// # Arguments
    /// * `mode` - which of the five models to run
    /// * `terms` - query terms
    ///
    /// # Returns
    /// * `Vec<f64>` - one score per document, corpus order.
    ///   Similarities are higher-better, distances lower-better (`mode.is_distance()`).
    pub fn score<T: AsRef<str>>(&self, mode: ScoringMode, terms: &[T]) -> Result<Vec<f64>> {
        match mode {
            ScoringMode::TfCosine => self.tf_cosine(terms),
            ScoringMode::TfEuclidean => self.tf_euclidean(terms),
            ScoringMode::IdfCosine => self.idf_cosine(terms),
            ScoringMode::IdfEuclidean => self.idf_euclidean(terms),
            ScoringMode::FeedbackCosine => self.feedback_cosine(terms),
        }
    }

    /// Cosine of one document against every document (itself included)
    ///
    /// # Arguments
    /// * `document_id` - corpus position
    ///
    /// # Returns
    /// * `Vec<f64>` - raw count cosine, corpus order
    /// * `VsmError::DocumentOutOfRange` - when `document_id >= len()`
    pub fn related(&self, document_id: usize) -> Result<Vec<f64>> {
        let target = self.documents.get(document_id).ok_or(VsmError::DocumentOutOfRange {
            id: document_id,
            len: self.documents.len(),
        })?;
        self.documents
            .par_iter()
            .map(|doc| C::cosine_similarity(target, doc))
            .collect()
    }

    /// terms in first appearance order, dimension `i` is term `i`
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// raw term count vectors, corpus order
    pub fn documents(&self) -> &[TermVector] {
        &self.documents
    }

    /// corpus wide occurrences per dimension
    pub fn frequency(&self) -> &[u64] {
        &self.frequency
    }

    /// config the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Z {
        &self.normalizer
    }

    /// number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
