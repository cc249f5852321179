//! Single step Rocchio relevance feedback.
//!
//! 1. rank the weighted documents against the query (cosine)
//! 2. `refined[i] = query[i] + weight * top_raw[i]`
//! 3. rank the weighted documents again with the refined query
//!
//! The top document is chosen in weighted space but added to the query from
//! its raw count vector. Ties go to the lowest position.
//! A query with no known term is not expanded, so its scores stay 0.

use rayon::prelude::*;

use crate::{
    error::Result,
    vectorizer::{
        compare::{Compare, Scalar},
        term::TermVector,
        tfidf::WeightedMatrix,
    },
};

/// Outcome of a feedback pass
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackResult {
    /// position of the document used to expand the query
    pub top_document: usize,
    /// first pass cosine scores
    pub initial: Vec<f64>,
    /// expanded query
    pub refined_query: Vec<f64>,
    /// second pass cosine scores
    pub scores: Vec<f64>,
}

/// Cosine of `query` against every weighted row, in corpus order
pub fn cosine_scores<C, Q>(query: &[Q], weighted: &WeightedMatrix) -> Result<Vec<f64>>
where
    C: Compare,
    Q: Scalar,
{
    weighted
        .rows
        .par_iter()
        .map(|row| C::cosine_similarity(query, row))
        .collect()
}

/// Position of the highest positive score.
/// Only a strictly greater score replaces the current best, so ties keep the
/// lowest position, and an empty or all-zero score list yields 0.
///
/// The search starts from a 0.0 baseline, not from the first score: when every
/// score is negative (possible once a term occurs more than `idf_scale` times
/// and its IDF weight turns negative) the result is 0, not the position of the
/// least negative score.
pub fn best_match(scores: &[f64]) -> usize {
    let mut best = 0usize;
    let mut best_score = 0.0f64;
    for (i, &s) in scores.iter().enumerate() {
        if s > best_score {
            best_score = s;
            best = i;
        }
    }
    best
}

/// `query[i] + weight * document[i]`
///
/// # Arguments
/// * `query` - raw query counts
/// * `document` - raw counts of the selected document
/// * `weight` - Rocchio weight of the document (0.5 by default)
pub fn expand_query(query: &[u32], document: &[u32], weight: f64) -> Vec<f64> {
    debug_assert_eq!(query.len(), document.len());
    query
        .iter()
        .zip(document)
        .map(|(&q, &d)| q as f64 + weight * d as f64)
        .collect()
}

/// Run one feedback round.
///
/// `raw` must be positionally aligned with `weighted.rows`.
/// An empty corpus returns the unchanged query and empty score lists.
/// An all-zero query (every term dropped as unknown) keeps `top_document = 0`
/// but skips the expansion, so every score stays 0.
pub fn rocchio<C: Compare>(
    query: &TermVector,
    weighted: &WeightedMatrix,
    raw: &[TermVector],
    weight: f64,
) -> Result<FeedbackResult> {
    debug_assert_eq!(weighted.len(), raw.len());
    let initial = cosine_scores::<C, _>(query, weighted)?;
    let top_document = best_match(&initial);
    let refined_query = match raw.get(top_document) {
        Some(top) if query.iter().any(|&q| q > 0) => expand_query(query, top, weight),
        _ => query.iter().map(|&q| q as f64).collect(),
    };
    let scores = cosine_scores::<C, _>(&refined_query, weighted)?;
    Ok(FeedbackResult {
        top_document,
        initial,
        refined_query,
        scores,
    })
}
