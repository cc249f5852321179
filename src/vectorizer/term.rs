use tracing::warn;

use crate::{
    error::{Result, VsmError},
    vectorizer::{config::UnknownTermPolicy, vocabulary::Vocabulary},
};

/// Dense term count vector, one slot per vocabulary dimension
pub type TermVector = Vec<u32>;

/// Builds term count vectors over a fixed vocabulary.
///
/// Building a vector never touches corpus statistics; the corpus frequency
/// is derived afterwards from the finished document vectors
/// (see `corpus_frequency`).
#[derive(Debug, Clone, Copy)]
pub struct VectorBuilder<'a> {
    vocabulary: &'a Vocabulary,
    policy: UnknownTermPolicy,
}

impl<'a> VectorBuilder<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: UnknownTermPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Count normalized terms into a vector of vocabulary length.
    ///
    /// With `UnknownTermPolicy::Reject` the first term missing from the
    /// vocabulary fails the whole vector.
    pub fn build<T>(&self, terms: &[T]) -> Result<TermVector>
    where
        T: AsRef<str>,
    {
        let mut vector = vec![0u32; self.vocabulary.len()];
        let mut dropped = 0usize;
        for term in terms {
            let term = term.as_ref();
            match (self.vocabulary.get(term), self.policy) {
                (Some(dim), _) => vector[dim] += 1,
                (None, UnknownTermPolicy::Reject) => {
                    return Err(VsmError::UnknownTerm { term: term.to_string() });
                }
                (None, UnknownTermPolicy::Drop) => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!(dropped, "dropped terms not present in the vocabulary");
        }
        Ok(vector)
    }
}

/// Total occurrences of every dimension across the given vectors
pub fn corpus_frequency(vectors: &[TermVector], dimensions: usize) -> Vec<u64> {
    let mut freq = vec![0u64; dimensions];
    for vector in vectors {
        debug_assert_eq!(vector.len(), dimensions);
        for (acc, &count) in freq.iter_mut().zip(vector) {
            *acc += count as u64;
        }
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_terms(&["cat", "sat", "dog"])
    }

    #[test]
    fn counts_terms_per_dimension() {
        let v = vocab();
        let b = VectorBuilder::new(&v, UnknownTermPolicy::Reject);
        assert_eq!(b.build(&["cat", "sat"]).unwrap(), vec![1, 1, 0]);
        assert_eq!(b.build(&["dog", "dog", "cat"]).unwrap(), vec![1, 0, 2]);
        assert_eq!(b.build::<&str>(&[]).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn reject_policy_fails_on_unknown_term() {
        let v = vocab();
        let b = VectorBuilder::new(&v, UnknownTermPolicy::Reject);
        match b.build(&["cat", "bird"]) {
            Err(VsmError::UnknownTerm { term }) => assert_eq!(term, "bird"),
            other => panic!("expected UnknownTerm, got {:?}", other),
        }
    }

    #[test]
    fn drop_policy_skips_unknown_term() {
        let v = vocab();
        let b = VectorBuilder::new(&v, UnknownTermPolicy::Drop);
        assert_eq!(b.build(&["bird", "cat", "fish"]).unwrap(), vec![1, 0, 0]);
    }

    #[test]
    fn corpus_frequency_sums_columns() {
        let vectors = vec![vec![1, 1, 0], vec![0, 1, 1], vec![2, 0, 0]];
        assert_eq!(corpus_frequency(&vectors, 3), vec![3, 2, 1]);
        assert_eq!(corpus_frequency(&[], 2), vec![0, 0]);
    }
}
