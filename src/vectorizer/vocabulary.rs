use indexmap::IndexMap;

use crate::utils::normalizer::{remove_duplicates, TextNormalizer};

/// Term -> dimension mapping.
///
/// Dimensions are contiguous and 0 based, assigned in first occurrence order
/// over the normalized concatenation of the corpus.
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    index: IndexMap<Box<str>, usize>,
}

impl Vocabulary {
    /// Build the vocabulary of a document list
    pub fn build<T, Z>(documents: &[T], normalizer: &Z) -> Self
    where
        T: AsRef<str>,
        Z: TextNormalizer + ?Sized,
    {
        let joined = documents
            .iter()
            .map(|d| d.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let terms = remove_duplicates(&normalizer.normalize(&joined));
        Self::from_terms(&terms)
    }

    /// Assign dimensions to terms in the given order, skipping repeats
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut index = IndexMap::with_capacity(terms.len());
        for term in terms {
            let next = index.len();
            index.entry(term.as_ref().into()).or_insert(next);
        }
        Self { index }
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// term at a dimension
    #[inline]
    pub fn term(&self, dimension: usize) -> Option<&str> {
        self.index.get_index(dimension).map(|(t, _)| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// terms in dimension order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|t| t.as_ref())
    }
}
