use rayon::prelude::*;

use crate::{
    error::{Result, VsmError},
    vectorizer::{compare::Scalar, config::EngineConfig, term::TermVector},
};

/// IDF calculation engine
///
/// Implementations must be pure: the same frequency slice and config always
/// produce the same IDF vector.
pub trait IdfEngine {
    /// IDF vector from the corpus frequency of every dimension
    /// # Arguments
    /// * `freq` - total occurrences per dimension
    /// * `config` - scale constant and optional frequency floor
    fn idf_vec<F: Scalar>(freq: &[F], config: &EngineConfig) -> Result<Vec<f64>>;

    /// element-wise `idf[i] * vector[i]`
    #[inline]
    fn weight(idf: &[f64], vector: &[u32]) -> Vec<f64> {
        debug_assert_eq!(idf.len(), vector.len());
        idf.iter()
            .zip(vector)
            .map(|(&w, &c)| w * c as f64)
            .collect()
    }
}

/// `idf[i] = log10(K / freq[i])`
/// K is `EngineConfig::idf_scale`, a fixed constant (2048 by default).
/// Terms more frequent than K get a negative weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIdfEngine;

impl IdfEngine for DefaultIdfEngine {
    fn idf_vec<F: Scalar>(freq: &[F], config: &EngineConfig) -> Result<Vec<f64>> {
        freq.iter()
            .enumerate()
            .map(|(dimension, &f)| {
                let mut f: f64 = f.into();
                // 下限があれば先に適用
                if let Some(floor) = config.min_frequency {
                    f = f.max(floor);
                }
                if f == 0.0 {
                    return Err(VsmError::ZeroFrequency { dimension });
                }
                Ok((config.idf_scale / f).log10())
            })
            .collect()
    }
}

/// IDF weighted document vectors, positionally aligned with the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMatrix {
    pub idf: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

impl WeightedMatrix {
    /// Weight every document vector with the IDF derived from `freq`.
    /// Never mutates `freq`, so repeated calls give identical matrices.
    pub fn compute<E: IdfEngine>(
        freq: &[u64],
        documents: &[TermVector],
        config: &EngineConfig,
    ) -> Result<Self> {
        let freq: Vec<f64> = freq.iter().map(|&f| f as f64).collect();
        let idf = E::idf_vec(&freq, config)?;
        let rows = documents
            .par_iter()
            .map(|doc| E::weight(&idf, doc))
            .collect();
        Ok(Self { idf, rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
