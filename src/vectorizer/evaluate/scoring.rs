use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// Query operations exposed by `VectorSpace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoringMode {
    /// raw term counts + cosine similarity
    TfCosine,
    /// raw term counts + euclidean distance
    TfEuclidean,
    /// IDF weighted documents + cosine similarity
    IdfCosine,
    /// IDF weighted documents + euclidean distance
    IdfEuclidean,
    /// Rocchio refined query + IDF weighted documents + cosine similarity
    FeedbackCosine,
}

impl ScoringMode {
    pub const ALL: [ScoringMode; 5] = [
        ScoringMode::TfCosine,
        ScoringMode::TfEuclidean,
        ScoringMode::IdfCosine,
        ScoringMode::IdfEuclidean,
        ScoringMode::FeedbackCosine,
    ];

    /// Lower is better for distances
    #[inline]
    pub fn is_distance(&self) -> bool {
        matches!(self, ScoringMode::TfEuclidean | ScoringMode::IdfEuclidean)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoringMode::TfCosine => "Term Frequency (TF) Weighting + Cosine Similarity",
            ScoringMode::TfEuclidean => "Term Frequency (TF) Weighting + Euclidean Distance",
            ScoringMode::IdfCosine => "TF-IDF Weighting + Cosine Similarity",
            ScoringMode::IdfEuclidean => "TF-IDF Weighting + Euclidean Distance",
            ScoringMode::FeedbackCosine => "FeedBack Queries + TF-IDF Weighting + Cosine Similarity",
        }
    }
}

/// Structure to store ranked results
#[derive(Clone, PartialEq, Serialize)]
pub struct Hits<K> {
    /// (Document key, Score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    pub fn new(list: Vec<(K, f64)>) -> Self {
        Hits { list }
    }

    /// Pair corpus aligned scores with document keys
    ///
    /// # Arguments
    /// * `keys` - document keys in corpus order
    /// * `scores` - one score per document, as returned by `VectorSpace`
    ///
    /// Both must have the same length.
    pub fn from_scores<I>(keys: I, scores: &[f64]) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        debug_assert_eq!(keys.len(), scores.len(), "one key per score");
        Hits {
            list: keys.into_iter().zip(scores.iter().copied()).collect(),
        }
    }

    /// Sort results by descending score.
    /// Stable, equal scores keep corpus order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // NaN は除外
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Sort results by ascending score
    pub fn sort_by_score_rev(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| a.1.total_cmp(&b.1));
        self
    }

    /// Sort in the direction that puts the best match first for `mode`
    ///
    /// # Arguments
    /// * `mode` - distances sort ascending, similarities descending
    pub fn rank(&mut self, mode: ScoringMode) -> &mut Self {
        if mode.is_distance() {
            self.sort_by_score_rev()
        } else {
            self.sort_by_score()
        }
    }

    /// Keep the first `k` entries.
    /// Call after sorting; fewer than `k` entries are left untouched.
    pub fn top_k(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    /// Display adapter with a fixed number of decimals
    ///
    /// # Arguments
    /// * `precision` - decimals printed per score
    ///
    /// # Returns
    /// * `HitsDisplay` - prints one `key score` line per entry
    pub fn display(&self, precision: usize) -> HitsDisplay<'_, K> {
        HitsDisplay { hits: self, precision }
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

pub struct HitsDisplay<'a, K> {
    hits: &'a Hits<K>,
    precision: usize,
}

impl<K> Display for HitsDisplay<'_, K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, score) in &self.hits.list {
            writeln!(f, "{} {:.*}", key, self.precision, score)?;
        }
        Ok(())
    }
}

impl<K: Display> Display for Hits<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(6), f)
    }
}
