use num::Num;

use crate::error::{Result, VsmError};

/// Vector element usable by the comparison functions.
/// Raw counts (`u32`) and weighted values (`f64`) both qualify.
pub trait Scalar: Num + Copy + Into<f64> + Send + Sync {}
impl<T> Scalar for T where T: Num + Copy + Into<f64> + Send + Sync {}

/// Similarity / distance between two dense vectors of equal length
pub trait Compare {
    /// d(a, b) = Σ(a_i * b_i)
    fn dot<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64>;
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// 0 when either norm is 0
    fn cosine_similarity<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64>;
    /// d(a, b) = sqrt(Σ((a_i - b_i)^2))
    fn euclidean_distance<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

#[inline]
fn check_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(VsmError::DimensionMismatch { left, right });
    }
    Ok(())
}

#[inline]
fn norm<A: Scalar>(a: &[A]) -> f64 {
    a.iter()
        .map(|&x| {
            let x: f64 = x.into();
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

impl Compare for DefaultCompare {
    #[inline]
    fn dot<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
        check_len(a.len(), b.len())?;
        Ok(a.iter()
            .zip(b)
            .map(|(&x, &y)| {
                let (x, y): (f64, f64) = (x.into(), y.into());
                x * y
            })
            .sum())
    }

    fn cosine_similarity<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
        let dot = Self::dot(a, b)?;
        let denom = norm(a) * norm(b);
        // ゼロベクトルは類似度0
        if denom == 0.0 {
            return Ok(0.0);
        }
        Ok(dot / denom)
    }

    fn euclidean_distance<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
        check_len(a.len(), b.len())?;
        Ok(a.iter()
            .zip(b)
            .map(|(&x, &y)| {
                let (x, y): (f64, f64) = (x.into(), y.into());
                (x - y) * (x - y)
            })
            .sum::<f64>()
            .sqrt())
    }
}
