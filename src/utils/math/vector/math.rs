use std::cmp::Ordering;
use std::ops::AddAssign;

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// Walks both index lists once (merge join), O(nnz_a + nnz_b).
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (a_inds, a_vals) = (self.indices(), self.values());
        let (b_inds, b_vals) = (other.indices(), other.values());
        if a_inds.is_empty() || b_inds.is_empty() {
            return result;
        }

        let mut i = 0;
        let mut j = 0;
        while i < a_inds.len() && j < b_inds.len() {
            match a_inds[i].cmp(&b_inds[j]) {
                Ordering::Equal => {
                    let a: R = a_vals[i].into();
                    let b: R = b_vals[j].into();
                    result += a * b;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for &val in self.values() {
            let val: R = val.into();
            result += val * val;
        }
        result
    }

    /// euclidean norm ||a|| = sqrt(Σ(a_i^2))
    #[inline]
    pub fn norm(&self) -> f64
    where
        N: Into<f64>,
    {
        self.norm_sq::<f64>().sqrt()
    }

    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Returns 0.0 when either side is a zero vector.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> f64
    where
        N: Into<f64>,
    {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        let dot: f64 = self.dot(other);
        (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}
