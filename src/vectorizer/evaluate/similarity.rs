use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::vectorizer::{TFIDFVector, TFIDFVectorizer};

/// All-pairs cosine similarity matrix
///
/// Dense, row-major, `n * n`. Symmetric, every entry in `[0, 1]`.
/// The diagonal is 1.0 for documents with a non-zero vector and 0.0 for
/// degenerate (empty / stopword-only) documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build from the vectorizer's document vectors.
    pub fn from_vectorizer(vectorizer: &TFIDFVectorizer) -> Self {
        Self::build(vectorizer.vectors())
    }

    /// Build from document vectors.
    ///
    /// cosθ = A・B / (|A||B|), 0 when either norm is 0.
    ///
    /// Dot products go through a term -> postings index, so a pair is only
    /// touched when the two documents share a term. Each row only fills
    /// `j > i` and the lower triangle is mirrored afterwards, so `(i, j)` is
    /// computed exactly once.
    pub fn build(vectors: &[TFIDFVector]) -> Self {
        let start = Instant::now();
        let n = vectors.len();
        let dim = vectors.first().map_or(0, |v| v.tf_idf_vec.len());

        // postings[term] = [(doc, weight)], doc ascending
        let mut postings: Vec<Vec<(usize, f64)>> = vec![Vec::new(); dim];
        for (doc, v) in vectors.iter().enumerate() {
            for (term, w) in v.tf_idf_vec.raw_iter() {
                if let Some(list) = postings.get_mut(term) {
                    list.push((doc, *w));
                }
            }
        }

        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut row = vec![0.0_f64; n];
                let a = &vectors[i];
                if a.norm == 0.0 {
                    return row;
                }
                row[i] = 1.0;
                for (term, wa) in a.tf_idf_vec.raw_iter() {
                    let Some(list) = postings.get(term) else {
                        continue;
                    };
                    // upper triangle only
                    let from = list.partition_point(|(doc, _)| *doc <= i);
                    for &(j, wb) in &list[from..] {
                        row[j] += wa * wb;
                    }
                }
                for j in (i + 1)..n {
                    let dot = row[j];
                    if dot == 0.0 {
                        continue;
                    }
                    let norm_b = vectors[j].norm;
                    row[j] = if norm_b == 0.0 {
                        0.0
                    } else {
                        (dot / (a.norm * norm_b)).clamp(0.0, 1.0)
                    };
                }
                row
            })
            .collect();

        let mut data: Vec<f64> = rows.into_iter().flatten().collect();
        for i in 0..n {
            for j in (i + 1)..n {
                data[j * n + i] = data[i * n + j];
            }
        }

        let nnz = data.iter().filter(|s| **s > 0.0).count();
        info!(
            docs = n,
            nonzero_entries = nnz,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "similarity matrix built"
        );
        Self { n, data }
    }

    /// number of rows (== columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.data.get(i * self.n + j).copied()
    }

    /// row `i`, None when out of range
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.n {
            return None;
        }
        self.data.get(i * self.n..(i + 1) * self.n)
    }
}
