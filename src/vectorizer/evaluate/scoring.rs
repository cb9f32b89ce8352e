use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{
    error::{RecommendError, Result},
    utils::sort::top_k_by_score,
    vectorizer::evaluate::similarity::SimilarityMatrix,
};

/// Coarse quality band of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLabel {
    VeryGoodMatch,
    Similar,
    UniqueVariation,
}

impl MatchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::VeryGoodMatch => "Very Good Match",
            MatchLabel::Similar => "Similar",
            MatchLabel::UniqueVariation => "Unique Variation",
        }
    }
}

impl Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score bands for [`MatchLabel`]
///
/// `score > very_good` is a very good match, `similar < score <= very_good`
/// is similar, anything else is a unique variation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MatchThresholds {
    pub very_good: f64,
    pub similar: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            very_good: 0.30,
            similar: 0.15,
        }
    }
}

impl MatchThresholds {
    /// `0 <= similar <= very_good <= 1`
    pub fn new(very_good: f64, similar: f64) -> Result<Self> {
        let t = Self { very_good, similar };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if !in_range(self.very_good) || !in_range(self.similar) {
            return Err(RecommendError::InvalidConfig(format!(
                "thresholds must lie in [0, 1] (very-good = {}, similar = {})",
                self.very_good, self.similar
            )));
        }
        if self.similar > self.very_good {
            return Err(RecommendError::InvalidConfig(format!(
                "similar threshold {} is above very-good threshold {}",
                self.similar, self.very_good
            )));
        }
        Ok(())
    }

    pub fn classify(&self, score: f64) -> MatchLabel {
        if score > self.very_good {
            MatchLabel::VeryGoodMatch
        } else if score > self.similar {
            MatchLabel::Similar
        } else {
            MatchLabel::UniqueVariation
        }
    }
}

/// One ranked neighbour
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitEntry {
    /// document index
    pub index: usize,
    /// cosine similarity to the anchor, in [0, 1]
    pub score: f64,
    pub label: MatchLabel,
}

/// Ranked neighbours of an anchor document, best first
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.list.iter().map(|h| h.index).collect()
    }
}

impl<'a> IntoIterator for &'a Hits {
    type Item = &'a HitEntry;
    type IntoIter = std::slice::Iter<'a, HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6} ({})", hit.index, hit.score, hit.label)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(
                f,
                "{}. #{} {:.1}% {}",
                rank + 1,
                hit.index,
                hit.score * 100.0,
                hit.label
            )?;
        }
        Ok(())
    }
}

/// Top `k` neighbours of `anchor`, labelled with the default thresholds.
pub fn rank(anchor: usize, matrix: &SimilarityMatrix, k: usize) -> Hits {
    rank_with(anchor, matrix, k, &MatchThresholds::default())
}

/// Top `k` neighbours of `anchor`.
///
/// The anchor itself is never returned. Order is score descending, ties by
/// ascending index. Returns fewer than `k` entries when the corpus is smaller,
/// and nothing for `k == 0` or an anchor outside the matrix.
pub fn rank_with(anchor: usize, matrix: &SimilarityMatrix, k: usize, thresholds: &MatchThresholds) -> Hits {
    let Some(row) = matrix.row(anchor) else {
        return Hits::default();
    };
    let candidates: Vec<(usize, f64)> = row
        .iter()
        .enumerate()
        .filter(|(idx, score)| *idx != anchor && !score.is_nan())
        .map(|(idx, score)| (idx, *score))
        .collect();

    let list = top_k_by_score(candidates, k)
        .into_iter()
        .map(|(index, score)| HitEntry {
            index,
            score,
            label: thresholds.classify(score),
        })
        .collect();
    Hits::new(list)
}
