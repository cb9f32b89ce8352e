use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Vocabulary, token::TermFrequency},
};

/// TF-IDF calculation engine
///
/// Engines are stateless; the vectorizer is generic over them so the weighting
/// scheme is fixed at build time.
///
/// IDF is shared by every engine:
///
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`
///
/// The `+1` inside the ratio acts as one extra document containing every term,
/// so `df = 0` can never divide by zero; the trailing `+1` keeps terms present
/// in every document at weight 1 instead of 0. The value is always >= 1.
pub trait TFIDFEngine: Send + Sync {
    /// short name, reported by stats
    const NAME: &'static str;

    /// term frequency weight of a term seen `count` times in a document of
    /// `term_sum` counted terms
    fn tf(count: u32, term_sum: u64) -> f64;

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }

    /// IDF for every vocabulary dimension
    fn idf_vec(vocab: &Vocabulary) -> Vec<f64> {
        vocab
            .iter()
            .map(|(_, df)| Self::idf(vocab.doc_num(), df))
            .collect()
    }

    /// TF-IDF sparse vector of one document.
    /// Terms outside the vocabulary are ignored; the result has `len == vocab.len()`.
    fn tf_idf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf_vec: &[f64]) -> ZeroSpVec<f64> {
        let term_sum = freq.term_sum();
        let pairs: Vec<(usize, f64)> = freq
            .iter()
            .filter_map(|(term, count)| {
                let idx = vocab.index_of(term)?;
                let idf = idf_vec.get(idx).copied().unwrap_or(0.0);
                Some((idx, Self::tf(count, term_sum) * idf))
            })
            .collect();
        ZeroSpVec::from_pairs(vocab.len(), pairs)
    }
}

/// Default engine: raw counts.
/// weight = count * idf
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    const NAME: &'static str = "raw-count";

    #[inline]
    fn tf(count: u32, _term_sum: u64) -> f64 {
        count as f64
    }
}

/// Sublinear engine: dampens repeated terms.
/// weight = (1 + ln(count)) * idf
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    const NAME: &'static str = "sublinear";

    #[inline]
    fn tf(count: u32, _term_sum: u64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        1.0 + (count as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::corpus::Corpus;

    #[test]
    fn idf_is_smoothed_and_at_least_one() {
        // term in every doc
        assert!((DefaultTFIDFEngine::idf(3, 3) - 1.0).abs() < 1e-12);
        // rarer terms weigh more
        assert!(DefaultTFIDFEngine::idf(3, 1) > DefaultTFIDFEngine::idf(3, 2));
        // no division by zero
        assert!(DefaultTFIDFEngine::idf(0, 0).is_finite());
        assert!((DefaultTFIDFEngine::idf(3, 1) - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn sublinear_tf_dampens_counts() {
        assert_eq!(SublinearTFIDFEngine::tf(0, 0), 0.0);
        assert_eq!(SublinearTFIDFEngine::tf(1, 1), 1.0);
        assert!(SublinearTFIDFEngine::tf(4, 4) < DefaultTFIDFEngine::tf(4, 4));
    }

    #[test]
    fn tf_idf_vec_ignores_out_of_vocabulary_terms() {
        let mut c = Corpus::new();
        c.add_set(&["ayam", "kecap"]);
        c.add_set(&["ayam"]);
        let vocab = c.into_vocabulary(1, 1.0);
        let idf = DefaultTFIDFEngine::idf_vec(&vocab);

        let mut freq = TermFrequency::new();
        freq.add_terms(&["kecap", "kecap", "ikan"]);
        let v = DefaultTFIDFEngine::tf_idf_vec(&freq, &vocab, &idf);
        assert_eq!(v.len(), 2);
        assert_eq!(v.indices(), &[1]);
        assert!((v[1] - 2.0 * idf[1]).abs() < 1e-12);
    }
}
