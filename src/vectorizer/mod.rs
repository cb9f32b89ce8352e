pub mod corpus;
pub mod evaluate;
pub mod stopwords;
pub mod tfidf;
pub mod token;

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        corpus::{Corpus, Vocabulary},
        stopwords::StopWords,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::{TermFrequency, Tokenizer},
    },
};

/// Knobs for building the vocabulary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorizerOptions {
    /// drop terms found in fewer documents than this
    pub min_df: u64,
    /// drop terms found in more than this fraction of documents (1.0 = off)
    pub max_df: f64,
    /// shortest token kept, in chars
    pub min_token_len: usize,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            min_df: 1,
            max_df: 1.0,
            min_token_len: 2,
        }
    }
}

/// TF-IDF vector of one document
#[derive(Debug, Clone, PartialEq)]
pub struct TFIDFVector {
    /// sparse weights, `len == vocabulary size`
    pub tf_idf_vec: ZeroSpVec<f64>,
    /// counted tokens after stopword removal
    pub term_sum: u64,
    /// euclidean norm of `tf_idf_vec`, 0.0 for a degenerate document
    pub norm: f64,
}

impl TFIDFVector {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.tf_idf_vec.is_zero_vec()
    }
}

/// TF-IDF Vectorizer
///
/// Holds the vocabulary, the idf table and one sparse vector per document.
/// Built once from the whole corpus and immutable afterwards; rebuilding is
/// the only way to pick up corpus changes.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer {
    vocabulary: Vocabulary,
    idf_vec: Vec<f64>,
    documents: Vec<TFIDFVector>,
    engine: &'static str,
}

impl TFIDFVectorizer {
    /// Build with [`DefaultTFIDFEngine`].
    pub fn build<S>(documents: &[S], stopwords: &StopWords, options: &VectorizerOptions) -> Self
    where
        S: AsRef<str> + Sync,
    {
        Self::build_with::<DefaultTFIDFEngine, S>(documents, stopwords, options)
    }

    /// Build with an explicit engine.
    ///
    /// Tokenizing and weighting run on the rayon pool; output order always
    /// follows input order, so the result is deterministic.
    pub fn build_with<E, S>(documents: &[S], stopwords: &StopWords, options: &VectorizerOptions) -> Self
    where
        E: TFIDFEngine,
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let tokenizer = Tokenizer::new(options.min_token_len);

        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| TermFrequency::analyze(doc.as_ref(), &tokenizer, stopwords))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_set(&freq.term_set_ref_str());
        }
        let raw_vocab = corpus.vocab_size();
        let vocabulary = corpus.into_vocabulary(options.min_df, options.max_df);
        let idf_vec = E::idf_vec(&vocabulary);

        let documents: Vec<TFIDFVector> = freqs
            .par_iter()
            .map(|freq| {
                let mut tf_idf_vec = E::tf_idf_vec(freq, &vocabulary, &idf_vec);
                tf_idf_vec.shrink_to_fit();
                let norm = tf_idf_vec.norm();
                TFIDFVector {
                    tf_idf_vec,
                    term_sum: freq.term_sum(),
                    norm,
                }
            })
            .collect();

        let zero = documents.iter().filter(|d| d.is_zero()).count();
        debug!(
            terms_seen = raw_vocab,
            terms_kept = vocabulary.len(),
            min_df = options.min_df,
            max_df = options.max_df,
            "vocabulary filtered"
        );
        info!(
            docs = documents.len(),
            vocab = vocabulary.len(),
            zero_vectors = zero,
            engine = E::NAME,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "tf-idf vectors built"
        );

        Self {
            vocabulary,
            idf_vec,
            documents,
            engine: E::NAME,
        }
    }
}

/// accessors
impl TFIDFVectorizer {
    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn vector(&self, index: usize) -> Option<&TFIDFVector> {
        self.documents.get(index)
    }

    #[inline]
    pub fn vectors(&self) -> &[TFIDFVector] {
        &self.documents
    }

    /// idf of `term`, None when it is not in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .index_of(term)
            .and_then(|idx| self.idf_vec.get(idx).copied())
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine
    }

    /// number of documents with an all-zero vector
    pub fn zero_vector_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_zero()).count()
    }

    /// Highest weighted terms of document `index`, weight descending,
    /// ties by dimension order. Empty for unknown index or zero vector.
    pub fn top_terms(&self, index: usize, n: usize) -> Vec<(&str, f64)> {
        let Some(doc) = self.documents.get(index) else {
            return Vec::new();
        };
        let mut weighted: Vec<(usize, f64)> = doc
            .tf_idf_vec
            .raw_iter()
            .map(|(idx, w)| (idx, *w))
            .collect();
        weighted = crate::utils::sort::top_k_by_score(weighted, n);
        weighted
            .into_iter()
            .filter_map(|(idx, w)| self.vocabulary.term(idx).map(|t| (t, w)))
            .collect()
    }
}
