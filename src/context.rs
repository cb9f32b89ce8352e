use std::{path::Path, sync::Arc};

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::RecommenderConfig,
    dataset::{Document, RecipeCorpus},
    error::Result,
    vectorizer::{
        evaluate::{
            query::{QueryResolver, Resolution},
            scoring::{rank_with, Hits, MatchThresholds},
            similarity::SimilarityMatrix,
        },
        tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine},
        TFIDFVectorizer,
    },
};

/// Result of one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Recommendation {
    Found {
        anchor: usize,
        /// documents containing the query, anchor included
        match_count: usize,
        hits: Hits,
    },
    NoMatch { query: String },
    EmptyQuery,
}

/// Corpus summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub documents: usize,
    pub vocabulary: usize,
    pub zero_vectors: usize,
    pub engine: &'static str,
}

/// Everything a query needs, built once and read-only afterwards.
///
/// Share it behind an `Arc` (or a [`ContextCell`]); nothing on the query path
/// takes a lock.
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    corpus: RecipeCorpus,
    vectorizer: TFIDFVectorizer,
    matrix: SimilarityMatrix,
    thresholds: MatchThresholds,
    top_k: usize,
}

impl RecommenderContext {
    /// Vectorize the corpus and build the similarity matrix.
    pub fn build(corpus: RecipeCorpus, config: &RecommenderConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = config.stopwords();
        let options = config.vectorizer_options();
        let texts = corpus.normalized_texts();

        let vectorizer = if config.sublinear_tf {
            TFIDFVectorizer::build_with::<SublinearTFIDFEngine, _>(&texts, &stopwords, &options)
        } else {
            TFIDFVectorizer::build_with::<DefaultTFIDFEngine, _>(&texts, &stopwords, &options)
        };
        let zero = vectorizer.zero_vector_count();
        if zero > 0 {
            warn!(zero_vectors = zero, "documents without any weighted term, they never match");
        }
        let matrix = SimilarityMatrix::from_vectorizer(&vectorizer);

        Ok(Self {
            corpus,
            vectorizer,
            matrix,
            thresholds: config.thresholds,
            top_k: config.top_k,
        })
    }

    /// Load the csv at `path` and build.
    pub fn load(path: impl AsRef<Path>, config: &RecommenderConfig) -> Result<Self> {
        let corpus = RecipeCorpus::load_csv(path, &config.columns())?;
        Self::build(corpus, config)
    }

    /// Recommend with the configured `top-k`.
    pub fn recommend_default(&self, query: &str) -> Recommendation {
        self.recommend(query, self.top_k)
    }

    /// Resolve `query` to an anchor and rank its `k` nearest neighbours.
    pub fn recommend(&self, query: &str, k: usize) -> Recommendation {
        let texts = self.corpus.normalized_texts();
        match QueryResolver::resolve(query, &texts) {
            Resolution::EmptyQuery => Recommendation::EmptyQuery,
            Resolution::NoMatch => Recommendation::NoMatch {
                query: query.trim().to_string(),
            },
            Resolution::Anchor { index, match_count } => {
                let hits = rank_with(index, &self.matrix, k, &self.thresholds);
                debug!(anchor = index, hits = hits.len(), "ranked");
                Recommendation::Found {
                    anchor: index,
                    match_count,
                    hits,
                }
            }
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            documents: self.corpus.len(),
            vocabulary: self.vectorizer.vocab_size(),
            zero_vectors: self.vectorizer.zero_vector_count(),
            engine: self.vectorizer.engine_name(),
        }
    }

    #[inline]
    pub fn document(&self, index: usize) -> Option<&Document> {
        self.corpus.get(index)
    }

    #[inline]
    pub fn corpus(&self) -> &RecipeCorpus {
        &self.corpus
    }

    #[inline]
    pub fn vectorizer(&self) -> &TFIDFVectorizer {
        &self.vectorizer
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[inline]
    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

/// Lazily built, process-wide context.
///
/// Concurrent first callers block until one of them has built it; the build
/// runs at most once. A failed build leaves the cell empty so a later call
/// can retry.
#[derive(Debug, Default)]
pub struct ContextCell {
    inner: OnceCell<Arc<RecommenderContext>>,
}

impl ContextCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<RecommenderContext>>
    where
        F: FnOnce() -> Result<RecommenderContext>,
    {
        self.inner
            .get_or_try_init(|| {
                let ctx = init()?;
                info!(docs = ctx.corpus.len(), "recommender context ready");
                Ok(Arc::new(ctx))
            })
            .map(Arc::clone)
    }

    pub fn get(&self) -> Option<Arc<RecommenderContext>> {
        self.inner.get().cloned()
    }
}
