use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recipe_recommender::{
    rank, RecipeCorpus, RecommenderConfig, RecommenderContext, SimilarityMatrix, StopWords, TFIDFVectorizer,
    VectorizerOptions,
};

const INGREDIENTS: &[&str] = &[
    "ayam", "sapi", "ikan", "tahu", "tempe", "telur", "udang", "cumi", "kangkung", "bayam",
    "santan", "kunyit", "jahe", "lengkuas", "serai", "cabai", "bawang", "kecap", "tomat", "kentang",
    "wortel", "buncis", "jagung", "nasi", "mie", "bihun", "rendang", "soto", "opor", "gulai",
];

/// deterministic synthetic corpus, no network or fixture needed
fn synthetic_corpus(docs: usize, words: usize) -> Vec<String> {
    let mut state = 0x2545_f491_u32;
    (0..docs)
        .map(|_| {
            (0..words)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    INGREDIENTS[state as usize % INGREDIENTS.len()]
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let texts = synthetic_corpus(2_000, 12);
    let stopwords = StopWords::recipe_default();
    let options = VectorizerOptions::default();

    c.bench_function("vectorize", |b| {
        b.iter(|| TFIDFVectorizer::build(black_box(texts.as_slice()), &stopwords, &options))
    });

    let vectorizer = TFIDFVectorizer::build(&texts, &stopwords, &options);
    c.bench_function("similarity_matrix", |b| {
        b.iter(|| SimilarityMatrix::from_vectorizer(black_box(&vectorizer)))
    });

    let matrix = SimilarityMatrix::from_vectorizer(&vectorizer);
    c.bench_function("rank_top5", |b| b.iter(|| rank(black_box(42), &matrix, 5)));
}

fn query_benchmark(c: &mut Criterion) {
    let corpus = RecipeCorpus::from_texts(synthetic_corpus(2_000, 12));
    let ctx = match RecommenderContext::build(corpus, &RecommenderConfig::default()) {
        Ok(ctx) => ctx,
        Err(e) => panic!("context build failed: {e}"),
    };
    c.bench_function("recommend", |b| b.iter(|| ctx.recommend(black_box("rendang"), 5)));
}

criterion_group!(benches, build_benchmark, query_benchmark);
criterion_main!(benches);
