use std::{
    io::Write,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
};

use recipe_recommender::{
    rank, ContextCell, MatchLabel, QueryResolver, RecipeCorpus, Recommendation, RecommendError, RecommenderConfig,
    RecommenderContext, Resolution, SimilarityMatrix, StopWords, TFIDFVectorizer, VectorizerOptions,
};

const ROUND_TRIP: [&str; 3] = ["ayam kecap manis", "ayam goreng kecap", "sop buntut sapi"];

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn round_trip_ayam() {
    let texts: Vec<&str> = ROUND_TRIP.to_vec();
    let vectorizer = TFIDFVectorizer::build(&texts, &StopWords::recipe_default(), &VectorizerOptions::default());
    let matrix = SimilarityMatrix::from_vectorizer(&vectorizer);

    let anchor = match QueryResolver::resolve("ayam", &texts) {
        Resolution::Anchor { index, match_count } => {
            assert_eq!(match_count, 2);
            index
        }
        other => panic!("unexpected: {other:?}"),
    };
    assert_eq!(anchor, 0);

    let hits = rank(anchor, &matrix, 5);
    assert_eq!(hits.indices(), vec![1, 2]);
    assert!(hits.list[0].score > hits.list[1].score);
    assert!(hits.list[1].score.abs() < 1e-12);
    assert_eq!(hits.list[1].label, MatchLabel::UniqueVariation);
}

#[test]
fn empty_and_unmatched_queries() {
    let ctx = RecommenderContext::build(RecipeCorpus::from_texts(ROUND_TRIP), &RecommenderConfig::default()).unwrap();
    assert_eq!(ctx.recommend("", 5), Recommendation::EmptyQuery);
    assert_eq!(ctx.recommend("   ", 5), Recommendation::EmptyQuery);
    assert!(matches!(ctx.recommend("xyznotfound", 5), Recommendation::NoMatch { .. }));
}

#[test]
fn stopword_only_document_never_scores() {
    let corpus = RecipeCorpus::from_texts(["ayam kecap manis", "dan yang di itu", "ayam goreng"]);
    let ctx = RecommenderContext::build(corpus, &RecommenderConfig::default()).unwrap();
    assert!(ctx.vectorizer().vector(1).unwrap().is_zero());
    let m = ctx.matrix();
    assert_eq!(m.get(1, 1), Some(0.0));
    for j in 0..3 {
        let s = m.get(1, j).unwrap();
        assert!(!s.is_nan());
        assert_eq!(s, 0.0);
    }

    // the stopword-only row can still be an anchor: every neighbour scores 0
    match ctx.recommend("dan yang", 5) {
        Recommendation::Found { anchor, hits, .. } => {
            assert_eq!(anchor, 1);
            assert_eq!(hits.indices(), vec![0, 2]);
            assert!(hits.iter().all(|h| h.score == 0.0));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn csv_end_to_end() {
    let file = write_csv(
        "full_text,clean_text\n\
         \"Rendang Sapi, Padang\",rendang sapi padang\n\
         Gulai Sapi Santan,gulai sapi santan\n\
         Tempe Orek,\n\
         Opor Ayam Santan,opor ayam santan\n",
    );
    let ctx = RecommenderContext::load(file.path(), &RecommenderConfig::default()).unwrap();
    assert_eq!(ctx.stats().documents, 4);
    assert_eq!(ctx.stats().zero_vectors, 1);

    match ctx.recommend("Rendang", 2) {
        Recommendation::Found { anchor, hits, .. } => {
            assert_eq!(ctx.document(anchor).unwrap().raw_text, "Rendang Sapi, Padang");
            assert_eq!(hits.list[0].index, 1);
            assert_eq!(hits.len(), 2);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn csv_without_normalized_column_is_derived() {
    let file = write_csv("full_text\nAyam Bakar Madu\nAyam   Geprek\n");
    let ctx = RecommenderContext::load(file.path(), &RecommenderConfig::default()).unwrap();
    assert_eq!(ctx.document(1).unwrap().normalized_text, "ayam geprek");
    assert!(matches!(ctx.recommend("geprek", 5), Recommendation::Found { anchor: 1, .. }));
}

#[test]
fn missing_data_file_halts_with_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecommenderContext::load(dir.path().join("resep_clean.csv"), &RecommenderConfig::default()).unwrap_err();
    assert!(matches!(err, RecommendError::DataUnavailable { .. }));
    assert!(err.to_string().contains("resep_clean.csv"));
}

#[test]
fn context_cell_builds_once_under_contention() {
    let cell = Arc::new(ContextCell::new());
    let builds = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let builds = Arc::clone(&builds);
            thread::spawn(move || {
                let ctx = cell
                    .get_or_try_init(|| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        RecommenderContext::build(RecipeCorpus::from_texts(ROUND_TRIP), &RecommenderConfig::default())
                    })
                    .unwrap();
                ctx.stats().documents
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}
