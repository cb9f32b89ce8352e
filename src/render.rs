//! Terminal and JSON output for recommendations.

use std::io::{self, Write};

use serde::Serialize;

use crate::{
    context::{Recommendation, RecommenderContext, Stats},
    vectorizer::evaluate::scoring::MatchLabel,
};

/// base ingredients suggested when nothing matched
pub const INGREDIENT_TIPS: [&str; 5] = ["ayam", "tahu", "tempe", "sapi", "ikan"];

const KEY_TERMS: usize = 5;

pub fn no_match_message(query: &str) -> String {
    format!("No recipe found containing '{query}'. Try another ingredient.")
}

pub fn tips_message() -> String {
    let tips: Vec<String> = INGREDIENT_TIPS.iter().map(|t| format!("'{t}'")).collect();
    format!("Tip: try a base ingredient such as {}.", tips.join(", "))
}

pub const EMPTY_QUERY_MESSAGE: &str = "Type an ingredient or dish to search for (e.g. sapi, rendang, santan).";

/// score as a percentage with one decimal
pub fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Print a recommendation as text cards.
pub fn write_text<W: Write>(out: &mut W, ctx: &RecommenderContext, rec: &Recommendation) -> io::Result<()> {
    match rec {
        Recommendation::EmptyQuery => writeln!(out, "{EMPTY_QUERY_MESSAGE}"),
        Recommendation::NoMatch { query } => {
            writeln!(out, "{}", no_match_message(query))?;
            writeln!(out, "{}", tips_message())
        }
        Recommendation::Found {
            anchor,
            match_count,
            hits,
        } => {
            writeln!(out, "Found {match_count} matching recipe(s).")?;
            let base = ctx.document(*anchor).map_or("", |d| d.raw_text.as_str());
            writeln!(out, "Base recipe: \"{base}\"")?;
            let terms: Vec<&str> = ctx
                .vectorizer()
                .top_terms(*anchor, KEY_TERMS)
                .into_iter()
                .map(|(t, _)| t)
                .collect();
            if !terms.is_empty() {
                writeln!(out, "Key terms: {}", terms.join(", "))?;
            }
            writeln!(out)?;
            if hits.is_empty() {
                return writeln!(out, "No other recipes to compare against.");
            }
            writeln!(out, "{} similar recipe(s):", hits.len())?;
            for hit in hits {
                let text = ctx.document(hit.index).map_or("", |d| d.raw_text.as_str());
                writeln!(out, "[{} ({})]", hit.label, percent(hit.score))?;
                writeln!(out, "  \"{text}\"")?;
            }
            Ok(())
        }
    }
}

pub fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out, "documents:    {}", stats.documents)?;
    writeln!(out, "vocabulary:   {}", stats.vocabulary)?;
    writeln!(out, "zero vectors: {}", stats.zero_vectors)?;
    writeln!(out, "tf engine:    {}", stats.engine)
}

#[derive(Serialize)]
struct JsonHit<'a> {
    index: usize,
    score: f64,
    label: MatchLabel,
    text: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum JsonRecommendation<'a> {
    Found {
        anchor: usize,
        anchor_text: &'a str,
        match_count: usize,
        hits: Vec<JsonHit<'a>>,
    },
    NoMatch {
        query: &'a str,
        message: String,
        tips: &'static [&'static str],
    },
    EmptyQuery {
        message: &'static str,
    },
}

/// Recommendation as pretty JSON, with document texts resolved.
pub fn to_json(ctx: &RecommenderContext, rec: &Recommendation) -> serde_json::Result<String> {
    let text = |i: usize| ctx.document(i).map_or("", |d| d.raw_text.as_str());
    let view = match rec {
        Recommendation::EmptyQuery => JsonRecommendation::EmptyQuery {
            message: EMPTY_QUERY_MESSAGE,
        },
        Recommendation::NoMatch { query } => JsonRecommendation::NoMatch {
            query: query.as_str(),
            message: no_match_message(query),
            tips: &INGREDIENT_TIPS,
        },
        Recommendation::Found {
            anchor,
            match_count,
            hits,
        } => JsonRecommendation::Found {
            anchor: *anchor,
            anchor_text: text(*anchor),
            match_count: *match_count,
            hits: hits
                .iter()
                .map(|h| JsonHit {
                    index: h.index,
                    score: h.score,
                    label: h.label,
                    text: text(h.index),
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::RecommenderConfig, dataset::RecipeCorpus};

    fn context() -> RecommenderContext {
        let corpus = RecipeCorpus::from_texts(["Ayam Kecap Manis", "Ayam Goreng Kecap", "Sop Buntut Sapi"]);
        RecommenderContext::build(corpus, &RecommenderConfig::default()).unwrap()
    }

    fn text(ctx: &RecommenderContext, rec: &Recommendation) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, ctx, rec).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent(0.3456), "34.6%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(1.0), "100.0%");
    }

    #[test]
    fn found_prints_cards() {
        let ctx = context();
        let out = text(&ctx, &ctx.recommend("ayam", 5));
        assert!(out.contains("Found 2 matching recipe(s)."));
        assert!(out.contains("Base recipe: \"Ayam Kecap Manis\""));
        assert!(out.contains("\"Ayam Goreng Kecap\""));
        assert!(out.contains("[Unique Variation (0.0%)]"));
    }

    #[test]
    fn no_match_prints_tips() {
        let ctx = context();
        let out = text(&ctx, &ctx.recommend("xyznotfound", 5));
        assert!(out.contains("'xyznotfound'"));
        for tip in INGREDIENT_TIPS {
            assert!(out.contains(tip));
        }
        assert_eq!(text(&ctx, &Recommendation::EmptyQuery).trim(), EMPTY_QUERY_MESSAGE);
    }

    #[test]
    fn json_resolves_texts() {
        let ctx = context();
        let json = to_json(&ctx, &ctx.recommend("sop", 1)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["kind"], "found");
        assert_eq!(v["anchor_text"], "Sop Buntut Sapi");
        assert_eq!(v["hits"].as_array().map(Vec::len), Some(1));
        assert_eq!(v["hits"][0]["label"], "unique-variation");

        let json = to_json(&ctx, &ctx.recommend("zzz", 1)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["kind"], "no-match");
        assert_eq!(v["tips"][0], "ayam");
    }
}
