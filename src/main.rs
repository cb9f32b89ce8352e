//! recipe-recommender CLI: find recipes similar to an ingredient or dish.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use recipe_recommender::{render, RecommendError, RecommenderConfig, RecommenderContext};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-recommender")]
#[command(about = "Recommend similar recipes by shared ingredients (TF-IDF + cosine)")]
#[command(version)]
struct Cli {
    /// Recipe csv (needs a `full_text` column, `clean_text` is optional)
    #[arg(short, long, global = true, default_value = "resep_clean.csv")]
    data: PathBuf,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend recipes for one query
    Query {
        /// Ingredient or dish, matched as a substring
        text: String,

        /// Number of recommendations (overrides config)
        #[arg(short, long)]
        k: Option<usize>,

        /// Print JSON instead of text cards
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line
    Repl {
        /// Number of recommendations (overrides config)
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Print corpus and vocabulary statistics
    Stats,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<RecommenderConfig, RecommendError> {
    match path {
        Some(p) => RecommenderConfig::load(p),
        None => Ok(RecommenderConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), RecommendError> {
    let mut config = load_config(cli.config.as_ref())?;
    let k_override = match &cli.command {
        Commands::Query { k, .. } | Commands::Repl { k } => *k,
        Commands::Stats => None,
    };
    if let Some(k) = k_override {
        config.top_k = k;
        config.validate()?;
    }

    let ctx = RecommenderContext::load(&cli.data, &config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Query { text, json, .. } => {
            let rec = ctx.recommend_default(&text);
            if json {
                match render::to_json(&ctx, &rec) {
                    Ok(s) => print_line(&mut out, &s),
                    Err(e) => error!("json encoding failed: {e}"),
                }
            } else {
                report(render::write_text(&mut out, &ctx, &rec));
            }
        }
        Commands::Repl { .. } => {
            print_line(&mut out, "Ingredients on hand? (Ctrl-D to quit)");
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let rec = ctx.recommend_default(&line);
                report(render::write_text(&mut out, &ctx, &rec));
                print_line(&mut out, "");
            }
        }
        Commands::Stats => report(render::write_stats(&mut out, &ctx.stats())),
    }
    Ok(())
}

fn print_line<W: Write>(out: &mut W, s: &str) {
    report(writeln!(out, "{s}"));
}

// broken pipe (output piped into `head`) is ignored
fn report(res: io::Result<()>) {
    if let Err(e) = res {
        if e.kind() != io::ErrorKind::BrokenPipe {
            error!("write failed: {e}");
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
