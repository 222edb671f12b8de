use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

mod config;

use kindred::catalog::{loader::load_catalog, EmbeddedCatalog};
use kindred::embed::embed_tokens;
use kindred::features::profile::rank_catalog;
use kindred::features::scale::{MinMaxScaler, StandardScaler};
use kindred::pairs::load_pairs;
use kindred::pipeline::extract_features;
use kindred::text::tokenize;
use kindred::vectors::WordVectors;

/// Kindred: pairwise semantic features for same-person detection.
///
/// Embeds free-text snippets as averaged word vectors, profiles each one
/// against a fixed occupation catalog, and emits per-pair similarity
/// features for a downstream classifier.
#[derive(Parser)]
#[command(name = "kindred", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the feature matrix for the train and test pair files
    Extract {
        /// Skip standardization and min-max scaling of the output
        #[arg(long)]
        raw: bool,
    },

    /// Rank catalog occupations by similarity to an ad-hoc text (sanity check)
    Rank {
        /// The text to profile (e.g. "i love plants")
        text: String,

        /// How many of the nearest occupations to show
        #[arg(long, default_value = "30")]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kindred=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { raw } => extract(raw),
        Commands::Rank { text, top } => rank(&text, top),
    }
}

/// Full batch run: load everything, score both splits, scale, write.
fn extract(raw: bool) -> Result<()> {
    let config = config::Config::load()?;
    config.require_model()?;

    println!("Loading train and test pairs...");
    let train_pairs = load_pairs(&config.train_path)?;
    let test_pairs = load_pairs(&config.test_path)?;
    println!(
        "  {} train pairs, {} test pairs",
        train_pairs.len(),
        test_pairs.len()
    );

    println!("Loading occupation catalog...");
    // Fold titles into descriptions before embedding — titles carry signal
    // the descriptions often lack.
    let catalog = load_catalog(&config.catalog_path)?.with_keys_in_text();
    println!("  {} occupations", catalog.len());

    println!("Loading word vector model (takes a while)...");
    let model = WordVectors::load(&config.vectors_path)?;

    println!("Embedding catalog...");
    let embedded = EmbeddedCatalog::build(&catalog, &model, config.dim)?;

    println!("Extracting features ({} threads)...", rayon::current_num_threads());
    let mut train = extract_features(&train_pairs, &model, &embedded);
    let mut test = extract_features(&test_pairs, &model, &embedded);

    if !raw {
        // Fit on train only; apply the identical transform to both splits.
        let standard = StandardScaler::fit(&train);
        standard.transform(&mut train);
        standard.transform(&mut test);

        let minmax = MinMaxScaler::fit(&train);
        minmax.transform(&mut train);
        minmax.transform(&mut test);
        info!("Scaled features (standardize + min-max, fit on train)");
    }

    let train_rows = train.len();
    let mut features = train;
    features.stack_below(test);
    features.write_to(&config.out_path)?;

    println!(
        "{}",
        format!(
            "Wrote {} rows x {} columns to {} ({} train + {} test)",
            features.len(),
            features.width(),
            config.out_path.display(),
            train_rows,
            features.len() - train_rows,
        )
        .bold()
    );
    println!("Columns: job_similarity, direct_similarity");

    Ok(())
}

/// Sanity check: show which occupations sit closest to a piece of text.
fn rank(text: &str, top: usize) -> Result<()> {
    let config = config::Config::load()?;
    config.require_model()?;

    println!("Loading occupation catalog...");
    let catalog = load_catalog(&config.catalog_path)?.with_keys_in_text();

    println!("Loading word vector model (takes a while)...");
    let model = WordVectors::load(&config.vectors_path)?;
    let embedded = EmbeddedCatalog::build(&catalog, &model, config.dim)?;

    // Ad-hoc text gets the same cleaning the catalog text went through
    let tokens = tokenize(text);
    let doc_vec = embed_tokens(tokens.iter().map(String::as_str), &model);
    if doc_vec.iter().all(|&v| v == 0.0) {
        println!(
            "{}",
            "No token of that text is in the model — every distance is the 1.0 fallback."
                .yellow()
        );
    }

    let ranked = rank_catalog(&doc_vec, &embedded);

    println!("\n{}", format!("=== Occupations nearest to {text:?} ===").bold());
    for (i, (key, distance)) in ranked.iter().take(top).enumerate() {
        let line = format!("  {:>3}. {:<50} {:.4}", i + 1, key, distance);
        if *distance < 0.3 {
            println!("{}", line.bright_green());
        } else if *distance < 0.5 {
            println!("{line}");
        } else {
            println!("{}", line.dimmed());
        }
    }

    Ok(())
}
