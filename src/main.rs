//! Ranks the pages of a directory of HTML files, once by random-surfer
//! sampling and once by iteration.

use anyhow::{Context, Result};
use clap::Parser;
use link_rank::{
    corpus,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
    Distribution, DAMPING, EPSILON, SAMPLES,
};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "link-rank")]
#[command(about = "Estimate PageRank over a directory of HTML pages")]
struct Cli {
    /// Directory holding the corpus' .html files
    corpus: std::path::PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = DAMPING, env = "LINK_RANK_DAMPING")]
    damping: f64,

    /// Length of the random walk
    #[arg(short = 'n', long, default_value_t = SAMPLES, env = "LINK_RANK_SAMPLES")]
    samples: usize,

    /// Seed for the random walk; drawn from the OS when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Largest per-page change at which iteration stops
    #[arg(long, default_value_t = EPSILON)]
    epsilon: f64,

    /// Fail instead of iterating more than this many times
    #[arg(long)]
    max_iterations: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = corpus::crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    tracing::info!(pages = graph.len(), links = graph.link_count(), "loaded corpus");

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = sampled::SampledPageRank::new(&graph, &cfg, rng)
        .and_then(|mut spr| spr.calc())
        .context("sampling failed")?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(ranks.page_rank());

    let cfg = iterated::Config {
        damping: cli.damping,
        epsilon: cli.epsilon,
        max_iterations: cli.max_iterations,
    };
    let ranks = iterated::IteratedPageRank::new(&graph, &cfg)
        .and_then(|mut ipr| ipr.calc())
        .context("iteration failed")?;
    println!("PageRank Results from Iteration");
    print_ranks(ranks.page_rank());

    Ok(())
}

fn print_ranks(ranks: &Distribution) {
    for (page, rank) in ranks {
        println!("  {page}: {rank:.4}");
    }
}
