//! The two PageRank estimators and the random-surfer model they share.
//!
//! [`sampled`] walks the graph at random and counts visits. [`iterated`]
//! repeats a synchronous update from a uniform start until no page moves
//! by more than a threshold.

pub mod iterated;
pub mod sampled;
mod traits;
pub use self::traits::*;
mod transition;
pub use self::transition::transition;

use crate::{Distribution, LinkGraph, Result};
use rand::Rng;

/// Random-surfer estimate from a single walk of `n` steps.
pub fn sample_pagerank<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    rng: R,
) -> Result<Distribution> {
    let cfg = sampled::Config {
        damping,
        samples: n,
    };
    let mut spr = sampled::SampledPageRank::new(graph, &cfg, rng)?;
    Ok(spr.calc()?.into_page_rank())
}

/// Iterative estimate, run until no page changes by more than
/// [`crate::EPSILON`].
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<Distribution> {
    let cfg = iterated::Config {
        damping,
        ..Default::default()
    };
    let mut ipr = iterated::IteratedPageRank::new(graph, &cfg)?;
    Ok(ipr.calc()?.into_page_rank())
}
