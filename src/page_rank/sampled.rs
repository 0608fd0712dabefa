use super::*;
use crate::*;
use algograph::graph::VertexId;
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    Rng,
};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Monte-Carlo PageRank: one random surfer walking `samples` steps.
///
/// Each step draws the next page from the transition model of the page
/// drawn before it, so the visits form a single Markov chain trajectory
/// rather than independent draws. The first page is drawn uniformly.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    graph: &'a LinkGraph,
    samples: usize,
    rng: R,
    start: WeightedIndex<f64>,
    transitions: Vec<WeightedIndex<f64>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
        }
    }
}

/// Visit frequencies of one walk. Pages never visited are absent.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub page_rank: Distribution,
    pub visits: BTreeMap<PageId, usize>,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(g: &'a LinkGraph, config: &Config, rng: R) -> Result<Self> {
        check_damping(config.damping)?;
        check_not_empty(g)?;
        if config.samples == 0 {
            return Err(Error::NoSamples);
        }

        let start = weighted(vec![1.0; g.len()])?;
        // Rows depend only on the page, never on the walk.
        let transitions = g
            .vertices()
            .iter()
            .map(|u| weighted(super::transition::weights(g, *u, config.damping)))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            pages = g.len(),
            damping = config.damping,
            samples = config.samples,
            "prepared sampler"
        );
        Ok(Self {
            graph: g,
            samples: config.samples,
            rng,
            start,
            transitions,
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Output = self::Estimate;

    fn calc(&mut self) -> Result<Self::Output> {
        let vertices = self.graph.vertices();
        let mut visits: HashMap<VertexId, usize, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        let mut current = &self.start;
        for _ in 0..self.samples {
            let i = current.sample(&mut self.rng);
            *visits.entry(vertices[i]).or_insert(0) += 1;
            current = &self.transitions[i];
        }

        let n = self.samples as f64;
        let visits: BTreeMap<PageId, usize> = visits
            .into_iter()
            .map(|(v, k)| (self.graph.page(v).clone(), k))
            .collect();
        let page_rank = visits
            .iter()
            .map(|(p, k)| (p.clone(), *k as f64 / n))
            .collect();
        debug!(
            samples = self.samples,
            visited = visits.len(),
            "random walk finished"
        );
        Ok(Self::Output { page_rank, visits })
    }
}

impl PageRankResult for self::Estimate {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }

    fn into_page_rank(self) -> Distribution {
        self.page_rank
    }
}

fn weighted(ws: Vec<f64>) -> Result<WeightedIndex<f64>> {
    WeightedIndex::new(ws).map_err(|e| Error::Weights(e.to_string()))
}
