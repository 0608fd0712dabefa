use super::*;
use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Power-iteration PageRank.
///
/// Every sweep recomputes all pages from one snapshot of the previous
/// values:
///
/// ```text
/// new[p] = (1 - damping) / N + damping * sum(old[i] for i -> p) / |{i : i -> p}|
/// ```
///
/// Contributions are averaged over the receiving page's in-degree, not
/// split by each contributor's out-degree. A page nobody links to gets
/// no contribution term and stays at `(1 - damping) / N`. Pages without
/// links never appear as contributors, so their mass is not handed on.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    epsilon: f64,
    max_iterations: Option<usize>,
    incoming: HashMap<VertexId, Vec<VertexId>, ahash::RandomState>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Converged once no page moves by more than this in one sweep.
    pub epsilon: f64,
    /// Give up with [`Error::NotConverged`] after this many sweeps.
    pub max_iterations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            epsilon: EPSILON,
            max_iterations: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Estimate {
    pub page_rank: Distribution,
    pub iterations: usize,
    /// Largest change in the final sweep.
    pub delta: f64,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> Result<Self> {
        check_damping(config.damping)?;
        let epsilon = config.epsilon;
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(Error::InvalidEpsilon(epsilon));
        }
        check_not_empty(g)?;

        let incoming = g
            .vertices()
            .iter()
            .map(|v| {
                let sources: Vec<_> = g.graph().in_edges(v).map(|e| e.source).collect();
                (*v, sources)
            })
            .collect();
        Ok(Self {
            graph: g,
            damping: config.damping,
            epsilon,
            max_iterations: config.max_iterations,
            incoming,
        })
    }

    /// One synchronous sweep applied to `ranks`. Pages missing from
    /// `ranks` count as 0.
    pub fn step(&self, ranks: &Distribution) -> Distribution {
        let p: HashMap<_, _, ahash::RandomState> = self
            .graph
            .vertices()
            .iter()
            .map(|v| (*v, ranks.get(self.graph.page(*v).as_str()).unwrap_or(0.0)))
            .collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        self.sweep(&p, &mut r);
        Distribution::from_vertices(self.graph, &r)
    }

    fn sweep(
        &self,
        p: &HashMap<VertexId, f64, ahash::RandomState>,
        r: &mut HashMap<VertexId, f64, ahash::RandomState>,
    ) {
        let teleport = (1.0 - self.damping) / self.graph.len() as f64;
        r.clear();
        for v in self.graph.vertices() {
            let sources = &self.incoming[v];
            let contribution = if sources.is_empty() {
                0.0
            } else {
                let sum: f64 = sources.iter().map(|i| p[i]).sum();
                sum / sources.len() as f64
            };
            r.insert(*v, teleport + self.damping * contribution);
        }
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Output = self::Estimate;

    fn calc(&mut self) -> Result<Self::Output> {
        let n = self.graph.len() as f64;
        let mut p: HashMap<_, _, ahash::RandomState> = self
            .graph
            .vertices()
            .iter()
            .map(|v| (*v, 1.0 / n))
            .collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut iterations = 0;
        loop {
            self.sweep(&p, &mut r);
            iterations += 1;
            let delta = norm_inf(&p, &r);
            trace!(iterations, delta, "sweep");

            if delta <= self.epsilon {
                debug!(iterations, delta, "converged");
                return Ok(Self::Output {
                    page_rank: Distribution::from_vertices(self.graph, &r),
                    iterations,
                    delta,
                });
            }
            if let Some(max) = self.max_iterations {
                if iterations >= max {
                    warn!(iterations, delta, "iteration cap reached");
                    return Err(Error::NotConverged { iterations, delta });
                }
            }

            std::mem::swap(&mut p, &mut r);
        }
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
