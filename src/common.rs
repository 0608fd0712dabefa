use crate::{Error, LinkGraph, PageId, Result};
use algograph::graph::VertexId;
use std::collections::{btree_map, BTreeMap, HashMap};

pub const DAMPING: f64 = 0.85;
pub const SAMPLES: usize = 10_000;
pub const EPSILON: f64 = 0.001;

/// Page scores, ordered by page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution(BTreeMap<PageId, f64>);

impl Distribution {
    pub fn new(values: BTreeMap<PageId, f64>) -> Self {
        Self(values)
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PageId, f64> {
        self.0.iter()
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageId> + '_ {
        self.0.keys()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// The same scores rescaled to sum to 1.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total <= 0.0 {
            return self.clone();
        }
        Self(self.0.iter().map(|(p, x)| (p.clone(), x / total)).collect())
    }

    /// Largest absolute difference over the union of both page sets; a
    /// page missing on one side counts as 0 there.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let one_way = |a: &Self, b: &Self| {
            a.0.iter()
                .map(|(p, x)| (x - b.get(p.as_str()).unwrap_or(0.0)).abs())
                .fold(0.0, f64::max)
        };
        one_way(self, other).max(one_way(other, self))
    }

    pub fn into_inner(self) -> BTreeMap<PageId, f64> {
        self.0
    }

    pub(crate) fn from_vertices(
        graph: &LinkGraph,
        values: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> Self {
        Self(
            values
                .iter()
                .map(|(v, x)| (graph.page(*v).clone(), *x))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a PageId, &'a f64);
    type IntoIter = btree_map::Iter<'a, PageId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(PageId, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (PageId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn norm_inf(
    a: &HashMap<VertexId, f64, ahash::RandomState>,
    b: &HashMap<VertexId, f64, ahash::RandomState>,
) -> f64 {
    a.iter()
        .map(|(v, x)| (x - b.get(v).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidDamping(damping))
    }
}

pub(crate) fn check_not_empty(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        Err(Error::EmptyGraph)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(xs: &[(&str, f64)]) -> Distribution {
        xs.iter().map(|(p, x)| (PageId::from(*p), *x)).collect()
    }

    #[test]
    fn normalized_sums_to_one() {
        let d = dist(&[("a", 0.1), ("b", 0.3)]).normalized();
        assert!((d.sum() - 1.0).abs() < 1e-12, "{d:?}");
        assert!((d.get("b").unwrap() - 0.75).abs() < 1e-12, "{d:?}");
    }

    #[test]
    fn max_abs_diff_counts_missing_pages() {
        let a = dist(&[("a", 0.5), ("b", 0.5)]);
        let b = dist(&[("a", 0.4)]);
        assert!((a.max_abs_diff(&b) - 0.5).abs() < 1e-12);
        assert!((b.max_abs_diff(&a) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn damping_bounds() {
        assert!(check_damping(0.85).is_ok());
        for d in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(check_damping(d), Err(Error::InvalidDamping(_))), "{d}");
        }
    }
}
