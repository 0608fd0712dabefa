use crate::*;
use algograph::graph::{QueryableGraph, VertexId};

/// Where a random surfer on `page` goes next.
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly; otherwise it jumps to any page of the corpus. A page
/// without links sends the surfer anywhere with equal probability.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let u = graph
        .vertex(page)
        .ok_or_else(|| Error::UnknownPage(PageId::from(page)))?;
    let ws = weights(graph, u, damping);
    Ok(graph.pages().cloned().zip(ws).collect())
}

/// Transition probabilities out of `u`, indexed in page order.
pub(crate) fn weights(graph: &LinkGraph, u: VertexId, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let sinks: Vec<_> = graph.graph().out_edges(&u).map(|e| e.sink).collect();
    if sinks.is_empty() {
        return vec![1.0 / n; graph.len()];
    }
    let mut ws = vec![(1.0 - damping) / n; graph.len()];
    let unit = damping / sinks.len() as f64;
    for v in sinks {
        ws[graph.index_of(v)] += unit;
    }
    ws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Damping, RandomGraph};
    use quickcheck_macros::quickcheck;

    #[test]
    fn dangling_page_is_uniform() {
        let g = LinkGraph::new([("1", vec!["2"]), ("2", vec![])]);
        let p = transition(&g, "2", 0.85).unwrap();
        assert_eq!(p.get("1"), Some(0.5));
        assert_eq!(p.get("2"), Some(0.5));
    }

    #[test]
    fn linked_pages_share_damping() {
        let g = LinkGraph::new([
            ("1", vec!["2", "3"]),
            ("2", vec!["3"]),
            ("3", vec!["1"]),
            ("4", vec![]),
        ]);
        let p = transition(&g, "1", 0.8).unwrap();
        let teleport = 0.2 / 4.0;
        assert!((p.get("1").unwrap() - teleport).abs() < 1e-12, "{p:?}");
        assert!((p.get("2").unwrap() - (teleport + 0.4)).abs() < 1e-12, "{p:?}");
        assert!((p.get("3").unwrap() - (teleport + 0.4)).abs() < 1e-12, "{p:?}");
        assert!((p.get("4").unwrap() - teleport).abs() < 1e-12, "{p:?}");
        assert!((p.sum() - 1.0).abs() < 1e-9, "{p:?}");
    }

    #[test]
    fn unknown_page() {
        let g = LinkGraph::new([("1", vec!["2"]), ("2", vec![])]);
        let err = transition(&g, "3", 0.85).unwrap_err();
        assert!(matches!(err, Error::UnknownPage(ref p) if p.as_str() == "3"), "{err}");
    }

    #[test]
    fn damping_out_of_range() {
        let g = LinkGraph::new([("1", vec!["2"]), ("2", vec![])]);
        assert!(matches!(
            transition(&g, "1", 1.0),
            Err(Error::InvalidDamping(_))
        ));
        assert!(matches!(
            transition(&g, "1", 0.0),
            Err(Error::InvalidDamping(_))
        ));
    }

    #[quickcheck]
    fn sums_to_one(g: RandomGraph, pick: usize, damping: Damping) {
        let g = &g.graph;
        let page = g.pages().nth(pick % g.len()).unwrap().clone();
        let p = transition(g, page.as_str(), damping.0).unwrap();
        assert_eq!(p.len(), g.len());
        assert!((p.sum() - 1.0).abs() < 1e-9, "{p:?}");
        if g.out_degree(page.as_str()) == Some(0) {
            let uniform = 1.0 / g.len() as f64;
            assert!(p.iter().all(|(_, x)| *x == uniform), "{p:?}");
        }
    }
}
