use algograph::graph::*;
use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};

/// Label of a page, usually the file name it was read from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An immutable snapshot of a corpus: its pages and the links between them.
///
/// Links pointing outside the corpus and links from a page to itself are
/// dropped when the graph is built. Pages are kept in ascending order, so
/// every walk over [`LinkGraph::pages`] and every vertex index is stable.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    pages: Vec<PageId>,
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize, ahash::RandomState>,
}

impl LinkGraph {
    /// Builds a graph from `(page, outbound links)` pairs.
    ///
    /// A page listed more than once gets the union of its links.
    pub fn new<I, P, L, Q>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = Q>,
        Q: Into<PageId>,
    {
        let mut adjacency: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, links) in pages {
            adjacency
                .entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut ids: BTreeMap<&PageId, VertexId> = BTreeMap::new();
        for page in adjacency.keys() {
            ids.insert(page, graph.add_vertex());
        }
        for (page, links) in adjacency.iter() {
            let u = ids[page];
            for link in links.iter().filter(|link| *link != page) {
                if let Some(v) = ids.get(link) {
                    graph.add_edge(u, *v);
                }
            }
        }

        let vertices: Vec<VertexId> = ids.values().copied().collect();
        let index = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let pages = adjacency.into_keys().collect();
        Self {
            graph,
            pages,
            vertices,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.position(page).is_some()
    }

    /// All pages, in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = &PageId> + '_ {
        self.pages.iter()
    }

    /// Pages linked to by `page`, in ascending order.
    pub fn links(&self, page: &str) -> Option<Vec<&PageId>> {
        let v = self.vertex(page)?;
        Some(self.sorted(self.graph.out_edges(&v).map(|e| e.sink)))
    }

    /// Pages linking to `page`, in ascending order.
    pub fn incoming(&self, page: &str) -> Option<Vec<&PageId>> {
        let v = self.vertex(page)?;
        Some(self.sorted(self.graph.in_edges(&v).map(|e| e.source)))
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        let v = self.vertex(page)?;
        Some(self.graph.out_edges(&v).count())
    }

    pub fn in_degree(&self, page: &str) -> Option<usize> {
        let v = self.vertex(page)?;
        Some(self.graph.in_edges(&v).count())
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub(crate) fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub(crate) fn vertex(&self, page: &str) -> Option<VertexId> {
        self.position(page).map(|i| self.vertices[i])
    }

    /// Vertices in page order.
    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub(crate) fn page(&self, v: VertexId) -> &PageId {
        &self.pages[self.index_of(v)]
    }

    pub(crate) fn index_of(&self, v: VertexId) -> usize {
        self.index[&v]
    }

    fn position(&self, page: &str) -> Option<usize> {
        self.pages
            .binary_search_by(|p| p.as_str().cmp(page))
            .ok()
    }

    fn sorted<I: Iterator<Item = VertexId>>(&self, vs: I) -> Vec<&PageId> {
        let mut res: Vec<_> = vs.map(|v| self.page(v)).collect();
        res.sort();
        res
    }
}

impl<P, L, Q> FromIterator<(P, L)> for LinkGraph
where
    P: Into<PageId>,
    L: IntoIterator<Item = Q>,
    Q: Into<PageId>,
{
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_links_are_dropped() {
        let g = LinkGraph::new([("a", vec!["a", "b"]), ("b", vec!["b"])]);
        assert_eq!(g.links("a").unwrap(), vec![&PageId::from("b")]);
        assert!(g.links("b").unwrap().is_empty());
        assert_eq!(g.link_count(), 1);
    }

    #[test]
    fn links_outside_corpus_are_dropped() {
        let g = LinkGraph::new([("a", vec!["b", "elsewhere.html"]), ("b", vec![])]);
        assert_eq!(g.len(), 2);
        assert!(!g.contains("elsewhere.html"));
        assert_eq!(g.out_degree("a"), Some(1));
    }

    #[test]
    fn repeated_pages_merge_links() {
        let g = LinkGraph::new([("a", vec!["b"]), ("a", vec!["c", "b"]), ("b", vec![]), ("c", vec![])]);
        assert_eq!(g.len(), 3);
        assert_eq!(
            g.links("a").unwrap(),
            vec![&PageId::from("b"), &PageId::from("c")]
        );
    }

    #[test]
    fn incoming_links() {
        let g = LinkGraph::new([("1", vec!["3"]), ("2", vec!["3", "1"]), ("3", vec![])]);
        assert_eq!(
            g.incoming("3").unwrap(),
            vec![&PageId::from("1"), &PageId::from("2")]
        );
        assert_eq!(g.in_degree("1"), Some(1));
        assert_eq!(g.in_degree("2"), Some(0));
        assert_eq!(g.incoming("4"), None);
    }

    #[test]
    fn pages_are_ordered() {
        let g: LinkGraph = [("c", vec!["a"]), ("a", vec![]), ("b", vec!["c"])]
            .into_iter()
            .collect();
        let pages: Vec<_> = g.pages().map(|p| p.as_str()).collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(g.index_of(*v), i);
            assert_eq!(g.page(*v).as_str(), pages[i]);
        }
    }

    #[test]
    fn empty() {
        let g = LinkGraph::new(Vec::<(&str, Vec<&str>)>::new());
        assert!(g.is_empty());
        assert_eq!(g.links("a"), None);
    }
}
