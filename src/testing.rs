use crate::LinkGraph;
use quickcheck::{Arbitrary, Gen};

#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: LinkGraph,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 8;

        let n = usize::arbitrary(g) % N + 1;
        let pages: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
        let graph = pages
            .iter()
            .map(|page| {
                let k = usize::arbitrary(g) % (n + 1);
                let links: Vec<String> = (0..k)
                    .map(|_| pages[usize::arbitrary(g) % n].clone())
                    .collect();
                (page.clone(), links)
            })
            .collect();
        Self { graph }
    }
}

/// A damping factor strictly inside (0, 1).
#[derive(Debug, Clone, Copy)]
pub struct Damping(pub f64);

impl Arbitrary for Damping {
    fn arbitrary(g: &mut Gen) -> Self {
        Self((u8::arbitrary(g) % 99 + 1) as f64 / 100.0)
    }
}
