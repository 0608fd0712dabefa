use crate::{Distribution, Result};

pub trait PageRank {
    type Output: PageRankResult;

    fn calc(&mut self) -> Result<Self::Output>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;
    fn into_page_rank(self) -> Distribution;
}
