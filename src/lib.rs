mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
mod graph;
pub use self::graph::{LinkGraph, PageId};

pub mod corpus;
pub mod page_rank;
pub use self::page_rank::{iterate_pagerank, sample_pagerank, transition};

#[cfg(test)]
mod testing;
