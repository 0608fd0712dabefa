use crate::PageId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page `{0}` is not in the link graph")]
    UnknownPage(PageId),

    #[error("link graph has no pages")]
    EmptyGraph,

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("convergence threshold must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("at least one sample is required")]
    NoSamples,

    #[error("no convergence after {iterations} iterations (largest change {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("invalid transition weights: {0}")]
    Weights(String),

    #[error("cannot read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad link pattern: {0}")]
    Pattern(#[from] regex::Error),
}
