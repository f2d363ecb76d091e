use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounding box was requested for zero points.
    #[error("cannot build a region from an empty set of points")]
    EmptyRegion,
    #[error("invalid direction character {0:?}")]
    InvalidDirection(char),
}

pub type Result<T> = std::result::Result<T, Error>;
