//! Shared building blocks for Advent of Code solutions: weighted graph
//! search, integer vectors and regions, and a few number helpers.

mod error;
pub mod geom;
pub mod math;
pub mod parallel;
pub mod region;
pub mod search;
pub mod timing;

pub use error::{Error, Result};
pub use geom::{Direction, Vector2D, Vector3D};
pub use math::{distinct_pairs, for_each_pair, gcd, lcm, lcm_all};
pub use parallel::{min_satisfying, min_satisfying_with};
pub use region::Region2D;
pub use search::{Cost, Graph, Search, SearchPath, SearchResult, SearchTree};
pub use timing::{format_duration, timed, Stopwatch};
