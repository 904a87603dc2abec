pub mod common;
pub mod ego;
pub mod frequency;
pub mod pathfinding;

pub use common::GraphView;
pub use ego::filter_connections;
pub use frequency::{canonical_pair, EdgeFrequencyCounter, NamePair, RankedPair};
pub use pathfinding::{breadth_first_search, depth_first_search, PathResult};
