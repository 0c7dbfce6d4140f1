//! Shortest paths on character grids.
//!
//! A grid is a list of equally long rows. `#` marks a wall, `S` the start,
//! `T` the target, and every other character is open ground. Movement is
//! unweighted and 4-directional.
//!
//! - [`parse`] / [`parse_with`] turn a grid into an adjacency [`Graph`]
//!   over its open cells and locate the markers.
//! - [`find_path`] / [`find_path_with`] run a breadth-first search from
//!   start to target and return the path, or a [`PathError`] saying why
//!   there is none. [`shortest_path`] is the same search returning `Option`.
//! - [`bfs_path`] and [`bfs_map`] work on anything implementing [`Pather`].
//!
//! ```
//! use gridpath::{Pos, find_path};
//!
//! let path = find_path(&["S.T", "###", "..."]).unwrap();
//! assert_eq!(path, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
//! ```

mod bfs;
mod config;
mod error;
mod finder;
mod graph;
mod neighbors;
mod parser;
mod traits;

pub use bfs::{PathNode, UNREACHABLE, bfs_map, bfs_path};
pub use config::{Legend, Marker, MarkerPolicy, ParserConfig};
pub use error::PathError;
pub use finder::{find_path, find_path_with, shortest_path};
pub use graph::Graph;
pub use gridpath_core::{Pos, Range};
pub use neighbors::Neighbors;
pub use parser::{ParsedGrid, parse, parse_with};
pub use traits::Pather;
