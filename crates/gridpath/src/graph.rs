//! Adjacency graph over the open cells of a grid.

use gridpath_core::{Pos, Range};

use crate::traits::Pather;

/// Undirected graph whose nodes are the open cells of a grid.
///
/// Storage is dense and row-major over the grid's [`Range`]: each cell has
/// an "open" flag and a neighbor list. Neighbor lists keep the order edges
/// were added in, which the parser fixes to down, up, right, left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    rng: Range,
    open: Vec<bool>,
    edges: Vec<Vec<Pos>>,
}

impl Graph {
    /// Create a graph over `rng` with no nodes.
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            open: vec![false; len],
            edges: vec![Vec::new(); len],
        }
    }

    /// Make `p` a node with an empty neighbor list.
    pub(crate) fn add_node(&mut self, p: Pos) {
        if let Some(i) = self.rng.index(p) {
            self.open[i] = true;
            self.edges[i].clear();
        }
    }

    /// Append `to` to the neighbor list of `from`.
    pub(crate) fn add_edge(&mut self, from: Pos, to: Pos) {
        if let Some(i) = self.rng.index(from) {
            self.edges[i].push(to);
        }
    }

    /// The grid rectangle the graph covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Whether `p` is a node (an open cell).
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.rng.index(p).is_some_and(|i| self.open[i])
    }

    /// Neighbors of `p` in exploration order. Empty if `p` is not a node.
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        match self.rng.index(p) {
            Some(i) if self.open[i] => self.edges[i].as_slice(),
            _ => &[],
        }
    }

    /// Whether `b` is in the neighbor list of `a`.
    pub fn has_edge(&self, a: Pos, b: Pos) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Pos> + '_ {
        self.rng
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.open[i])
            .map(|(_, p)| p)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

impl Pather for Graph {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend_from_slice(Graph::neighbors(self, p));
    }
}
