use gridpath_core::Pos;

/// Reusable buffer for enumerating the 4-directional neighbors of a cell.
///
/// Neighbors are always produced in the order down, up, right, left. Search
/// results depend on this order when several shortest paths exist.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
