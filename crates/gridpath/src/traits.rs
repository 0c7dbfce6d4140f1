use gridpath_core::Pos;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in the order they should be
    /// explored. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}
