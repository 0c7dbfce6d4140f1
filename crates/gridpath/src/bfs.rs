use std::collections::VecDeque;

use gridpath_core::{Pos, Range};

use crate::traits::Pather;

/// A position with its BFS distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Compute the shortest path from `from` to `to` with breadth-first search.
///
/// Neighbors are explored in the order `pather` returns them, so among
/// several shortest paths the first one discovered wins. Returns the full
/// path (including both endpoints) or `None` if `to` cannot be reached or
/// either endpoint lies outside `rng`.
pub fn bfs_path<P: Pather>(pather: &P, rng: Range, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let start_idx = rng.index(from)?;
    let goal_idx = rng.index(to)?;

    if start_idx == goal_idx {
        return Some(vec![from]);
    }

    let mut visited = vec![false; rng.len()];
    let mut parent = vec![NO_PARENT; rng.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut expanded = 0usize;
    let found = 'search: loop {
        let Some(ci) = queue.pop_front() else {
            break 'search false;
        };

        if ci == goal_idx {
            break 'search true;
        }
        expanded += 1;

        nbuf.clear();
        pather.neighbors(rng.pos(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = rng.index(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            parent[ni] = ci;
            queue.push_back(ni);
        }
    };

    log::trace!("bfs {from} -> {to}: expanded {expanded} cells, found={found}");

    if !found {
        return None;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(rng.pos(ci));
        ci = parent[ci];
    }
    path.reverse();
    Some(path)
}

/// Compute a breadth-first distance map from `from`.
///
/// Each step has cost 1. Returns every reached node with its distance, in
/// discovery order (so costs are non-decreasing). Empty if `from` lies
/// outside `rng`.
pub fn bfs_map<P: Pather>(pather: &P, rng: Range, from: Pos) -> Vec<PathNode> {
    let mut results = Vec::new();
    let Some(si) = rng.index(from) else {
        return results;
    };

    let mut dist = vec![UNREACHABLE; rng.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    dist[si] = 0;
    queue.push_back(si);
    results.push(PathNode { pos: from, cost: 0 });

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;

        nbuf.clear();
        pather.neighbors(rng.pos(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = rng.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
            results.push(PathNode { pos: np, cost: nd });
        }
    }

    results
}
