//! Shortest path between the start and target markers of a grid.

use gridpath_core::Pos;

use crate::bfs::bfs_path;
use crate::config::ParserConfig;
use crate::error::PathError;
use crate::parser::{ParsedGrid, parse_with};

/// Shortest path from `S` to `T`, or `None` if there is none.
///
/// `None` covers a missing marker, disconnected endpoints, and a
/// non-rectangular grid alike. Use [`find_path`] to tell them apart.
pub fn shortest_path<S: AsRef<str>>(grid: &[S]) -> Option<Vec<Pos>> {
    find_path(grid).ok()
}

/// Shortest path from `S` to `T` using the default [`ParserConfig`].
pub fn find_path<S: AsRef<str>>(grid: &[S]) -> Result<Vec<Pos>, PathError> {
    find_path_with(grid, &ParserConfig::default())
}

/// Shortest path from the start marker to the target marker.
///
/// The grid is parsed fresh on every call. When the target is a direct
/// neighbor of the start and the grid holds no floor cell at all, the two
/// markers are read as one combined cell and `[start]` is returned without
/// searching. Otherwise a breadth-first search runs from the start; among
/// equally short paths the one found first under the down, up, right, left
/// neighbor order is returned.
pub fn find_path_with<S: AsRef<str>>(
    grid: &[S],
    config: &ParserConfig,
) -> Result<Vec<Pos>, PathError> {
    let parsed = parse_with(grid, config)?;
    let (start, target) = parsed.endpoints()?;

    if is_combined_cell(&parsed, start, target) {
        log::debug!("start {start} and target {target} form one cell");
        return Ok(vec![start]);
    }

    let path = bfs_path(&parsed.graph, parsed.graph.range(), start, target)
        .ok_or(PathError::Unreachable { start, target })?;
    log::debug!("path {start} -> {target}: {} steps", path.len() - 1);
    Ok(path)
}

/// Adjacent markers in a grid without any floor, such as `["ST"]`.
fn is_combined_cell(parsed: &ParsedGrid, start: Pos, target: Pos) -> bool {
    parsed.floor_cells == 0 && parsed.graph.has_edge(start, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Marker, MarkerPolicy};

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn open_grid_path() {
        let path = find_path(&["S..", ".#.", "..T"]).unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn combined_cell() {
        assert_eq!(find_path(&["ST"]), Ok(vec![p(0, 0)]));
        assert_eq!(find_path(&["S", "T"]), Ok(vec![p(0, 0)]));
        assert_eq!(find_path(&["#TS#"]), Ok(vec![p(0, 2)]));
    }

    #[test]
    fn adjacent_markers_with_floor_are_searched() {
        assert_eq!(find_path(&["ST."]), Ok(vec![p(0, 0), p(0, 1)]));
        assert_eq!(find_path(&["ST", ".."]), Ok(vec![p(0, 0), p(0, 1)]));
    }

    #[test]
    fn non_floor_open_cells_do_not_disable_combined_cell() {
        // 'x' is walkable but is not the floor character.
        assert_eq!(find_path(&["STx"]), Ok(vec![p(0, 0)]));
    }

    #[test]
    fn wall_between_markers() {
        assert_eq!(
            find_path(&["S#T"]),
            Err(PathError::Unreachable {
                start: p(0, 0),
                target: p(0, 2),
            })
        );
        assert_eq!(shortest_path(&["S#T"]), None);
    }

    #[test]
    fn missing_markers() {
        assert_eq!(
            find_path(&["..T"]),
            Err(PathError::MissingEndpoint(Marker::Start))
        );
        assert_eq!(
            find_path(&["S.."]),
            Err(PathError::MissingEndpoint(Marker::Target))
        );
        assert_eq!(
            find_path(&["..."]),
            Err(PathError::MissingEndpoint(Marker::Start))
        );
        assert_eq!(shortest_path(&["S.."]), None);
    }

    #[test]
    fn malformed_grid_is_absent() {
        assert!(matches!(
            find_path(&["S..", "..", "..T"]),
            Err(PathError::MalformedGrid { row: 1, .. })
        ));
        assert_eq!(shortest_path(&["S..", "..", "..T"]), None);
    }

    #[test]
    fn last_markers_are_used() {
        // The later 'S' at (0,2) is the start.
        let path = find_path(&["S.S", "..T"]).unwrap();
        assert_eq!(path, vec![p(0, 2), p(1, 2)]);
    }

    #[test]
    fn unique_policy_surfaces_duplicates() {
        let cfg = ParserConfig {
            markers: MarkerPolicy::Unique,
            ..ParserConfig::default()
        };
        assert!(matches!(
            find_path_with(&["S.S", "..T"], &cfg),
            Err(PathError::DuplicateMarker {
                marker: Marker::Start,
                ..
            })
        ));
    }
}
