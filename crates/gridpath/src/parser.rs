//! Grid parsing: character rows in, adjacency [`Graph`] and endpoints out.

use gridpath_core::{Pos, Range};

use crate::config::{Marker, MarkerPolicy, ParserConfig};
use crate::error::PathError;
use crate::graph::Graph;
use crate::neighbors::Neighbors;

/// Result of parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGrid {
    /// Open cells and their 4-directional links.
    pub graph: Graph,
    /// Position of the start marker, if present.
    pub start: Option<Pos>,
    /// Position of the target marker, if present.
    pub target: Option<Pos>,
    /// Number of cells holding exactly the legend's floor character.
    pub floor_cells: usize,
}

impl ParsedGrid {
    /// Both endpoints, or the first one that is missing.
    pub fn endpoints(&self) -> Result<(Pos, Pos), PathError> {
        let start = self.start.ok_or(PathError::MissingEndpoint(Marker::Start))?;
        let target = self
            .target
            .ok_or(PathError::MissingEndpoint(Marker::Target))?;
        Ok((start, target))
    }
}

/// Parse `grid` with the default legend and marker policy.
///
/// See [`parse_with`].
pub fn parse<S: AsRef<str>>(grid: &[S]) -> Result<ParsedGrid, PathError> {
    parse_with(grid, &ParserConfig::default())
}

/// Parse `grid` into a graph over its open cells.
///
/// Every row must have as many characters as the first one, otherwise
/// [`PathError::MalformedGrid`] is returned. Nodes are created in a first
/// row-major pass which also records the markers; edges are added in a
/// second pass, checking neighbors in the order down, up, right, left.
/// A grid with no rows parses to an empty graph with no endpoints.
pub fn parse_with<S: AsRef<str>>(
    grid: &[S],
    config: &ParserConfig,
) -> Result<ParsedGrid, PathError> {
    let cells: Vec<Vec<char>> = grid.iter().map(|r| r.as_ref().chars().collect()).collect();
    let cols = cells.first().map_or(0, Vec::len);
    for (row, line) in cells.iter().enumerate() {
        if line.len() != cols {
            return Err(PathError::MalformedGrid {
                row,
                expected: cols,
                found: line.len(),
            });
        }
    }

    let rng = Range::sized(cells.len(), cols);
    let legend = &config.legend;
    let at = |p: Pos| cells[p.row as usize][p.col as usize];

    let mut graph = Graph::new(rng);
    let mut start = None;
    let mut target = None;
    let mut floor_cells = 0;

    for p in rng {
        let ch = at(p);
        if legend.is_wall(ch) {
            continue;
        }
        graph.add_node(p);
        if ch == legend.floor {
            floor_cells += 1;
        }
        match legend.marker(ch) {
            Some(Marker::Start) => place(&mut start, Marker::Start, p, config.markers)?,
            Some(Marker::Target) => place(&mut target, Marker::Target, p, config.markers)?,
            None => {}
        }
    }

    let mut nb = Neighbors::new();
    for p in rng {
        if legend.is_wall(at(p)) {
            continue;
        }
        for &n in nb.cardinal(p, |n| rng.contains(n) && !legend.is_wall(at(n))) {
            graph.add_edge(p, n);
        }
    }

    log::debug!(
        "parsed {}x{} grid: {} open cells ({} floor), {} edges, start={:?}, target={:?}",
        rng.rows(),
        rng.cols(),
        graph.node_count(),
        floor_cells,
        graph.edge_count(),
        start,
        target
    );

    Ok(ParsedGrid {
        graph,
        start,
        target,
        floor_cells,
    })
}

fn place(
    slot: &mut Option<Pos>,
    marker: Marker,
    p: Pos,
    policy: MarkerPolicy,
) -> Result<(), PathError> {
    if let (MarkerPolicy::Unique, Some(first)) = (policy, *slot) {
        return Err(PathError::DuplicateMarker {
            marker,
            first,
            second: p,
        });
    }
    *slot = Some(p);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Legend;

    #[test]
    fn nodes_are_exactly_the_non_wall_cells() {
        let grid = ["S.#", "#xT"];
        let parsed = parse(&grid).unwrap();
        let nodes: Vec<_> = parsed.graph.nodes().collect();
        assert_eq!(
            nodes,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2)]
        );
        assert_eq!(parsed.start, Some(Pos::new(0, 0)));
        assert_eq!(parsed.target, Some(Pos::new(1, 2)));
        // 'x' is open but not floor.
        assert_eq!(parsed.floor_cells, 1);
    }

    #[test]
    fn neighbor_lists_follow_down_up_right_left() {
        let grid = ["...", "...", "..."];
        let parsed = parse(&grid).unwrap();
        assert_eq!(
            parsed.graph.neighbors(Pos::new(1, 1)),
            &[Pos::new(2, 1), Pos::new(0, 1), Pos::new(1, 2), Pos::new(1, 0)]
        );
        assert_eq!(
            parsed.graph.neighbors(Pos::new(0, 0)),
            &[Pos::new(1, 0), Pos::new(0, 1)]
        );
    }

    #[test]
    fn walls_get_no_edges() {
        let grid = ["S#T"];
        let parsed = parse(&grid).unwrap();
        assert!(parsed.graph.neighbors(Pos::new(0, 0)).is_empty());
        assert!(parsed.graph.neighbors(Pos::new(0, 2)).is_empty());
        assert_eq!(parsed.graph.edge_count(), 0);
    }

    #[test]
    fn edges_are_symmetric() {
        let grid = ["S..#", ".#..", "..#T", "#..."];
        let g = parse(&grid).unwrap().graph;
        for a in g.nodes() {
            for &b in g.neighbors(a) {
                assert!(g.has_edge(b, a), "{b} missing back-edge to {a}");
            }
        }
    }

    #[test]
    fn last_marker_wins_by_default() {
        let grid = ["S.S", "T.T"];
        let parsed = parse(&grid).unwrap();
        assert_eq!(parsed.start, Some(Pos::new(0, 2)));
        assert_eq!(parsed.target, Some(Pos::new(1, 2)));
    }

    #[test]
    fn unique_policy_rejects_duplicates() {
        let cfg = ParserConfig {
            markers: MarkerPolicy::Unique,
            ..ParserConfig::default()
        };
        let err = parse_with(&["S.S", "..T"], &cfg).unwrap_err();
        assert_eq!(
            err,
            PathError::DuplicateMarker {
                marker: Marker::Start,
                first: Pos::new(0, 0),
                second: Pos::new(0, 2),
            }
        );
        assert!(parse_with(&["S..", "..T"], &cfg).is_ok());
    }

    #[test]
    fn missing_markers_are_absent() {
        let parsed = parse(&["...", ".T."]).unwrap();
        assert_eq!(parsed.start, None);
        assert_eq!(
            parsed.endpoints(),
            Err(PathError::MissingEndpoint(Marker::Start))
        );
        let parsed = parse(&["S.."]).unwrap();
        assert_eq!(
            parsed.endpoints(),
            Err(PathError::MissingEndpoint(Marker::Target))
        );
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse(&["S..", ".", "..T"]).unwrap_err();
        assert_eq!(
            err,
            PathError::MalformedGrid {
                row: 1,
                expected: 3,
                found: 1,
            }
        );
    }

    #[test]
    fn long_row_is_malformed() {
        let err = parse(&["S.", "...T"]).unwrap_err();
        assert!(matches!(err, PathError::MalformedGrid { row: 1, .. }));
    }

    #[test]
    fn empty_grid_has_no_nodes() {
        let rows: [&str; 0] = [];
        let parsed = parse(&rows).unwrap();
        assert!(parsed.graph.is_empty());
        assert_eq!(parsed.start, None);
        assert_eq!(parsed.target, None);
    }

    #[test]
    fn custom_legend() {
        let cfg = ParserConfig {
            legend: Legend {
                wall: 'X',
                floor: ' ',
                start: 'a',
                target: 'b',
            },
            ..ParserConfig::default()
        };
        let parsed = parse_with(&["a #", "X b"], &cfg).unwrap();
        assert_eq!(parsed.start, Some(Pos::new(0, 0)));
        assert_eq!(parsed.target, Some(Pos::new(1, 2)));
        // '#' is ordinary open floor under this legend.
        assert!(parsed.graph.contains(Pos::new(0, 2)));
        assert!(!parsed.graph.contains(Pos::new(1, 0)));
        assert_eq!(parsed.floor_cells, 2);
    }

    #[test]
    fn accepts_owned_rows() {
        let rows: Vec<String> = vec!["ST".to_string()];
        let parsed = parse(&rows).unwrap();
        assert_eq!(parsed.graph.node_count(), 2);
    }
}
