use std::fmt;

use tracing::debug;

use super::CurveGraph;

/// Whether a graph can be drawn as one continuous stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerKind {
    /// No single trail covers every edge.
    None,
    /// A closed trail exists; any vertex with edges can start it.
    Circuit,
    /// An open trail exists between the two odd-degree vertices.
    Path,
}

impl EulerKind {
    /// Returns `true` for [`Circuit`](Self::Circuit) and [`Path`](Self::Path).
    #[must_use]
    pub fn is_eulerian(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for EulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Circuit => "circuit",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}

impl CurveGraph {
    /// Classifies the graph by connectivity and vertex parity.
    ///
    /// Vertices without edges are ignored. A disconnected graph is
    /// [`EulerKind::None`] whatever its parity.
    #[must_use]
    pub fn classify(&self) -> EulerKind {
        let connected = self.is_connected();
        let odd = self.odd_vertices().len();
        let kind = match (connected, odd) {
            (true, 0) => EulerKind::Circuit,
            (true, 2) => EulerKind::Path,
            _ => EulerKind::None,
        };
        debug!(%kind, connected, odd, edges = self.edge_count(), "classified curve graph");
        kind
    }

    /// Returns whether every vertex with edges is reachable from every other.
    ///
    /// A graph without edges counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.adjacency.iter().position(|adj| !adj.is_empty()) else {
            return true;
        };
        let mut visited = vec![false; self.adjacency.len()];
        self.mark_reachable(start, &mut visited);
        self.adjacency
            .iter()
            .zip(&visited)
            .all(|(adj, &seen)| seen || adj.is_empty())
    }

    /// Returns the indices of vertices with an odd number of incident edges.
    #[must_use]
    pub fn odd_vertices(&self) -> Vec<usize> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, adj)| adj.len() % 2 == 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Sets `visited[v]` for every vertex reachable from `from` over the
    /// current edges, `from` included.
    ///
    /// `visited` holds one flag per vertex. Flags already set are left
    /// alone, so repeated calls accumulate. Uses an explicit stack, so
    /// depth is bounded by memory rather than the call stack.
    pub fn mark_reachable(&self, from: usize, visited: &mut [bool]) {
        self.visit_reachable(from, visited, |_| {});
    }

    /// Groups the vertices that carry edges into connected components.
    ///
    /// Components are ordered by their lowest vertex index and each group is
    /// sorted ascending. Isolated vertices are not reported.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut groups = Vec::new();
        for i in 0..self.adjacency.len() {
            if visited[i] || self.adjacency[i].is_empty() {
                continue;
            }
            let mut group = Vec::new();
            self.visit_reachable(i, &mut visited, |v| group.push(v));
            group.sort_unstable();
            groups.push(group);
        }
        groups
    }

    fn visit_reachable(&self, from: usize, visited: &mut [bool], mut on_visit: impl FnMut(usize)) {
        let Some(flag) = visited.get_mut(from) else {
            return;
        };
        if !*flag {
            *flag = true;
            on_visit(from);
        }
        let mut stack = vec![from];
        while let Some(u) = stack.pop() {
            for &v in self.neighbors(u) {
                if let Some(seen) = visited.get_mut(v) {
                    if !*seen {
                        *seen = true;
                        on_visit(v);
                        stack.push(v);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::CurvePoint;
    use crate::graph::{CurveGraph, EulerKind};

    fn graph(n: usize, edges: &[(usize, usize)]) -> CurveGraph {
        #[allow(clippy::cast_precision_loss)]
        let pts = (0..n)
            .map(|i| CurvePoint::at(i as f64, 0.0, 0, 0.0))
            .collect();
        let mut g = CurveGraph::new(pts);
        for &(u, v) in edges {
            g.add_edge_by_index(u, v).unwrap();
        }
        g
    }

    #[test]
    fn triangle_is_circuit() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(g.classify(), EulerKind::Circuit);
    }

    #[test]
    fn open_chain_is_path() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(g.classify(), EulerKind::Path);
        assert_eq!(g.odd_vertices(), vec![0, 2]);
    }

    #[test]
    fn disjoint_edges_are_none() {
        let g = graph(4, &[(0, 1), (2, 3)]);
        assert!(!g.is_connected());
        assert_eq!(g.classify(), EulerKind::None);
    }

    #[test]
    fn disjoint_circuits_are_none_despite_even_parity() {
        let g = graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert!(g.odd_vertices().is_empty());
        assert_eq!(g.classify(), EulerKind::None);
    }

    #[test]
    fn star_with_four_leaves_is_none() {
        let g = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert!(g.is_connected());
        assert_eq!(g.odd_vertices().len(), 4);
        assert_eq!(g.classify(), EulerKind::None);
    }

    #[test]
    fn isolated_vertices_are_ignored() {
        let g = graph(5, &[(1, 2), (2, 3), (3, 1)]);
        assert!(g.is_connected());
        assert_eq!(g.classify(), EulerKind::Circuit);
    }

    #[test]
    fn edgeless_graph_is_trivially_circuit() {
        assert_eq!(graph(3, &[]).classify(), EulerKind::Circuit);
        assert_eq!(graph(0, &[]).classify(), EulerKind::Circuit);
    }

    #[test]
    fn mark_reachable_follows_current_edges() {
        let g = graph(5, &[(0, 1), (1, 2), (3, 4)]);
        let mut visited = vec![false; 5];
        g.mark_reachable(2, &mut visited);
        assert_eq!(visited, vec![true, true, true, false, false]);
        g.mark_reachable(4, &mut visited);
        assert!(visited.iter().all(|&v| v));
    }

    #[test]
    fn mark_reachable_ignores_out_of_range_start() {
        let g = graph(2, &[(0, 1)]);
        let mut visited = vec![false; 2];
        g.mark_reachable(9, &mut visited);
        assert_eq!(visited, vec![false, false]);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let g = graph(n, &edges);
        assert_eq!(g.classify(), EulerKind::Path);
    }

    #[test]
    fn components_groups_by_lowest_index() {
        let g = graph(7, &[(5, 6), (0, 3), (3, 1), (2, 4)]);
        assert_eq!(g.components(), vec![vec![0, 1, 3], vec![2, 4], vec![5, 6]]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(EulerKind::Path.to_string(), "path");
        assert!(EulerKind::Circuit.is_eulerian());
        assert!(!EulerKind::None.is_eulerian());
    }
}
