//! Chip connectivity: the hardware topology a mapping is judged against.

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::{FxHashMap, FxHashSet};

use qumap_ir::PhysicalQubit;

use crate::error::{LayoutError, LayoutResult};

/// The connectivity representations a [`Chip`] can be built from.
///
/// All three describe the same thing: an undirected graph over physical
/// qubit identifiers. Anything else fails construction with guidance on
/// the accepted forms.
#[derive(Debug, Clone)]
pub enum ConnectivitySpec {
    /// Pairs of physical qubits joined by an edge.
    EdgeList(Vec<(u32, u32)>),
    /// Each physical qubit with the list of its neighbours. Qubits with
    /// an empty list are isolated nodes.
    AdjacencyMap(Vec<(u32, Vec<u32>)>),
    /// Square boolean matrix; entry `(i, j)` is true when qubits `i` and
    /// `j` are coupled. Must be symmetric with a false diagonal.
    AdjacencyMatrix(Vec<Vec<bool>>),
}

impl From<Vec<(u32, u32)>> for ConnectivitySpec {
    fn from(edges: Vec<(u32, u32)>) -> Self {
        ConnectivitySpec::EdgeList(edges)
    }
}

impl From<Vec<(u32, Vec<u32>)>> for ConnectivitySpec {
    fn from(adjacency: Vec<(u32, Vec<u32>)>) -> Self {
        ConnectivitySpec::AdjacencyMap(adjacency)
    }
}

impl From<Vec<Vec<bool>>> for ConnectivitySpec {
    fn from(matrix: Vec<Vec<bool>>) -> Self {
        ConnectivitySpec::AdjacencyMatrix(matrix)
    }
}

impl ConnectivitySpec {
    /// Normalize the representation into a node list (first-seen order)
    /// and a deduplicated undirected edge list.
    fn into_parts(self) -> LayoutResult<(Vec<u32>, Vec<(u32, u32)>)> {
        let mut nodes: Vec<u32> = vec![];
        let mut seen_nodes = FxHashSet::default();
        let mut edges: Vec<(u32, u32)> = vec![];
        let mut seen_edges = FxHashSet::default();

        let mut add_node = |id: u32, nodes: &mut Vec<u32>| {
            if seen_nodes.insert(id) {
                nodes.push(id);
            }
        };
        let mut add_edge = |a: u32, b: u32, edges: &mut Vec<(u32, u32)>| -> LayoutResult<()> {
            if a == b {
                return Err(LayoutError::InvalidConnectivity {
                    reason: format!("edge ({a}, {b}) is a self-loop"),
                });
            }
            if seen_edges.insert((a.min(b), a.max(b))) {
                edges.push((a, b));
            }
            Ok(())
        };

        match self {
            ConnectivitySpec::EdgeList(list) => {
                for (a, b) in list {
                    add_node(a, &mut nodes);
                    add_node(b, &mut nodes);
                    add_edge(a, b, &mut edges)?;
                }
            }
            ConnectivitySpec::AdjacencyMap(adjacency) => {
                for (qubit, neighbours) in adjacency {
                    add_node(qubit, &mut nodes);
                    for neighbour in neighbours {
                        add_node(neighbour, &mut nodes);
                        add_edge(qubit, neighbour, &mut edges)?;
                    }
                }
            }
            ConnectivitySpec::AdjacencyMatrix(matrix) => {
                let n = matrix.len();
                for (i, row) in matrix.iter().enumerate() {
                    if row.len() != n {
                        return Err(LayoutError::InvalidConnectivity {
                            reason: format!(
                                "adjacency matrix is not square: row {i} has {} entries, expected {n}",
                                row.len()
                            ),
                        });
                    }
                }
                for i in 0..n {
                    if matrix[i][i] {
                        return Err(LayoutError::InvalidConnectivity {
                            reason: format!("adjacency matrix has a self-loop at ({i}, {i})"),
                        });
                    }
                    for j in (i + 1)..n {
                        if matrix[i][j] != matrix[j][i] {
                            return Err(LayoutError::InvalidConnectivity {
                                reason: format!(
                                    "adjacency matrix is not symmetric at ({i}, {j})"
                                ),
                            });
                        }
                    }
                }
                #[allow(clippy::cast_possible_truncation)]
                for i in 0..n {
                    add_node(i as u32, &mut nodes);
                }
                #[allow(clippy::cast_possible_truncation)]
                for i in 0..n {
                    for j in (i + 1)..n {
                        if matrix[i][j] {
                            add_edge(i as u32, j as u32, &mut edges)?;
                        }
                    }
                }
            }
        }

        Ok((nodes, edges))
    }
}

/// A physical device topology: an undirected connectivity graph over
/// physical qubits, with the qubit count and edge density frozen at
/// construction.
///
/// The chip is immutable once built; one instance models one device for
/// the lifetime of a mapping search, and may be shared freely across
/// search workers.
#[derive(Debug, Clone)]
pub struct Chip {
    /// The connectivity graph; node weights are the external qubit ids.
    graph: UnGraph<u32, ()>,
    /// External qubit id to graph node index.
    node_index: FxHashMap<u32, NodeIndex>,
    /// Qubit ids in sorted order.
    ids: Vec<u32>,
    density: f64,
}

impl Chip {
    /// Build a chip from any accepted connectivity representation.
    ///
    /// See [`ConnectivitySpec`] for the accepted forms; anything
    /// malformed fails with [`LayoutError::InvalidConnectivity`].
    pub fn new(spec: impl Into<ConnectivitySpec>) -> LayoutResult<Self> {
        let (nodes, edges) = spec.into().into_parts()?;
        Ok(Self::from_parts(nodes, edges))
    }

    /// Build a chip from an edge list.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32)>) -> LayoutResult<Self> {
        Self::new(edges.into_iter().collect::<Vec<_>>())
    }

    /// Build a chip from an adjacency map.
    pub fn from_adjacency(
        adjacency: impl IntoIterator<Item = (u32, Vec<u32>)>,
    ) -> LayoutResult<Self> {
        Self::new(adjacency.into_iter().collect::<Vec<_>>())
    }

    /// Build a chip from a square boolean adjacency matrix.
    pub fn from_matrix(matrix: Vec<Vec<bool>>) -> LayoutResult<Self> {
        Self::new(matrix)
    }

    /// Assemble the graph from normalized parts. Edges are deduplicated
    /// and self-loop free by this point.
    fn from_parts(nodes: Vec<u32>, edges: Vec<(u32, u32)>) -> Self {
        let mut graph = UnGraph::default();
        let mut node_index = FxHashMap::default();
        for &id in &nodes {
            node_index.insert(id, graph.add_node(id));
        }
        for (a, b) in edges {
            graph.add_edge(node_index[&a], node_index[&b], ());
        }

        let mut ids = nodes;
        ids.sort_unstable();

        let n = graph.node_count();
        let density = if n < 2 {
            0.0
        } else {
            let max_edges = n * (n - 1) / 2;
            graph.edge_count() as f64 / max_edges as f64
        };

        Self {
            graph,
            node_index,
            ids,
            density,
        }
    }

    /// Number of physical qubits.
    pub fn qubit_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of coupling edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Fraction of possible edges present, in `[0, 1]`.
    ///
    /// Used by the slicer as a proxy for how many mapping constraints
    /// can be checked together. Defined as 0 for chips with fewer than
    /// two qubits.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Check if the chip has a qubit with the given identifier.
    pub fn contains(&self, qubit: PhysicalQubit) -> bool {
        self.node_index.contains_key(&qubit.0)
    }

    /// Check if two physical qubits are joined by a coupling edge.
    ///
    /// Symmetric, and false when either qubit is absent from the chip.
    /// This is the single primitive feasibility checking depends on.
    #[inline]
    pub fn is_adjacent(&self, p1: PhysicalQubit, p2: PhysicalQubit) -> bool {
        match (self.node_index.get(&p1.0), self.node_index.get(&p2.0)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Iterate over the neighbours of a physical qubit. Empty when the
    /// qubit is absent.
    pub fn neighbors(&self, qubit: PhysicalQubit) -> impl Iterator<Item = PhysicalQubit> + '_ {
        self.node_index
            .get(&qubit.0)
            .into_iter()
            .flat_map(move |&idx| {
                self.graph
                    .neighbors(idx)
                    .map(move |n| PhysicalQubit(self.graph[n]))
            })
    }

    /// Iterate over the physical qubits in ascending id order.
    pub fn physical_qubits(&self) -> impl Iterator<Item = PhysicalQubit> + '_ {
        self.ids.iter().copied().map(PhysicalQubit)
    }

    // =========================================================================
    // Topology factories
    // =========================================================================

    /// A linear chain `0-1-2-...-(n-1)`.
    pub fn linear(n: u32) -> Self {
        let edges = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        Self::from_parts((0..n).collect(), edges)
    }

    /// A ring: a linear chain with the ends joined.
    pub fn ring(n: u32) -> Self {
        let mut edges: Vec<_> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        if n > 2 {
            edges.push((n - 1, 0));
        }
        Self::from_parts((0..n).collect(), edges)
    }

    /// A star: qubit 0 coupled to every other qubit.
    pub fn star(n: u32) -> Self {
        let edges = (1..n).map(|i| (0, i)).collect();
        Self::from_parts((0..n).collect(), edges)
    }

    /// A fully connected chip.
    pub fn full(n: u32) -> Self {
        let mut edges = vec![];
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        Self::from_parts((0..n).collect(), edges)
    }

    /// A rectangular grid, `rows * cols` qubits with nearest-neighbour
    /// coupling. Qubit ids are row-major.
    pub fn grid(rows: u32, cols: u32) -> Self {
        let mut edges = vec![];
        for r in 0..rows {
            for c in 0..cols {
                let id = r * cols + c;
                if c + 1 < cols {
                    edges.push((id, id + 1));
                }
                if r + 1 < rows {
                    edges.push((id, id + cols));
                }
            }
        }
        Self::from_parts((0..rows * cols).collect(), edges)
    }
}
