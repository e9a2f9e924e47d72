//! Bipartite Graph Model (spec §4.1).
//!
//! An immutable-by-copy representation of a bipartite graph with partition
//! labels. Mutator-style operations (`without_edge`, `without_edge_endpoints`)
//! return a fresh graph; the receiver is left untouched, matching the
//! "derives new graphs, never mutates in place" contract that the
//! enumeration engine depends on for frame ownership.
//!
//! Vertex/edge containers use [`indexmap`] so that neighbor iteration and
//! partition iteration happen in insertion order, needed for reproducible
//! enumeration runs — the same reason this workspace already depends on
//! `indexmap` for its own order-preserving graph types
//! (`examples/petgraph-petgraph/Cargo.toml` `[workspace.dependencies]`).

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::GraphError;

/// Which partition a vertex belongs to. Immutable for the lifetime of a graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The "top" partition, `L`.
    Left,
    /// The "bottom" partition, `R`.
    Right,
}

/// An unordered pair `{u, v}` with `u` on the left and `v` on the right.
pub type Edge<V> = (V, V);

/// A finite bipartite graph `G = (L ∪ R, E)`.
///
/// Vertex identity `V` is any hashable, cloneable value. The graph never
/// allows same-side edges or self-loops (impossible by bipartiteness), and
/// never carries a vertex that isn't tagged with a side.
#[derive(Clone, Debug)]
pub struct BipartiteGraph<V: Clone + Eq + Hash> {
    left: IndexSet<V>,
    right: IndexSet<V>,
    sides: HashMap<V, Side>,
    // Neighbor lists for both left and right vertices, in insertion order.
    adj: HashMap<V, IndexSet<V>>,
    edge_count: usize,
}

impl<V: Clone + Eq + Hash> Default for BipartiteGraph<V> {
    fn default() -> Self {
        BipartiteGraph {
            left: IndexSet::new(),
            right: IndexSet::new(),
            sides: HashMap::new(),
            adj: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Clone + Eq + Hash> BipartiteGraph<V> {
    /// Returns which side `v` belongs to, or `None` if `v` isn't a vertex of
    /// this graph.
    pub fn side(&self, v: &V) -> Option<Side> {
        self.sides.get(v).copied()
    }

    /// Iterates the neighbors of `v` in insertion order. Empty if `v` has no
    /// edges or isn't a vertex of this graph. `O(deg(v))` to iterate.
    pub fn neighbors(&self, v: &V) -> impl Iterator<Item = &V> {
        self.adj.get(v).into_iter().flat_map(|set| set.iter())
    }

    /// Returns `true` if `{u, v}` is an edge, independent of which endpoint
    /// is on which side.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adj.get(u).map_or(false, |set| set.contains(v))
    }

    /// Number of vertices, `|L| + |R|`.
    pub fn node_count(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Number of edges, `|E|`.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates the LEFT partition in insertion order.
    pub fn top(&self) -> impl Iterator<Item = &V> {
        self.left.iter()
    }

    /// Iterates the RIGHT partition in insertion order.
    pub fn bottom(&self) -> impl Iterator<Item = &V> {
        self.right.iter()
    }

    /// `true` if `|L| = |R|`.
    pub fn sides_equal_size(&self) -> bool {
        self.left.len() == self.right.len()
    }

    /// Iterates every edge `(l, r)` with `l` on the left, in a deterministic
    /// but otherwise unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.left
            .iter()
            .flat_map(move |l| self.neighbors(l).map(move |r| (l.clone(), r.clone())))
    }

    /// Returns a new graph with edge `{l, r}` removed. `|V|` is unchanged,
    /// `|E|` decreases by one. No-op (still a fresh clone) if the edge
    /// wasn't present.
    pub fn without_edge(&self, l: &V, r: &V) -> BipartiteGraph<V> {
        let mut g = self.clone();
        if let Some(set) = g.adj.get_mut(l) {
            if set.shift_remove(r) {
                g.edge_count -= 1;
            }
        }
        if let Some(set) = g.adj.get_mut(r) {
            set.shift_remove(l);
        }
        g
    }

    /// Returns a new graph with both endpoints of edge `{l, r}` — and every
    /// edge incident to either of them — removed. `|V|` decreases by two.
    pub fn without_edge_endpoints(&self, l: &V, r: &V) -> BipartiteGraph<V> {
        let mut g = self.clone();
        g.remove_vertex(l);
        g.remove_vertex(r);
        g
    }

    /// Returns a new graph with every vertex in `vs` — and every edge
    /// incident to any of them — removed. Used by `enum_maximal` to delete
    /// an entire matching's worth of vertices at once.
    pub fn without_vertices<I: IntoIterator<Item = V>>(&self, vs: I) -> BipartiteGraph<V> {
        let mut g = self.clone();
        for v in vs {
            g.remove_vertex(&v);
        }
        g
    }

    /// Builds the induced subgraph containing exactly the edges whose left
    /// endpoint is in `left` and whose right endpoint is in `right`.
    ///
    /// Grounded on `original_source`'s `BipartiteGraph.limited_to`; used by
    /// `enum_maximal`'s step 4 to build the subgraph induced by the
    /// neighbors of a high-degree vertex, excluding the vertex itself.
    pub fn limited_to(&self, left: &IndexSet<V>, right: &IndexSet<V>) -> BipartiteGraph<V> {
        let mut builder = GraphBuilder::new();
        for l in left {
            builder.add_left(l.clone());
        }
        for r in right {
            builder.add_right(r.clone());
        }
        for l in left {
            for r in self.neighbors(l) {
                if right.contains(r) {
                    // Endpoints are already registered; this cannot fail.
                    let _ = builder.add_edge(l.clone(), r.clone());
                }
            }
        }
        builder.build()
    }

    fn remove_vertex(&mut self, v: &V) {
        let neighbors: Vec<V> = self
            .adj
            .get(v)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        for n in &neighbors {
            if let Some(set) = self.adj.get_mut(n) {
                set.shift_remove(v);
            }
            self.edge_count -= 1;
        }
        self.adj.remove(v);
        match self.sides.remove(v) {
            Some(Side::Left) => {
                self.left.shift_remove(v);
            }
            Some(Side::Right) => {
                self.right.shift_remove(v);
            }
            None => {}
        }
    }
}

/// Constructs a [`BipartiteGraph`], recording each vertex's side and
/// validating edges as they're added. Matches spec §6's required
/// collaborator interface (`new_graph`, `add_left`, `add_right`, `add_edge`).
#[derive(Clone, Debug)]
pub struct GraphBuilder<V: Clone + Eq + Hash> {
    graph: BipartiteGraph<V>,
}

impl<V: Clone + Eq + Hash> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> GraphBuilder<V> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        GraphBuilder {
            graph: BipartiteGraph::default(),
        }
    }

    /// Registers `v` as a LEFT vertex. Idempotent if already LEFT.
    pub fn add_left(&mut self, v: V) -> &mut Self {
        if !self.graph.sides.contains_key(&v) {
            self.graph.sides.insert(v.clone(), Side::Left);
        }
        self.graph.left.insert(v);
        self
    }

    /// Registers `v` as a RIGHT vertex. Idempotent if already RIGHT.
    pub fn add_right(&mut self, v: V) -> &mut Self {
        if !self.graph.sides.contains_key(&v) {
            self.graph.sides.insert(v.clone(), Side::Right);
        }
        self.graph.right.insert(v);
        self
    }

    /// Adds edge `{left, right}`. Fails if either endpoint was never
    /// registered via `add_left`/`add_right`, or if a vertex is registered
    /// on both sides (same-side edges are unrepresentable: an edge always
    /// takes one value already known to be LEFT and one already known to be
    /// RIGHT).
    pub fn add_edge(&mut self, left: V, right: V) -> Result<(), GraphError<V>> {
        match self.graph.sides.get(&left) {
            Some(Side::Left) => {}
            Some(Side::Right) => return Err(GraphError::DuplicateVertex(left)),
            None => return Err(GraphError::UnknownVertex(left)),
        }
        match self.graph.sides.get(&right) {
            Some(Side::Right) => {}
            Some(Side::Left) => return Err(GraphError::DuplicateVertex(right)),
            None => return Err(GraphError::UnknownVertex(right)),
        }

        let left_set = self.graph.adj.entry(left.clone()).or_default();
        let inserted = left_set.insert(right.clone());
        self.graph
            .adj
            .entry(right.clone())
            .or_default()
            .insert(left.clone());
        if inserted {
            self.graph.edge_count += 1;
        }
        Ok(())
    }

    /// Consumes the builder, yielding the finished graph.
    pub fn build(self) -> BipartiteGraph<V> {
        self.graph
    }
}
