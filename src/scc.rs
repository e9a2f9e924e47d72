//! SCC Trimmer (spec §4.5).
//!
//! Computes the strongly connected components of a [`DirectedMatchingGraph`]
//! via [Tarjan's algorithm][1], in the structuring style of
//! `examples/petgraph-petgraph/src/algo/scc/tarjan_scc.rs` (a reusable
//! `TarjanScc` state, an explicit work stack, one DFS pass). Because our
//! vertices are an arbitrary hashable `V` rather than a dense index type,
//! this module first assigns each vertex a dense index for the one pass,
//! then uses [`fixedbitset`] for the visited bitset, the same choice
//! `tarjan_scc.rs` makes for its own index-based graphs.
//!
//! [1]: https://en.wikipedia.org/wiki/Tarjan%27s_strongly_connected_components_algorithm

use std::collections::HashMap;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use indexmap::IndexSet;

use crate::directed::DirectedMatchingGraph;
use crate::graph::BipartiteGraph;

struct TarjanScc {
    index: usize,
    lowlink: Vec<Option<usize>>,
    on_stack: FixedBitSet,
    stack: Vec<usize>,
    component_of: Vec<Option<usize>>,
    next_component: usize,
    disc: Vec<Option<usize>>,
}

impl TarjanScc {
    fn new(n: usize) -> Self {
        TarjanScc {
            index: 0,
            lowlink: vec![None; n],
            on_stack: FixedBitSet::with_capacity(n),
            stack: Vec::new(),
            component_of: vec![None; n],
            next_component: 0,
            disc: vec![None; n],
        }
    }

    /// Iterative Tarjan's algorithm: an explicit work stack stands in for
    /// recursion, the same non-recursive shape as `src/visit/traversal.rs`'s
    /// own `Dfs` traversal iterator ("`Dfs` is not recursive").
    fn run(&mut self, adj: &[Vec<usize>]) {
        let n = adj.len();
        #[derive(Clone, Copy)]
        struct Frame {
            node: usize,
            neighbor_idx: usize,
        }

        for start in 0..n {
            if self.disc[start].is_some() {
                continue;
            }
            let mut work: Vec<Frame> = vec![Frame {
                node: start,
                neighbor_idx: 0,
            }];
            self.disc[start] = Some(self.index);
            self.lowlink[start] = Some(self.index);
            self.index += 1;
            self.stack.push(start);
            self.on_stack.insert(start);

            while let Some(frame) = work.last_mut() {
                let v = frame.node;
                if frame.neighbor_idx < adj[v].len() {
                    let w = adj[v][frame.neighbor_idx];
                    frame.neighbor_idx += 1;
                    if self.disc[w].is_none() {
                        self.disc[w] = Some(self.index);
                        self.lowlink[w] = Some(self.index);
                        self.index += 1;
                        self.stack.push(w);
                        self.on_stack.insert(w);
                        work.push(Frame {
                            node: w,
                            neighbor_idx: 0,
                        });
                    } else if self.on_stack.contains(w) {
                        self.lowlink[v] = Some(self.lowlink[v].unwrap().min(self.disc[w].unwrap()));
                    }
                } else {
                    work.pop();
                    if let Some(parent) = work.last() {
                        let p = parent.node;
                        self.lowlink[p] = Some(self.lowlink[p].unwrap().min(self.lowlink[v].unwrap()));
                    }
                    if self.lowlink[v] == self.disc[v] {
                        let component = self.next_component;
                        self.next_component += 1;
                        loop {
                            let w = self.stack.pop().unwrap();
                            self.on_stack.set(w, false);
                            self.component_of[w] = Some(component);
                            if w == v {
                                break;
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Removes every arc of `d` whose endpoints lie in distinct strongly
/// connected components. Preserves all vertices; every remaining arc lies
/// on at least one directed cycle.
pub fn trim_to_sccs<V: Clone + Eq + Hash>(d: &DirectedMatchingGraph<V>) -> DirectedMatchingGraph<V> {
    let vertices: IndexSet<V> = d.vertex_set();
    let index_of: HashMap<V, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect();

    let adj: Vec<Vec<usize>> = vertices
        .iter()
        .map(|v| d.heads(v).map(|w| index_of[w]).collect())
        .collect();

    let mut tarjan = TarjanScc::new(vertices.len());
    tarjan.run(&adj);

    let mut trimmed = DirectedMatchingGraph::empty();
    for v in &vertices {
        trimmed.seed_vertex(v.clone());
    }
    for (v, &vi) in &index_of {
        for w in d.heads(v) {
            let wi = index_of[w];
            if tarjan.component_of[vi] == tarjan.component_of[wi] {
                trimmed.add_arc_pub(v.clone(), w.clone());
            }
        }
    }
    trimmed
}

/// Rebuilds an undirected [`BipartiteGraph`] from the arcs of a (typically
/// already-trimmed) directed matching graph, using `original` only to look
/// up each vertex's side. Vertex set is `original`'s; edge set is the
/// undirected projection of `d`'s arcs.
pub fn undirected_projection<V: Clone + Eq + Hash>(
    d: &DirectedMatchingGraph<V>,
    original: &BipartiteGraph<V>,
) -> BipartiteGraph<V> {
    use crate::graph::{GraphBuilder, Side};

    let mut builder = GraphBuilder::new();
    for v in original.top() {
        builder.add_left(v.clone());
    }
    for v in original.bottom() {
        builder.add_right(v.clone());
    }
    for v in d.vertex_set() {
        for w in d.heads(&v) {
            let (left, right) = match (original.side(&v), original.side(w)) {
                (Some(Side::Left), Some(Side::Right)) => (v.clone(), w.clone()),
                (Some(Side::Right), Some(Side::Left)) => (w.clone(), v.clone()),
                _ => continue,
            };
            let _ = builder.add_edge(left, right);
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::matching::hopcroft_karp;

    #[test]
    fn trimming_k22_keeps_all_edges_on_a_cycle() {
        let mut b = GraphBuilder::new();
        b.add_left('a');
        b.add_left('b');
        b.add_right('x');
        b.add_right('y');
        for l in ['a', 'b'] {
            for r in ['x', 'y'] {
                b.add_edge(l, r).unwrap();
            }
        }
        let g = b.build();
        let m = hopcroft_karp(&g);
        let d = crate::directed::build(&g, &m);
        let trimmed = trim_to_sccs(&d);
        // K2,2 is one 4-cycle in the directed matching graph; every edge
        // should survive trimming.
        assert_eq!(trimmed.arc_count(), d.arc_count());
        let reduced = undirected_projection(&trimmed, &g);
        assert_eq!(reduced.edge_count(), g.edge_count());
    }

    #[test]
    fn trimming_path_removes_dead_ends() {
        // l0-r0-l1-r1: no cycle exists, so every arc should be trimmed away.
        let mut b = GraphBuilder::new();
        b.add_left("l0");
        b.add_left("l1");
        b.add_right("r0");
        b.add_right("r1");
        b.add_edge("l0", "r0").unwrap();
        b.add_edge("l1", "r0").unwrap();
        b.add_edge("l1", "r1").unwrap();
        let g = b.build();
        let m = hopcroft_karp(&g);
        let d = crate::directed::build(&g, &m);
        let trimmed = trim_to_sccs(&d);
        assert_eq!(trimmed.arc_count(), 0);
    }
}
