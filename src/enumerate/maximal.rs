//! `enum_maximal` (spec §4.8): every maximal (inclusion-wise) matching of a
//! bipartite graph, built on `enum_maximum` and a vertex-degree case split.
//! Not present in `original_source` — the Python reference only implements
//! the perfect and maximum cases — so this module follows spec.md's
//! procedure directly, in the same explicit-stack idiom as its siblings.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::graph::{BipartiteGraph, GraphBuilder, Side};
use crate::matching::{hopcroft_karp, Matching};

use super::{enum_maximum, MaximumMatchings};

enum Frame<V: Clone + Eq + Hash> {
    /// A graph whose maximal matchings still need to be enumerated, each
    /// combined with `prefix` before being yielded.
    Pending {
        graph: BipartiteGraph<V>,
        prefix: Matching<V>,
    },
    /// Draws maximum matchings of the high-degree vertex's neighborhood
    /// subgraph one at a time, each spawning a residual `Pending` frame.
    Combine {
        base_graph: BipartiteGraph<V>,
        prefix: Matching<V>,
        sub: MaximumMatchings<V>,
    },
}

/// Lazy, duplicate-free sequence of every maximal matching of the graph
/// `enum_maximal` was called with.
pub struct MaximalMatchings<V: Clone + Eq + Hash> {
    stack: Vec<Frame<V>>,
}

impl<V: Clone + Eq + Hash + Ord> Iterator for MaximalMatchings<V> {
    type Item = Matching<V>;

    fn next(&mut self) -> Option<Matching<V>> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Combine {
                    base_graph,
                    prefix,
                    mut sub,
                } => {
                    if let Some(m_prime) = sub.next() {
                        let used: Vec<V> = m_prime
                            .left_vertices()
                            .cloned()
                            .chain(m_prime.right_vertices().cloned())
                            .collect();
                        let residual = base_graph.without_vertices(used);
                        let mut combined_prefix = prefix.clone();
                        for (l, r) in m_prime.pairs() {
                            combined_prefix.insert(l.clone(), r.clone());
                        }
                        self.stack.push(Frame::Combine {
                            base_graph,
                            prefix,
                            sub,
                        });
                        self.stack.push(Frame::Pending {
                            graph: residual,
                            prefix: combined_prefix,
                        });
                    }
                    // `sub` exhausted: drop this frame, nothing more to pull.
                }
                Frame::Pending { graph, prefix } => {
                    let all_low_degree = graph
                        .top()
                        .chain(graph.bottom())
                        .all(|v| graph.neighbors(v).count() <= 1);
                    if all_low_degree {
                        // Every vertex has degree <= 1: the edge set is
                        // already a matching, and the only maximal one.
                        let mut combined = prefix;
                        for (l, r) in graph.edges() {
                            combined.insert(l, r);
                        }
                        return Some(combined);
                    }

                    let v = graph
                        .top()
                        .chain(graph.bottom())
                        .filter(|v| graph.neighbors(v).count() >= 2)
                        .min()
                        .expect("a degree>=2 vertex must exist once the low-degree case is ruled out")
                        .clone();
                    let side_v = graph.side(&v);
                    let neighbors: IndexSet<V> = graph.neighbors(&v).cloned().collect();

                    let g_prime = induced_by_neighbors_excluding(&graph, &v, &neighbors);
                    let max_in_g_prime = hopcroft_karp(&g_prime);
                    if max_in_g_prime.len() == neighbors.len() {
                        self.stack.push(Frame::Combine {
                            base_graph: graph.clone(),
                            prefix: prefix.clone(),
                            sub: enum_maximum(g_prime),
                        });
                    }

                    // Push in reverse so neighbors pop back off in their
                    // own deterministic (insertion) order.
                    for w in neighbors.iter().rev() {
                        let (l, r) = match side_v {
                            Some(Side::Left) => (v.clone(), w.clone()),
                            Some(Side::Right) => (w.clone(), v.clone()),
                            None => unreachable!("v was drawn from graph's own vertex set"),
                        };
                        let remaining = graph.without_edge_endpoints(&l, &r);
                        let mut child_prefix = prefix.clone();
                        child_prefix.insert(l, r);
                        self.stack.push(Frame::Pending {
                            graph: remaining,
                            prefix: child_prefix,
                        });
                    }
                }
            }
        }
        None
    }
}

/// Builds the subgraph induced by the edges incident to `neighbors`,
/// excluding any edge that touches `excluded` — spec §4.8 step 4's `G'`.
fn induced_by_neighbors_excluding<V: Clone + Eq + Hash>(
    graph: &BipartiteGraph<V>,
    excluded: &V,
    neighbors: &IndexSet<V>,
) -> BipartiteGraph<V> {
    let mut left_verts: IndexSet<V> = IndexSet::new();
    let mut right_verts: IndexSet<V> = IndexSet::new();
    for n in neighbors {
        match graph.side(n) {
            Some(Side::Left) => {
                left_verts.insert(n.clone());
            }
            Some(Side::Right) => {
                right_verts.insert(n.clone());
            }
            None => {}
        }
        for other in graph.neighbors(n) {
            if other == excluded {
                continue;
            }
            match graph.side(other) {
                Some(Side::Left) => {
                    left_verts.insert(other.clone());
                }
                Some(Side::Right) => {
                    right_verts.insert(other.clone());
                }
                None => {}
            }
        }
    }

    let mut builder = GraphBuilder::new();
    for l in &left_verts {
        builder.add_left(l.clone());
    }
    for r in &right_verts {
        builder.add_right(r.clone());
    }
    for n in neighbors {
        for other in graph.neighbors(n) {
            if other == excluded {
                continue;
            }
            let (l, r) = match graph.side(n) {
                Some(Side::Left) => (n.clone(), other.clone()),
                Some(Side::Right) => (other.clone(), n.clone()),
                _ => continue,
            };
            let _ = builder.add_edge(l, r);
        }
    }
    builder.build()
}

/// Enumerates every maximal matching of `graph`, lazily and without
/// duplicates (spec §4.8). `V: Ord` is required here (and nowhere else in
/// the crate) to make the "smallest id" vertex choice in step 2
/// deterministic.
pub fn enum_maximal<V: Clone + Eq + Hash + Ord>(graph: BipartiteGraph<V>) -> MaximalMatchings<V> {
    MaximalMatchings {
        stack: vec![Frame::Pending {
            graph,
            prefix: Matching::new(),
        }],
    }
}
