//! `enum_perfect` (spec §4.6): every perfect matching of a bipartite graph,
//! lazily and without duplicates.

use std::hash::Hash;

use crate::directed;
use crate::graph::BipartiteGraph;
use crate::matching::{hopcroft_karp, Matching};

use super::{flip_along_cycle, normalize_left_start, reduce_via_scc};

struct Frame<V: Clone + Eq + Hash> {
    graph: BipartiteGraph<V>,
    matching: Matching<V>,
}

/// Lazy, duplicate-free sequence of every perfect matching of the graph
/// `enum_perfect` was called with. Consuming it one element at a time never
/// materializes the whole sequence.
pub struct PerfectMatchings<V: Clone + Eq + Hash> {
    stack: Vec<Frame<V>>,
    seed: Option<Matching<V>>,
}

impl<V: Clone + Eq + Hash> Iterator for PerfectMatchings<V> {
    type Item = Matching<V>;

    fn next(&mut self) -> Option<Matching<V>> {
        if let Some(seed) = self.seed.take() {
            return Some(seed);
        }
        while let Some(frame) = self.stack.pop() {
            if frame.graph.edge_count() == 0 {
                continue;
            }
            let d = directed::build(&frame.graph, &frame.matching);
            let cycle = match directed::find_alternating_cycle(&d, &frame.matching) {
                Some(c) => c,
                None => continue,
            };
            let cycle = normalize_left_start(cycle, &frame.graph);
            let left0 = cycle[0].clone();
            let right0 = cycle[1].clone();
            let matching_prime = flip_along_cycle(&frame.matching, &cycle);

            // G ⊖ e: delete e's endpoints, keep the old matching M.
            let g_plus = frame.graph.without_edge_endpoints(&left0, &right0);
            let g_plus = reduce_via_scc(&g_plus, &frame.matching);

            // G \ e: delete only e, switch to the new matching M'.
            let g_minus = frame.graph.without_edge(&left0, &right0);
            let g_minus = reduce_via_scc(&g_minus, &matching_prime);

            // Push in reverse recursion order: the G⊖e branch (old M) runs
            // to completion before the G\e branch (new M') starts, matching
            // the original procedure's `yield from` ordering.
            self.stack.push(Frame {
                graph: g_minus,
                matching: matching_prime.clone(),
            });
            self.stack.push(Frame {
                graph: g_plus,
                matching: frame.matching,
            });
            return Some(matching_prime);
        }
        None
    }
}

/// Enumerates every perfect matching of `graph`, lazily and without
/// duplicates (spec §4.6). Empty if `|LEFT| != |RIGHT|` or `graph` has no
/// perfect matching at all.
pub fn enum_perfect<V: Clone + Eq + Hash>(graph: BipartiteGraph<V>) -> PerfectMatchings<V> {
    if !graph.sides_equal_size() {
        return PerfectMatchings {
            stack: Vec::new(),
            seed: None,
        };
    }
    let size = graph.top().count();
    let matching = hopcroft_karp(&graph);
    if matching.len() < size {
        return PerfectMatchings {
            stack: Vec::new(),
            seed: None,
        };
    }
    let reduced = reduce_via_scc(&graph, &matching);
    PerfectMatchings {
        stack: vec![Frame {
            graph: reduced,
            matching: matching.clone(),
        }],
        seed: Some(matching),
    }
}
