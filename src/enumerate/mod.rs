//! Enumeration Engine (spec §4.6–§4.8): Uno's 1997 algorithm for
//! enumerating perfect and maximum matchings, plus the degree-case-analysis
//! extension to maximal matchings.
//!
//! Each public function returns a type implementing `Iterator<Item =
//! Matching<V>>`. None of them use native recursion for the lazy part of
//! the walk — like `crate::scc`'s Tarjan pass, each iterator holds an
//! explicit stack of pending frames and expands one frame per `next()`
//! call, in the same non-recursive spirit as
//! `examples/petgraph-petgraph/src/visit/traversal.rs`'s `Dfs`.

mod maximal;
mod maximum;
mod perfect;

pub use maximal::{enum_maximal, MaximalMatchings};
pub use maximum::{enum_maximum, MaximumMatchings};
pub use perfect::{enum_perfect, PerfectMatchings};

use std::hash::Hash;

use crate::directed;
use crate::graph::{BipartiteGraph, Side};
use crate::matching::Matching;
use crate::scc;

/// Builds `D(G, M)`, trims it to its SCCs, and projects the result back to
/// an undirected graph — the "directed+trim" step both `enum_perfect` and
/// `enum_maximum` apply before every recursive call.
fn reduce_via_scc<V: Clone + Eq + Hash>(graph: &BipartiteGraph<V>, matching: &Matching<V>) -> BipartiteGraph<V> {
    let d = directed::build(graph, matching);
    let trimmed = scc::trim_to_sccs(&d);
    scc::undirected_projection(&trimmed, graph)
}

/// Rotates a raw cycle so it begins at a LEFT vertex, per spec §4.6's
/// normalization rule. The cycle returned by `find_alternating_cycle`
/// always starts at either `left` or `right` of the removed matched pair,
/// so at most one rotation is ever needed.
fn normalize_left_start<V: Clone + Eq + Hash>(mut cycle: Vec<V>, graph: &BipartiteGraph<V>) -> Vec<V> {
    if graph.side(&cycle[0]) != Some(Side::Left) {
        let first = cycle.remove(0);
        cycle.push(first);
    }
    cycle
}

/// Flips a matching along a LEFT-normalized alternating cycle `C = (ℓ₀, r₀,
/// ℓ₁, r₁, …, ℓ_{k-1}, r_{k-1})`, reassigning each `ℓ_i` to `r_i`.
///
/// spec §4.6 writes this step as `ℓ_i ↦ r_{(i-1) mod k}`, which is the
/// correct formula only under the orientation where a matched edge is the
/// *consecutive* cycle pair `(ℓ_i, r_i)` — the convention
/// `original_source`'s `matching/bipartite.py` `DirectedMatchGraph` uses
/// (matched `ℓ→r`). `directed::build` instead follows spec §3's orientation
/// literally (matched `r→ℓ`, unmatched `ℓ→r`), under which
/// `find_alternating_cycle`'s DFS walks out of each `ℓ_i` along its
/// *unmatched* arc, so the consecutive pair `(ℓ_i, r_i)` in the returned
/// path is the unmatched edge, and the matched one is `(ℓ_{i+1 mod k},
/// r_i)`. Flipping under that orientation therefore means turning every
/// *unmatched* consecutive pair into a matched one: `ℓ_i ↦ r_i`, with no
/// index shift. Using spec's shifted formula here would reconstruct the old
/// matching exactly (a silent no-op); see DESIGN.md Open Question 2.
fn flip_along_cycle<V: Clone + Eq + Hash>(matching: &Matching<V>, cycle: &[V]) -> Matching<V> {
    let k = cycle.len() / 2;
    let mut flipped = matching.clone();
    for i in 0..k {
        let left_i = cycle[2 * i].clone();
        let right_i = cycle[2 * i + 1].clone();
        flipped.insert(left_i, right_i);
    }
    flipped
}
