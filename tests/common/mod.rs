//! Brute-force oracles for completeness checks, grounded on
//! `examples/original_source/py_bipartite_matching/brute_force_bipartite_matching.py`.
//! Test-only per spec.md §1 ("ancillary utilities ... used only for
//! cross-checking in tests") — never linked into `src/`.

#![allow(dead_code)]

use std::collections::HashSet;
use std::hash::Hash;

use bipartite_enum::{BipartiteGraph, Matching};

/// Every perfect matching of `graph`, as sorted `(left, right)` pair lists,
/// found by taking the Cartesian product of each LEFT vertex's neighbor
/// list and keeping only the injective choices — a direct translation of
/// `brute_force_enum_perfect_matchings`'s `itertools.product` loop.
///
/// Returns plain pair lists rather than `Matching<V>`: the crate's own
/// `Matching` has no public constructor (it is only ever produced by
/// `hopcroft_karp` or the enumeration engine), same as
/// `examples/petgraph-petgraph/src/matching.rs`'s own `Matching<G>`.
pub fn brute_force_perfect<V: Clone + Eq + Hash + Ord>(graph: &BipartiteGraph<V>) -> Vec<Vec<(V, V)>> {
    let lefts: Vec<V> = graph.top().cloned().collect();
    if lefts.is_empty() || lefts.len() != graph.bottom().count() {
        return Vec::new();
    }
    let neighbor_lists: Vec<Vec<V>> = lefts.iter().map(|l| graph.neighbors(l).cloned().collect()).collect();

    let mut out = Vec::new();
    let mut choice = vec![0usize; lefts.len()];
    'outer: loop {
        if neighbor_lists.iter().any(|n| n.is_empty()) {
            break;
        }
        let values: Vec<&V> = choice.iter().zip(&neighbor_lists).map(|(&i, n)| &n[i]).collect();
        let distinct: HashSet<&V> = values.iter().copied().collect();
        if distinct.len() == values.len() {
            let mut pairs: Vec<(V, V)> = lefts.iter().cloned().zip(values.iter().map(|v| (*v).clone())).collect();
            pairs.sort();
            out.push(pairs);
        }

        // Odometer-style increment over `choice`.
        let mut i = 0;
        loop {
            if i == choice.len() {
                break 'outer;
            }
            choice[i] += 1;
            if choice[i] < neighbor_lists[i].len() {
                break;
            }
            choice[i] = 0;
            i += 1;
        }
    }
    out
}

/// Every maximum-cardinality matching of `graph`, as sorted `(left, right)`
/// pair lists, found by taking every `matching_len`-sized combination of
/// edges and keeping the vertex-disjoint ones — a direct translation of
/// `brute_force_enum_maximum_matchings`'s `itertools.combinations` loop.
/// `matching_len` is the size of one maximum matching, computed by the
/// caller via `bipartite_enum`'s own Hopcroft–Karp matcher.
pub fn brute_force_maximum<V: Clone + Eq + Hash + Ord>(graph: &BipartiteGraph<V>, matching_len: usize) -> Vec<Vec<(V, V)>> {
    if matching_len == 0 {
        return Vec::new();
    }
    let edges: Vec<(V, V)> = graph.edges().collect();
    let mut out = Vec::new();
    for combo in combinations(&edges, matching_len) {
        let lefts: HashSet<&V> = combo.iter().map(|(l, _)| l).collect();
        if lefts.len() < matching_len {
            continue;
        }
        let rights: HashSet<&V> = combo.iter().map(|(_, r)| r).collect();
        if rights.len() < matching_len {
            continue;
        }
        let mut pairs = combo;
        pairs.sort();
        out.push(pairs);
    }
    out
}

/// Every `k`-element combination of `items`, in index order (not
/// insertion-position order of repeats, since `items` is itself a `Vec`
/// with no duplicates among bipartite edges).
fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }
    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    if k == 0 {
        return vec![Vec::new()];
    }
    loop {
        result.push(indices.iter().map(|&i| items[i].clone()).collect());

        let mut i = k;
        loop {
            if i == 0 {
                return result;
            }
            i -= 1;
            if indices[i] != i + n - k {
                break;
            }
            if i == 0 {
                return result;
            }
        }
        indices[i] += 1;
        for j in (i + 1)..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Sorts and collects a matching's pairs for order-independent comparison.
pub fn sorted_pairs<V: Clone + Eq + Hash + Ord>(m: &Matching<V>) -> Vec<(V, V)> {
    let mut pairs: Vec<(V, V)> = m.pairs().map(|(l, r)| (l.clone(), r.clone())).collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use bipartite_enum::GraphBuilder;

    #[test]
    fn combinations_of_three_choose_two() {
        let items = vec![1, 2, 3];
        let combos = combinations(&items, 2);
        assert_eq!(combos, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
    }

    #[test]
    fn brute_force_perfect_matches_k22() {
        let mut b = GraphBuilder::new();
        b.add_left(0);
        b.add_left(1);
        b.add_right(100);
        b.add_right(101);
        for i in [0, 1] {
            for j in [100, 101] {
                b.add_edge(i, j).unwrap();
            }
        }
        let g = b.build();
        let matchings = brute_force_perfect(&g);
        assert_eq!(matchings.len(), 2);
    }
}
