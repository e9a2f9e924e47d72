/*!
`bipartite-enum` enumerates perfect, maximum, and maximal matchings of a
bipartite graph, one at a time, without ever materializing the whole
sequence up front.

# Overview

Build a graph with [`GraphBuilder`](graph::GraphBuilder), then hand it to
one of the three enumeration entry points:

```
use bipartite_enum::GraphBuilder;
use bipartite_enum::enum_perfect;

let mut builder = GraphBuilder::new();
builder.add_left("a");
builder.add_left("b");
builder.add_right("x");
builder.add_right("y");
builder.add_edge("a", "x").unwrap();
builder.add_edge("a", "y").unwrap();
builder.add_edge("b", "x").unwrap();
builder.add_edge("b", "y").unwrap();
let graph = builder.build();

let matchings: Vec<_> = enum_perfect(graph).collect();
assert_eq!(matchings.len(), 2);
```

`enum_maximum` and `enum_maximal` follow the same shape: take a
[`BipartiteGraph`](graph::BipartiteGraph) by value, return an [`Iterator`]
of [`Matching`](matching::Matching)s.

# How it works

The engine is Takeaki Uno's 1997 algorithm for enumerating all perfect and
maximum matchings of a bipartite graph in polynomial delay, built on two
layers beneath it:

- [`matching::hopcroft_karp`] finds one maximum-cardinality matching in
  `O(E·√V)`.
- [`directed`] orients a graph by matching membership into `D(G, M)` and
  finds alternating cycles in it; [`scc`] trims `D(G, M)` down to the arcs
  that lie on some cycle, bounding the work wasted between successive
  outputs.

`enum_maximal` is built on top of `enum_maximum` and a vertex-degree case
split, rather than being part of Uno's original algorithm.

Every enumeration sequence is driven by an explicit stack of pending work
rather than native call-stack recursion, so depth is bounded by heap
allocation rather than the platform's stack size.
*/

mod directed;
pub mod enumerate;
mod error;
pub mod graph;
pub mod matching;
mod scc;

pub use enumerate::{enum_maximal, enum_maximum, enum_perfect, MaximalMatchings, MaximumMatchings, PerfectMatchings};
pub use error::GraphError;
pub use graph::{BipartiteGraph, GraphBuilder};
pub use matching::Matching;
