//! Error types for graph construction.
//!
//! Hand-rolled, no `thiserror`/`anyhow` — see `algo::Cycle`/`NegativeCycle`
//! and `acyclic::AcyclicEdgeError` elsewhere in this workspace's lineage
//! for the same shape.

use core::fmt;

/// An error raised while building a [`BipartiteGraph`](crate::graph::BipartiteGraph).
///
/// All variants are detected at construction time, before any enumeration
/// starts, per the "fail fast at the boundary" rule for invalid input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError<V> {
    /// An edge endpoint was never registered as a LEFT or RIGHT vertex.
    UnknownVertex(V),
    /// A vertex was registered on both the LEFT and RIGHT side.
    DuplicateVertex(V),
}

impl<V: fmt::Debug> fmt::Display for GraphError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(v) => {
                write!(f, "edge endpoint {:?} was never added to either side", v)
            }
            GraphError::DuplicateVertex(v) => {
                write!(f, "vertex {:?} was added to both the left and right side", v)
            }
        }
    }
}

impl<V: fmt::Debug> std::error::Error for GraphError<V> {}
