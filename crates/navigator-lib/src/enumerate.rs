//! Exhaustive enumeration of simple paths between two landmarks.
//!
//! # Scaling limit
//!
//! The number of simple paths grows exponentially with graph density. The
//! enumerator is meant for campus-sized graphs (tens of nodes, sparse
//! connections). Graphs above [`ENUMERATION_NODE_CEILING`] nodes still run but
//! log a warning, and callers should expect long runtimes on dense inputs.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Node count above which enumeration is considered outside its design range.
pub const ENUMERATION_NODE_CEILING: usize = 64;

/// Every simple path from `source` to `destination`, in exploration order.
///
/// Exploration is an iterative depth-first search. Each frontier entry owns
/// the path that led to it, so sibling branches never share visited state.
/// A branch only extends to neighbours not already on its own path, which
/// bounds every branch by the node count and guarantees termination.
///
/// An empty result means the two nodes are disconnected; callers that need an
/// explicit signal should use the routing layer, which maps it to
/// [`Error::Unreachable`].
pub fn all_simple_paths(graph: &Graph, source: &Node, destination: &Node) -> Result<Vec<Vec<Node>>> {
    for node in [source, destination] {
        if !graph.contains(node) {
            return Err(Error::UnknownNode {
                name: node.name().to_string(),
                suggestions: Vec::new(),
            });
        }
    }

    if graph.len() > ENUMERATION_NODE_CEILING {
        warn!(
            nodes = graph.len(),
            ceiling = ENUMERATION_NODE_CEILING,
            "enumerating simple paths on a graph above the supported size"
        );
    }

    if source == destination {
        return Ok(vec![vec![source.clone()]]);
    }

    let mut paths = Vec::new();
    let mut stack: Vec<(Node, Vec<Node>)> = vec![(source.clone(), Vec::new())];

    while let Some((current, mut path)) = stack.pop() {
        path.push(current.clone());
        if &current == destination {
            paths.push(path);
            continue;
        }

        for neighbour in graph.neighbors(&current)? {
            if !path.contains(neighbour) {
                stack.push((neighbour.clone(), path.clone()));
            }
        }
    }

    debug!(
        source = %source,
        destination = %destination,
        paths = paths.len(),
        "enumerated simple paths"
    );
    Ok(paths)
}
