// src/propagate.rs
//! Fixed-point propagation of derived statuses.
//!
//! After any manual edit, every non-root node's status is recomputed from
//! its direct parents, and the pass repeats until a full pass changes
//! nothing. A change in one node can cascade to its children, so a single
//! pass is not enough on deep chains.

use std::collections::HashMap;

use crate::types::{Node, Status};

/// Runs propagation passes until the graph reaches a fixed point.
///
/// Passes are capped at the node count: on a DAG the longest possible
/// cascade is the longest dependency chain, so the cap only bites if seed
/// edits introduce an accidental cycle. The DAG invariant is assumed, not
/// verified.
///
/// Returns the number of passes run. Intermediate per-pass states are not
/// observable; only the stabilized set is a contract.
pub fn propagate(nodes: &mut [Node]) -> usize {
    let cap = nodes.len().max(1);
    let mut passes = 0;

    while passes < cap {
        passes += 1;
        if !pass_once(nodes) {
            break;
        }
    }

    passes
}

/// One full pass. New statuses are derived from a snapshot taken at pass
/// start, so order of iteration within the pass cannot affect the result.
fn pass_once(nodes: &mut [Node]) -> bool {
    let statuses: HashMap<String, Status> = nodes
        .iter()
        .map(|n| (n.id.clone(), n.status))
        .collect();

    let mut changed = false;
    for node in nodes.iter_mut() {
        if node.is_root() {
            continue;
        }
        let next = derive_status(node, &statuses);
        if next != node.status {
            node.status = next;
            changed = true;
        }
    }
    changed
}

/// Derived status of one node given its parents' statuses.
///
/// Parent ids that resolve to no node are ignored, as if the edge did not
/// exist. A node whose parents all fail to resolve therefore falls into
/// the all-satisfied branch.
fn derive_status(node: &Node, statuses: &HashMap<String, Status>) -> Status {
    let parents: Vec<Status> = node
        .depends_on
        .iter()
        .filter_map(|id| statuses.get(id).copied())
        .collect();

    if parents.iter().any(|p| p.blocks()) {
        // A failed or locked parent locks the child, overriding anything
        // the student set manually.
        return Status::Locked;
    }

    if parents.iter().all(|p| p.satisfies()) {
        if node.status == Status::Locked {
            return Status::Available;
        }
        // A node the student already acted on keeps its manual status as
        // long as parents remain satisfied.
        return node.status;
    }

    // Parents are a mix of non-blocking but not all done (e.g. enrolled).
    // Only `available` reverts to locked here; enrolled/done/failed keep
    // their manual status. Intentional asymmetry.
    if node.status == Status::Available {
        return Status::Locked;
    }
    node.status
}
