// src/store.rs
//! The graph store: canonical owner of the live node list.
//!
//! Everything here is synchronous and single-threaded. The cycler and the
//! propagation engine are pure functions; the store is the only place the
//! live list is replaced.

use crate::cycle::next_status;
use crate::propagate::propagate;
use crate::types::Node;

/// Owns the seed snapshot, the live node list, and the simulation-mode
/// gate. Clicks only take effect while simulation mode is on.
#[derive(Debug, Clone)]
pub struct GraphStore {
    seed: Vec<Node>,
    nodes: Vec<Node>,
    simulation: bool,
}

impl GraphStore {
    /// Builds a store from seed data. The live set starts as a deep copy
    /// of the seed; no propagation runs until the first click, so a fresh
    /// store always exposes the seed exactly as authored.
    #[must_use]
    pub fn new(seed: Vec<Node>) -> Self {
        let nodes = seed.clone();
        Self {
            seed,
            nodes,
            simulation: true,
        }
    }

    /// The stabilized node list, for the host to render.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn simulation(&self) -> bool {
        self.simulation
    }

    pub fn set_simulation(&mut self, on: bool) {
        self.simulation = on;
    }

    pub fn toggle_simulation(&mut self) {
        self.simulation = !self.simulation;
    }

    /// Restores the live set to a fresh copy of the original seed.
    pub fn reset(&mut self) {
        self.nodes = self.seed.clone();
    }

    /// Applies a click: cycles the named node's status, then propagates
    /// derived statuses to a fixed point.
    ///
    /// Silent no-op when simulation mode is off or the id is unknown; a
    /// click on a locked node cycles to itself, so the propagation that
    /// follows changes nothing.
    pub fn apply_click(&mut self, node_id: &str) {
        if !self.simulation {
            return;
        }

        let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
            return;
        };
        node.status = next_status(node.status);

        propagate(&mut self.nodes);
    }
}
