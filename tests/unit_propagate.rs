// tests/unit_propagate.rs
//! Fixed-point properties of the propagation engine.

use coursetree_core::propagate::propagate;
use coursetree_core::types::{Node, Status};

fn node(id: &str, status: Status, deps: &[&str]) -> Node {
    Node::new(id, id, status, deps)
}

fn status_of(nodes: &[Node], id: &str) -> Status {
    nodes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.status)
        .unwrap_or_else(|| panic!("no node {id}"))
}

#[test]
fn test_propagation_is_idempotent() {
    let mut nodes = vec![
        node("a", Status::Failed, &[]),
        node("b", Status::Enrolled, &["a"]),
        node("c", Status::Available, &["b"]),
        node("d", Status::Locked, &["c", "a"]),
    ];
    propagate(&mut nodes);
    let stabilized = nodes.clone();

    let passes = propagate(&mut nodes);
    assert_eq!(nodes, stabilized, "Second run must change nothing");
    assert_eq!(passes, 1, "Second run must stop after one clean pass");
}

#[test]
fn test_lock_dominance_overrides_manual_status() {
    // A manually set done/enrolled is overridden by a blocking parent.
    for manual in [Status::Done, Status::Enrolled, Status::Available] {
        let mut nodes = vec![
            node("a", Status::Failed, &[]),
            node("b", manual, &["a"]),
        ];
        propagate(&mut nodes);
        assert_eq!(
            status_of(&nodes, "b"),
            Status::Locked,
            "{} child of failed parent must lock",
            manual.label()
        );
    }
}

#[test]
fn test_unlock_requires_all_parents_done() {
    let mut nodes = vec![
        node("a", Status::Done, &[]),
        node("b", Status::Enrolled, &[]),
        node("c", Status::Locked, &["a", "b"]),
    ];
    propagate(&mut nodes);
    assert_eq!(status_of(&nodes, "c"), Status::Locked, "One enrolled parent keeps the lock");

    let mut nodes = vec![
        node("a", Status::Done, &[]),
        node("b", Status::Done, &[]),
        node("c", Status::Locked, &["a", "b"]),
    ];
    propagate(&mut nodes);
    assert_eq!(status_of(&nodes, "c"), Status::Available);
}

#[test]
fn test_unlock_does_not_cascade() {
    // Available does not satisfy prerequisites, so unlocking b must not
    // unlock its child c in the same stabilization.
    let mut nodes = vec![
        node("a", Status::Done, &[]),
        node("b", Status::Locked, &["a"]),
        node("c", Status::Locked, &["b"]),
    ];
    propagate(&mut nodes);
    assert_eq!(status_of(&nodes, "b"), Status::Available);
    assert_eq!(status_of(&nodes, "c"), Status::Locked);
}

#[test]
fn test_roots_untouched_regardless_of_status() {
    for status in [
        Status::Done,
        Status::Enrolled,
        Status::Failed,
        Status::Locked,
        Status::Available,
    ] {
        let mut nodes = vec![node("root", status, &[])];
        propagate(&mut nodes);
        assert_eq!(status_of(&nodes, "root"), status);
    }
}

#[test]
fn test_manual_statuses_survive_mixed_parents() {
    // Parents not all done, none blocking: only available reverts.
    for manual in [Status::Done, Status::Enrolled, Status::Failed] {
        let mut nodes = vec![
            node("a", Status::Enrolled, &[]),
            node("b", manual, &["a"]),
        ];
        propagate(&mut nodes);
        assert_eq!(status_of(&nodes, "b"), manual);
    }
}

#[test]
fn test_diamond_locks_through_both_arms() {
    // a feeds b and c, which both feed d. Failing a must lock all three.
    let mut nodes = vec![
        node("a", Status::Failed, &[]),
        node("b", Status::Done, &["a"]),
        node("c", Status::Enrolled, &["a"]),
        node("d", Status::Available, &["b", "c"]),
    ];
    propagate(&mut nodes);
    assert_eq!(status_of(&nodes, "b"), Status::Locked);
    assert_eq!(status_of(&nodes, "c"), Status::Locked);
    assert_eq!(status_of(&nodes, "d"), Status::Locked);
}

#[test]
fn test_positions_and_edges_untouched() {
    let mut nodes = vec![
        node("a", Status::Failed, &[]),
        node("b", Status::Done, &["a"]),
    ];
    nodes[1].position.x = 42.0;
    let edges_before: Vec<Vec<String>> = nodes.iter().map(|n| n.depends_on.clone()).collect();

    propagate(&mut nodes);

    let edges_after: Vec<Vec<String>> = nodes.iter().map(|n| n.depends_on.clone()).collect();
    assert_eq!(edges_before, edges_after, "Propagation must never touch topology");
    assert_eq!(nodes[1].position.x, 42.0);
}
