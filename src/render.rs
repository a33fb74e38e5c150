// src/render.rs
//! Console rendering of the node list: status-colored badges with their
//! prerequisite edges, plus a one-line summary.

use colored::Colorize;

use crate::types::{Node, Status};

/// Prints the full graph to stdout.
pub fn print_graph(nodes: &[Node], plain: bool) {
    for node in nodes {
        println!("{}", badge_line(node, plain));
        if !node.depends_on.is_empty() {
            let parents = node.depends_on.join(", ");
            if plain {
                println!("  --> requires {parents}");
            } else {
                println!("  {} requires {}", "-->".blue(), parents.dimmed());
            }
        }
    }
    println!();
    println!("{}", summary_line(nodes));
}

/// One badge line: `[status]  id  label`.
#[must_use]
pub fn badge_line(node: &Node, plain: bool) -> String {
    let badge = format!("[{}]", node.status.label());
    let line = format!("{badge:<12} {:<10} {}", node.id, node.label);

    if plain {
        return line;
    }

    match node.status {
        Status::Done => line.green().bold().to_string(),
        Status::Enrolled => line.cyan().to_string(),
        Status::Failed => line.red().bold().to_string(),
        Status::Available => line.yellow().to_string(),
        Status::Locked => line.dimmed().to_string(),
    }
}

/// Count summary, e.g. `7 courses: 2 done, 1 enrolled, 1 failed, ...`.
#[must_use]
pub fn summary_line(nodes: &[Node]) -> String {
    let count = |s: Status| nodes.iter().filter(|n| n.status == s).count();
    format!(
        "{} courses: {} done, {} enrolled, {} failed, {} available, {} locked",
        nodes.len(),
        count(Status::Done),
        count(Status::Enrolled),
        count(Status::Failed),
        count(Status::Available),
        count(Status::Locked),
    )
}
