// src/types.rs
//! Common data structures for the prerequisite graph.

use serde::{Deserialize, Serialize};

/// Completion state of a course node. Closed set; propagation and the
/// manual cycle never produce anything outside these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Passed. Satisfies child prerequisites.
    Done,
    /// Currently being taken. Does not yet satisfy children.
    Enrolled,
    /// Taken and not passed. Blocks children.
    Failed,
    /// Prerequisites unmet. Derived state, never manually authored past seed.
    Locked,
    /// Prerequisites met, not yet taken.
    Available,
}

impl Status {
    /// Label shown next to the badge in console output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Enrolled => "enrolled",
            Self::Failed => "failed",
            Self::Locked => "locked",
            Self::Available => "available",
        }
    }

    /// True if this status satisfies a child's prerequisite.
    #[must_use]
    pub fn satisfies(self) -> bool {
        self == Self::Done
    }

    /// True if this status blocks children outright.
    #[must_use]
    pub fn blocks(self) -> bool {
        matches!(self, Self::Failed | Self::Locked)
    }
}

/// Layout coordinates for rendering. Presentation-only: carried through
/// every operation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A course (or requirement unit) in the prerequisite graph.
///
/// `depends_on` names parent node ids and is fixed at construction time;
/// only `status` is ever mutated after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub status: Status,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    #[must_use]
    pub fn new(id: &str, label: &str, status: Status, depends_on: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            status,
            depends_on: depends_on.iter().map(ToString::to_string).collect(),
            position: Position::default(),
        }
    }

    /// A root has no declared prerequisites. Roots are never auto-mutated
    /// by propagation; only a direct click changes them.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}
