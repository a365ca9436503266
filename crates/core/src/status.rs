//! Action status labels.
//!
//! Transition rules live in the database. This module only maps the labels
//! the clients send (including the older `not_started`/`in_progress`
//! spelling) onto the three states the store understands.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Todo,
    Doing,
    Done,
}

/// Labels accepted from clients, in the order they are listed in errors.
pub const ACCEPTED_ACTION_STATUSES: &[&str] = &[
    "todo",
    "doing",
    "done",
    "not_started",
    "in_progress",
    "completed",
];

impl ActionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionStatus::Todo => "todo",
            ActionStatus::Doing => "doing",
            ActionStatus::Done => "done",
        }
    }

    /// Parse a client-supplied label. Case and surrounding whitespace are ignored.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::from_label(raw).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown status '{raw}'. Valid statuses: {}",
                ACCEPTED_ACTION_STATUSES.join(", ")
            ))
        })
    }

    /// Read a status stored in the database. Unknown labels count as `Todo`.
    pub fn from_stored(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or(ActionStatus::Todo)
    }

    fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "todo" | "not_started" => Some(ActionStatus::Todo),
            "doing" | "in_progress" => Some(ActionStatus::Doing),
            "done" | "completed" => Some(ActionStatus::Done),
            _ => None,
        }
    }
}
