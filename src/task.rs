//! Task record and its on-disk row representation.
//!
//! The backing file is CSV with the header `Name,Priority,Done`. `TaskRow`
//! is the shape the csv codec sees: both numeric columns are base-10
//! integers, so a non-integer value fails deserialization and aborts the
//! load. `Task` is the in-memory shape with a real boolean.

use serde::{Deserialize, Serialize};

/// A single task in the store.
///
/// `name` acts as the unique identifier within the store: adding or
/// completing a task with an existing name displaces the prior entry.
/// Lower `priority` means higher precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub priority: i64,
    pub done: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, priority: i64, done: bool) -> Self {
        Self {
            name: name.into(),
            priority,
            done,
        }
    }
}

/// On-disk row for a task. Field names double as the CSV header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Done")]
    pub done: i64,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            name: row.name,
            priority: row.priority,
            // The original format treats any nonzero value as completed.
            done: row.done != 0,
        }
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            name: task.name.clone(),
            priority: task.priority,
            done: i64::from(task.done),
        }
    }
}
