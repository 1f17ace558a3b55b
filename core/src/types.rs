//! Domain types for the task and user endpoints.
//!
//! # Design
//! `Task` is the canonical shape the todo view works with and the shape it
//! sends. What comes back from `GET /todolist` is looser: older records use
//! `name` instead of `task`, and some store completion as the string
//! `"hoan thanh"`. `TaskRecord` accepts all of those and `normalize` turns one
//! record into a `Task`, so a single malformed record is dropped instead of
//! failing the whole list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;

/// The string some backends store instead of `completed: true`.
pub const COMPLETED_LITERAL: &str = "hoan thanh";

/// Task identifier: a millisecond timestamp for client-created tasks, or
/// whatever integer the server assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, task: impl Into<String>, completed: bool) -> Self {
        Self {
            id: TaskId(id),
            task: task.into(),
            completed,
        }
    }
}

/// A task as it may appear on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub completed: Option<Value>,
}

impl TaskRecord {
    pub fn normalize(self) -> Result<Task, RecordError> {
        let id = match &self.id {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| RecordError::InvalidId(self.id.to_string()))?;

        let task = self
            .task
            .filter(|t| !t.is_empty())
            .or(self.name)
            .ok_or(RecordError::MissingName(id))?;

        let completed = match self.completed {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s == COMPLETED_LITERAL,
            _ => false,
        };

        Ok(Task {
            id: TaskId(id),
            task,
            completed,
        })
    }
}

/// A read-only user record, taken verbatim from `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Tasks shown when the initial fetch fails.
pub fn fallback_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Quet nha", false),
        Task::new(2, "giat quan ao", true),
        Task::new(3, "nau com", false),
        Task::new(4, "nấu", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> TaskRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn task_id_honors_width_and_alignment() {
        assert_eq!(format!("[{:>4}]", TaskId(1)), "[   1]");
        assert_eq!(format!("[{:<3}]", TaskId(42)), "[42 ]");
        assert_eq!(TaskId(-7).to_string(), "-7");
    }

    #[test]
    fn canonical_record_normalizes_unchanged() {
        let task = record(r#"{"id":7,"task":"Walk dog","completed":true}"#)
            .normalize()
            .unwrap();
        assert_eq!(task, Task::new(7, "Walk dog", true));
    }

    #[test]
    fn name_field_is_accepted() {
        let task = record(r#"{"id":1,"name":"Legacy"}"#).normalize().unwrap();
        assert_eq!(task.task, "Legacy");
        assert!(!task.completed);
    }

    #[test]
    fn empty_task_falls_back_to_name() {
        let task = record(r#"{"id":1,"task":"","name":"From name"}"#)
            .normalize()
            .unwrap();
        assert_eq!(task.task, "From name");
    }

    #[test]
    fn completed_string_literal_means_done() {
        let done = record(r#"{"id":1,"task":"x","completed":"hoan thanh"}"#)
            .normalize()
            .unwrap();
        assert!(done.completed);

        let other = record(r#"{"id":2,"task":"y","completed":"chua xong"}"#)
            .normalize()
            .unwrap();
        assert!(!other.completed);
    }

    #[test]
    fn non_boolean_completed_is_false() {
        let task = record(r#"{"id":1,"task":"x","completed":1}"#)
            .normalize()
            .unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn numeric_string_id_is_parsed() {
        let task = record(r#"{"id":"42","task":"x"}"#).normalize().unwrap();
        assert_eq!(task.id, TaskId(42));
    }

    #[test]
    fn bad_id_is_rejected() {
        let err = record(r#"{"id":"abc","task":"x"}"#).normalize().unwrap_err();
        assert!(matches!(err, RecordError::InvalidId(_)));

        let err = record(r#"{"task":"x"}"#).normalize().unwrap_err();
        assert!(matches!(err, RecordError::InvalidId(_)));
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = record(r#"{"id":3,"completed":true}"#).normalize().unwrap_err();
        assert_eq!(err, RecordError::MissingName(3));
    }

    #[test]
    fn task_serializes_with_canonical_fields() {
        let json = serde_json::to_value(Task::new(5, "Buy milk", false)).unwrap();
        assert_eq!(json, serde_json::json!({"id":5,"task":"Buy milk","completed":false}));
    }

    #[test]
    fn fallback_set_has_one_completed_task() {
        let tasks = fallback_tasks();
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks.iter().filter(|t| t.completed).count(), 1);
    }
}
