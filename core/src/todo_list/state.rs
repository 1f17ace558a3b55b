use std::collections::VecDeque;
use std::str::FromStr;

use thiserror::Error;

use crate::client::TodoClient;
use crate::config::Timings;
use crate::effect::{Ticket, TicketCounter};
use crate::error::ValidationError;
use crate::types::{Task, TaskId};

/// Which tasks are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter {0:?} (expected all, active or completed)")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

/// Banner shown until its dismiss timer fires or a newer alert replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub(super) ticket: Ticket,
}

/// Open delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteModal {
    Single { id: TaskId, task_name: String },
    Completed,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    Idle,
    Loading { settle: Option<Ticket> },
    Ready,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BatchScope {
    Completed,
    All,
}

#[derive(Debug, Clone)]
pub(super) struct Batch {
    pub(super) scope: BatchScope,
    pub(super) current: TaskId,
    pub(super) remaining: VecDeque<TaskId>,
    pub(super) deleted: Vec<TaskId>,
}

/// What the outstanding request is for.
#[derive(Debug, Clone)]
pub(super) enum Pending {
    Fetch,
    Add(Task),
    Toggle(Task),
    Edit(Task),
    DeleteOne(TaskId),
    DeleteBatch(Batch),
}

#[derive(Debug, Clone)]
pub(super) struct InFlight {
    pub(super) ticket: Ticket,
    pub(super) op: Pending,
}

/// Complete state of the todo view.
#[derive(Debug, Clone)]
pub struct TodoList {
    pub(super) client: TodoClient,
    pub(super) timings: Timings,
    pub(super) tickets: TicketCounter,
    pub(super) phase: Phase,
    pub(super) tasks: Vec<Task>,
    pub(super) draft: String,
    pub(super) filter: Filter,
    pub(super) alert: Option<Alert>,
    pub(super) delete_modal: Option<DeleteModal>,
    pub(super) editing: Option<Task>,
    pub(super) in_flight: Option<InFlight>,
}

impl TodoList {
    pub fn new(client: TodoClient, timings: Timings) -> Self {
        Self {
            client,
            timings,
            tickets: TicketCounter::default(),
            phase: Phase::Idle,
            tasks: Vec::new(),
            draft: String::new(),
            filter: Filter::All,
            alert: None,
            delete_modal: None,
            editing: None,
            in_flight: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn delete_modal(&self) -> Option<&DeleteModal> {
        self.delete_modal.as_ref()
    }

    /// The task in the edit modal, with its in-progress name.
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading { .. })
    }

    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    pub fn count(&self, filter: Filter) -> usize {
        self.tasks.iter().filter(|t| filter.matches(t)).count()
    }

    pub(super) fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(super) fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// `now_ms` unless a task already uses it, then one past the largest id.
    /// When that would overflow, the smallest unused positive id.
    pub(super) fn fresh_id(&self, now_ms: i64) -> TaskId {
        if self.find(TaskId(now_ms)).is_none() {
            return TaskId(now_ms);
        }
        let max = self.tasks.iter().map(|t| t.id.0).max().unwrap_or(now_ms);
        match max.max(now_ms).checked_add(1) {
            Some(id) => TaskId(id),
            None => (1..)
                .map(TaskId)
                .find(|id| self.find(*id).is_none())
                .unwrap_or(TaskId(now_ms)),
        }
    }
}

/// Check a proposed task name against the collection and return it trimmed.
///
/// Names compare case-insensitively after trimming. `exclude` is the task
/// being renamed, which may keep its own name.
pub fn validate_name(tasks: &[Task], name: &str, exclude: Option<TaskId>) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let wanted = trimmed.to_lowercase();
    let taken = tasks
        .iter()
        .any(|t| Some(t.id) != exclude && t.task.trim().to_lowercase() == wanted);
    if taken {
        return Err(ValidationError::DuplicateName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![Task::new(1, "A", false), Task::new(2, "B", true)]
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(validate_name(&tasks(), "", None), Err(ValidationError::EmptyName));
        assert_eq!(validate_name(&tasks(), "   \t", None), Err(ValidationError::EmptyName));
    }

    #[test]
    fn duplicates_compare_case_insensitively_after_trim() {
        assert_eq!(validate_name(&tasks(), "a", None), Err(ValidationError::DuplicateName));
        assert_eq!(validate_name(&tasks(), "  b ", None), Err(ValidationError::DuplicateName));
        assert_eq!(validate_name(&tasks(), " c ", None), Ok("c".to_string()));
    }

    #[test]
    fn renaming_may_keep_own_name() {
        assert_eq!(validate_name(&tasks(), "A", Some(TaskId(1))), Ok("A".to_string()));
        assert_eq!(
            validate_name(&tasks(), "A", Some(TaskId(2))),
            Err(ValidationError::DuplicateName)
        );
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Active".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!("completed".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(" all ".parse::<Filter>(), Ok(Filter::All));
        assert!("done".parse::<Filter>().is_err());
    }

    #[test]
    fn fresh_id_avoids_collisions() {
        let mut list = TodoList::new(TodoClient::new("http://x"), Timings::default());
        list.tasks = vec![Task::new(100, "a", false), Task::new(250, "b", false)];
        assert_eq!(list.fresh_id(300), TaskId(300));
        assert_eq!(list.fresh_id(100), TaskId(251));
    }

    #[test]
    fn fresh_id_at_the_top_of_the_range_reuses_a_gap() {
        let mut list = TodoList::new(TodoClient::new("http://x"), Timings::default());
        list.tasks = vec![
            Task::new(i64::MAX, "a", false),
            Task::new(1, "b", false),
            Task::new(5, "c", false),
        ];
        assert_eq!(list.fresh_id(5), TaskId(2));
    }
}
