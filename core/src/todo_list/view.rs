//! Render-ready projection of the todo state.

use super::state::{AlertKind, DeleteModal, Filter, TodoList};
use crate::messages;
use crate::types::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: Filter,
    pub label: &'static str,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteModalView {
    pub title: &'static str,
    /// Name of the task about to go, for single deletes.
    pub target: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModalView {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListViewModel {
    /// Initial loading screen; nothing else is shown while set.
    pub loading: bool,
    /// Busy overlay over the ready view.
    pub busy: bool,
    pub title: &'static str,
    pub alert: Option<(AlertKind, String)>,
    pub draft: String,
    pub can_add: bool,
    pub filters: Vec<FilterTab>,
    pub rows: Vec<TaskRow>,
    pub empty_message: Option<&'static str>,
    pub show_delete_completed: bool,
    pub show_delete_all: bool,
    pub delete_modal: Option<DeleteModalView>,
    pub edit_modal: Option<EditModalView>,
}

impl TodoListViewModel {
    pub(super) fn from_state(state: &TodoList) -> Self {
        let busy = state.is_busy();
        let completed = state.count(Filter::Completed);
        let rows: Vec<TaskRow> = state
            .visible_tasks()
            .map(|t| TaskRow {
                id: t.id,
                name: t.task.clone(),
                completed: t.completed,
            })
            .collect();

        let filters = [
            (Filter::All, messages::FILTER_ALL),
            (Filter::Completed, messages::FILTER_COMPLETED),
            (Filter::Active, messages::FILTER_ACTIVE),
        ]
        .into_iter()
        .map(|(filter, label)| FilterTab {
            filter,
            label,
            count: state.count(filter),
            selected: state.filter() == filter,
        })
        .collect();

        let delete_modal = state.delete_modal().map(|modal| match modal {
            DeleteModal::Single { task_name, .. } => DeleteModalView {
                title: messages::DELETE_ONE_TITLE,
                target: Some(task_name.clone()),
                body: messages::DELETE_ONE_BODY.to_string(),
            },
            DeleteModal::Completed => DeleteModalView {
                title: messages::DELETE_COMPLETED_TITLE,
                target: None,
                body: messages::delete_completed_body(completed),
            },
            DeleteModal::All => DeleteModalView {
                title: messages::DELETE_ALL_TITLE,
                target: None,
                body: messages::delete_all_body(state.tasks().len()),
            },
        });

        Self {
            loading: state.is_loading(),
            busy,
            title: messages::TODO_TITLE,
            alert: state.alert().map(|a| (a.kind, a.message.clone())),
            draft: state.draft().to_string(),
            can_add: !busy && !state.draft().trim().is_empty(),
            filters,
            empty_message: rows.is_empty().then_some(messages::EMPTY_LIST),
            rows,
            show_delete_completed: completed > 0,
            show_delete_all: !state.tasks().is_empty(),
            delete_modal,
            edit_modal: state.editing().map(|t| EditModalView {
                title: messages::EDIT_TITLE,
                value: t.task.clone(),
            }),
        }
    }
}
