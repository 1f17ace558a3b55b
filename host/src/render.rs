//! Plain-text rendering of view models.

use std::fmt::Write;

use todo_core::todo_list::{DeleteModalView, EditModalView};
use todo_core::{messages, AlertKind, TodoListViewModel, UserListViewModel};

pub fn render_users(view: &UserListViewModel) -> String {
    if view.loading {
        return "Loading...\n".to_string();
    }
    let mut out = String::new();
    for row in &view.rows {
        let _ = writeln!(out, "{row}");
    }
    out
}

pub fn render_todos(view: &TodoListViewModel) -> String {
    if view.loading {
        return format!("{}\n", messages::TODO_LOADING);
    }

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);
    if let Some((kind, message)) = &view.alert {
        let tag = match kind {
            AlertKind::Success => "ok",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
        };
        let _ = writeln!(out, "[{tag}] {message}");
    }
    if view.busy {
        let _ = writeln!(out, "{}", messages::TODO_BUSY);
    }

    let input = if view.draft.is_empty() {
        format!("<{}>", messages::INPUT_PLACEHOLDER)
    } else {
        view.draft.clone()
    };
    // brackets mark an enabled button
    let add = if view.can_add {
        format!("[{}]", messages::ADD_BUTTON)
    } else {
        format!("({})", messages::ADD_BUTTON)
    };
    let _ = writeln!(out, "> {input}  {add}");

    let tabs: Vec<String> = view
        .filters
        .iter()
        .map(|tab| {
            let label = format!("{} ({})", tab.label, tab.count);
            if tab.selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" | "));

    match view.empty_message {
        Some(message) => {
            let _ = writeln!(out, "  {message}");
        }
        None => {
            for row in &view.rows {
                let mark = if row.completed { 'x' } else { ' ' };
                let _ = writeln!(out, "  [{mark}] {:>4}  {}", row.id, row.name);
            }
        }
    }

    let mut actions = Vec::new();
    if view.show_delete_completed {
        actions.push(messages::DELETE_COMPLETED_BUTTON);
    }
    if view.show_delete_all {
        actions.push(messages::DELETE_ALL_BUTTON);
    }
    if !actions.is_empty() {
        let _ = writeln!(out, "{}", actions.join(" / "));
    }

    if let Some(modal) = &view.delete_modal {
        render_delete_modal(&mut out, modal);
    }
    if let Some(modal) = &view.edit_modal {
        render_edit_modal(&mut out, modal);
    }
    out
}

fn render_delete_modal(out: &mut String, modal: &DeleteModalView) {
    let _ = writeln!(out, "-- {} --", modal.title);
    if let Some(target) = &modal.target {
        let _ = writeln!(out, "{} {target}", messages::DELETE_TARGET_LABEL);
    }
    let _ = writeln!(out, "{}", modal.body);
    let _ = writeln!(out, "({}: yes, {}: no)", messages::CONFIRM_DELETE, messages::CANCEL);
}

fn render_edit_modal(out: &mut String, modal: &EditModalView) {
    let _ = writeln!(out, "-- {} --", modal.title);
    let _ = writeln!(out, "> {}", modal.value);
    let _ = writeln!(out, "(rename <name>, save, no: {})", messages::CANCEL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::todo_list::{FilterTab, TaskRow};
    use todo_core::{Filter, TaskId};

    fn ready_view() -> TodoListViewModel {
        TodoListViewModel {
            loading: false,
            busy: false,
            title: messages::TODO_TITLE,
            alert: None,
            draft: String::new(),
            can_add: false,
            filters: vec![
                FilterTab { filter: Filter::All, label: messages::FILTER_ALL, count: 2, selected: true },
                FilterTab { filter: Filter::Completed, label: messages::FILTER_COMPLETED, count: 1, selected: false },
                FilterTab { filter: Filter::Active, label: messages::FILTER_ACTIVE, count: 1, selected: false },
            ],
            rows: vec![
                TaskRow { id: TaskId(1), name: "Quet nha".to_string(), completed: false },
                TaskRow { id: TaskId(2), name: "nau com".to_string(), completed: true },
            ],
            empty_message: None,
            show_delete_completed: true,
            show_delete_all: true,
            delete_modal: None,
            edit_modal: None,
        }
    }

    #[test]
    fn loading_screens() {
        let users = UserListViewModel { loading: true, rows: vec!["1 - An - a@b".to_string()] };
        assert_eq!(render_users(&users), "Loading...\n");

        let todos = TodoListViewModel { loading: true, ..ready_view() };
        assert_eq!(render_todos(&todos), format!("{}\n", messages::TODO_LOADING));
    }

    #[test]
    fn user_rows_one_per_line() {
        let users = UserListViewModel {
            loading: false,
            rows: vec!["1 - An - a@b".to_string(), "2 - Binh - b@c".to_string()],
        };
        assert_eq!(render_users(&users), "1 - An - a@b\n2 - Binh - b@c\n");
    }

    #[test]
    fn rows_tabs_and_actions() {
        let text = render_todos(&ready_view());
        assert!(text.contains(&format!("[{} (2)]", messages::FILTER_ALL)));
        assert!(text.contains(&format!("{} (1)", messages::FILTER_ACTIVE)));
        assert!(text.contains("[ ]    1  Quet nha"));
        assert!(text.contains("[x]    2  nau com"));
        assert!(text.contains(messages::DELETE_ALL_BUTTON));
    }

    #[test]
    fn alert_busy_and_modals() {
        let view = TodoListViewModel {
            busy: true,
            alert: Some((AlertKind::Error, messages::DELETE_FAILED.to_string())),
            delete_modal: Some(DeleteModalView {
                title: messages::DELETE_ONE_TITLE,
                target: Some("Quet nha".to_string()),
                body: messages::DELETE_ONE_BODY.to_string(),
            }),
            ..ready_view()
        };
        let text = render_todos(&view);
        assert!(text.contains(&format!("[error] {}", messages::DELETE_FAILED)));
        assert!(text.contains(messages::TODO_BUSY));
        assert!(text.contains(&format!("{} Quet nha", messages::DELETE_TARGET_LABEL)));
    }

    #[test]
    fn input_line_shows_placeholder_until_typed() {
        let text = render_todos(&ready_view());
        assert!(text.contains(&format!("> <{}>  ({})", messages::INPUT_PLACEHOLDER, messages::ADD_BUTTON)));

        let typed = TodoListViewModel {
            draft: "nau com".to_string(),
            can_add: true,
            ..ready_view()
        };
        let text = render_todos(&typed);
        assert!(text.contains(&format!("> nau com  [{}]", messages::ADD_BUTTON)));
    }

    #[test]
    fn empty_list_message() {
        let view = TodoListViewModel {
            rows: Vec::new(),
            empty_message: Some(messages::EMPTY_LIST),
            show_delete_completed: false,
            show_delete_all: false,
            ..ready_view()
        };
        let text = render_todos(&view);
        assert!(text.contains(messages::EMPTY_LIST));
        assert!(!text.contains(messages::DELETE_ALL_BUTTON));
    }
}
