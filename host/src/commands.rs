//! Line commands typed on stdin, turned into `TodoEvent`s.

use thiserror::Error;
use todo_core::todo_list::UnknownFilter;
use todo_core::{Filter, TaskId, TodoEvent};

pub const HELP: &str = "\
commands:
  add <name>                 add a task
  toggle <id>                flip completion
  edit <id> [<name>]         open the edit dialog, save at once when a name is given
  rename <name>              change the name in the open edit dialog
  save                       save the edit dialog
  delete <id>                ask to delete one task
  clear-completed            ask to delete all completed tasks
  clear-all                  ask to delete every task
  yes | no                   confirm or dismiss the open dialog
  filter all|active|completed
  help
  quit";

#[derive(Debug, Clone)]
pub enum Command {
    Events(Vec<TodoEvent>),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a task id")]
    InvalidId(String),
    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

/// Parse one input line. `now_ms` is the wall clock used to seed new ids.
pub fn parse(line: &str, now_ms: i64) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let events = match word {
        "" => Vec::new(),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "add" => vec![
            TodoEvent::DraftChanged(rest.to_string()),
            TodoEvent::AddRequested { now_ms },
        ],
        "toggle" => vec![TodoEvent::ToggleRequested(task_id("toggle", rest)?)],
        "edit" => {
            let (id, name) = match rest.split_once(char::is_whitespace) {
                Some((id, name)) => (id, Some(name.trim())),
                None => (rest, None),
            };
            let mut events = vec![TodoEvent::EditOpened(task_id("edit", id)?)];
            if let Some(name) = name {
                events.push(TodoEvent::EditDraftChanged(name.to_string()));
                events.push(TodoEvent::EditCommitted);
            }
            events
        }
        "rename" => vec![TodoEvent::EditDraftChanged(rest.to_string())],
        "save" => vec![TodoEvent::EditCommitted],
        "delete" => vec![TodoEvent::DeleteOneRequested(task_id("delete", rest)?)],
        "clear-completed" => vec![TodoEvent::DeleteCompletedRequested],
        "clear-all" => vec![TodoEvent::DeleteAllRequested],
        "yes" | "y" => vec![TodoEvent::DeleteConfirmed],
        "no" | "n" => vec![TodoEvent::DeleteCancelled, TodoEvent::EditCancelled],
        "filter" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("filter"));
            }
            vec![TodoEvent::FilterChanged(rest.parse::<Filter>()?)]
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Events(events))
}

fn task_id(command: &'static str, arg: &str) -> Result<TaskId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse::<i64>()
        .map(TaskId)
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}
