//! Todo list manager.
//!
//! # Overview
//! `TodoList` is the whole state of the view and `update` is its reducer:
//! every user action, HTTP outcome and timer arrives as a `TodoEvent`, and
//! the reducer returns the next state plus the effects the host must run.
//!
//! # Design
//! - One request in flight at a time. While a request is outstanding the view
//!   is busy and mutating actions are ignored.
//! - Batch deletes issue one DELETE per task, each only after the previous
//!   one succeeded. The first failure stops the batch.
//! - Responses and timers are matched by ticket; anything the view is not
//!   waiting for is dropped.

mod state;
mod update;
mod view;

pub use state::{validate_name, Alert, AlertKind, DeleteModal, Filter, TodoList, UnknownFilter};
pub use view::{DeleteModalView, EditModalView, FilterTab, TaskRow, TodoListViewModel};

use crate::effect::Ticket;
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::types::TaskId;

#[derive(Debug, Clone)]
pub enum TodoEvent {
    /// Start the initial fetch. Mounting again starts over.
    Mounted,
    /// Forget all pending work; later responses and timers are ignored.
    Unmounted,
    Response {
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    },
    TimerElapsed(Ticket),

    DraftChanged(String),
    /// Submit the draft. `now_ms` seeds the id of the new task.
    AddRequested { now_ms: i64 },
    ToggleRequested(TaskId),

    EditOpened(TaskId),
    EditDraftChanged(String),
    EditCommitted,
    EditCancelled,

    DeleteOneRequested(TaskId),
    DeleteCompletedRequested,
    DeleteAllRequested,
    DeleteConfirmed,
    DeleteCancelled,

    FilterChanged(Filter),
}
