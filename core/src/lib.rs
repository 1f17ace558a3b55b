//! Sans-IO core of the todo and user views.
//!
//! # Overview
//! Each view is a plain state struct with a reducer: events go in, the next
//! state and a list of effects come out. Effects describe HTTP requests and
//! timers as data; a host executes them and feeds the outcomes back as
//! events, so the core stays deterministic and testable without a network.
//!
//! # Design
//! - `TodoClient` / `UserClient` are stateless: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `TaskRecord` tolerates the field variants older backends send and
//!   normalizes them into `Task`.
//! - Every request and timer carries a `Ticket`; results the view is no longer
//!   waiting for are dropped.

pub mod client;
pub mod component;
pub mod config;
pub mod effect;
pub mod error;
pub mod http;
pub mod messages;
pub mod todo_list;
pub mod types;
pub mod user_list;

pub use client::{TodoClient, UserClient};
pub use component::Component;
pub use config::Timings;
pub use effect::{Effect, Field, Ticket};
pub use error::{ApiError, RecordError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use todo_list::{AlertKind, DeleteModal, Filter, TodoEvent, TodoList, TodoListViewModel};
pub use types::{Task, TaskId, TaskRecord, User};
pub use user_list::{UserList, UserListEvent, UserListViewModel};
