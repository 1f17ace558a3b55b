//! Terminal host for the `todo-core` views.
//!
//! Executes the effects a component returns: HTTP through a blocking ureq
//! agent, timers through tokio. View models are rendered as plain text.

pub mod cli;
pub mod commands;
pub mod executor;
pub mod render;
pub mod runtime;

pub use executor::Executor;
pub use runtime::{Runtime, Signal};
