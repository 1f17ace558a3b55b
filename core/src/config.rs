//! Endpoints and delays used by the views.

use std::time::Duration;

/// Backend serving `/todolist`.
pub const TODO_API_URL: &str = "http://localhost:3000";

/// Backend serving `/user`.
pub const USER_API_URL: &str = "http://localhost:8080";

/// Fixed delays of the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long an alert banner stays up.
    pub alert: Duration,
    /// How long the user list keeps its spinner after the fetch resolves.
    pub user_spinner: Duration,
    /// How long the todo view stays on its loading screen after the fetch resolves.
    pub loading_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert: Duration::from_secs(3),
            user_spinner: Duration::from_secs(2),
            loading_settle: Duration::from_millis(500),
        }
    }
}
