//! Read-only user list with a spinner.
//!
//! Fetches `/user` once on mount. Whatever the outcome, the spinner stays up
//! for `Timings::user_spinner` after the fetch resolves; then the list (empty
//! on failure) becomes visible.

use tracing::{debug, error, info};

use crate::client::UserClient;
use crate::component::Component;
use crate::config::Timings;
use crate::effect::{Effect, Ticket, TicketCounter};
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::types::User;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Fetching(Ticket),
    Spinning { ticket: Ticket, users: Vec<User> },
    Ready,
    Unmounted,
}

#[derive(Debug, Clone)]
pub enum UserListEvent {
    Mounted,
    Response {
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    },
    TimerElapsed(Ticket),
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListViewModel {
    pub loading: bool,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UserList {
    client: UserClient,
    timings: Timings,
    tickets: TicketCounter,
    phase: Phase,
    users: Vec<User>,
}

impl UserList {
    pub fn new(client: UserClient, timings: Timings) -> Self {
        Self {
            client,
            timings,
            tickets: TicketCounter::default(),
            phase: Phase::Idle,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Ready
    }

    fn on_response(&mut self, ticket: Ticket, result: Result<HttpResponse, ApiError>) -> Vec<Effect> {
        if self.phase != Phase::Fetching(ticket) {
            debug!(%ticket, "discarding stale user response");
            return Vec::new();
        }

        let users = match result.and_then(|response| self.client.parse_list_users(response)) {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                users
            }
            Err(e) => {
                error!(error = %e, "failed to load users");
                Vec::new()
            }
        };

        let timer = self.tickets.issue();
        self.phase = Phase::Spinning { ticket: timer, users };
        vec![Effect::StartTimer {
            ticket: timer,
            after: self.timings.user_spinner,
        }]
    }

    fn on_timer(&mut self, ticket: Ticket) -> Vec<Effect> {
        match std::mem::replace(&mut self.phase, Phase::Ready) {
            Phase::Spinning { ticket: expected, users } if expected == ticket => {
                self.users = users;
                vec![Effect::Render]
            }
            other => {
                self.phase = other;
                debug!(%ticket, "discarding stale user timer");
                Vec::new()
            }
        }
    }
}

impl Component for UserList {
    type Event = UserListEvent;
    type ViewModel = UserListViewModel;

    fn update(mut self, event: UserListEvent) -> (Self, Vec<Effect>) {
        let effects = match event {
            UserListEvent::Mounted => {
                let ticket = self.tickets.issue();
                self.users.clear();
                self.phase = Phase::Fetching(ticket);
                vec![
                    Effect::Http {
                        ticket,
                        request: self.client.build_list_users(),
                    },
                    Effect::Render,
                ]
            }
            UserListEvent::Response { ticket, result } => self.on_response(ticket, result),
            UserListEvent::TimerElapsed(ticket) => self.on_timer(ticket),
            UserListEvent::Unmounted => {
                self.phase = Phase::Unmounted;
                Vec::new()
            }
        };
        (self, effects)
    }

    fn view(&self) -> UserListViewModel {
        UserListViewModel {
            loading: self.is_loading(),
            rows: self
                .users
                .iter()
                .map(|u| format!("{} - {} - {}", u.id, u.name, u.email))
                .collect(),
        }
    }

    fn mount_event() -> UserListEvent {
        UserListEvent::Mounted
    }

    fn unmount_event() -> UserListEvent {
        UserListEvent::Unmounted
    }

    fn response_event(ticket: Ticket, result: Result<HttpResponse, ApiError>) -> UserListEvent {
        UserListEvent::Response { ticket, result }
    }

    fn timer_event(ticket: Ticket) -> UserListEvent {
        UserListEvent::TimerElapsed(ticket)
    }
}
