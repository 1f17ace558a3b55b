//! Effects the views ask their host to perform.
//!
//! # Design
//! Every request and timer carries a `Ticket`. A view remembers the tickets it
//! is waiting for and drops any response or timer whose ticket it no longer
//! expects, which is how unmount and superseded alerts cancel in-flight work
//! without the host having to abort anything.

use std::fmt;
use std::time::Duration;

use crate::http::HttpRequest;

/// Identifies one outstanding request or timer of a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tickets in increasing order.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

/// Input field that should receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NewTask,
    EditTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Execute `request` and feed the outcome back with the same ticket.
    Http { ticket: Ticket, request: HttpRequest },
    /// Feed a timer event back with the same ticket once `after` has elapsed.
    StartTimer { ticket: Ticket, after: Duration },
    Focus(Field),
    Render,
}
