//! The seam between a view and the host that runs it.

use crate::effect::{Effect, Ticket};
use crate::error::ApiError;
use crate::http::HttpResponse;

/// A view driven by events: the host feeds events in, executes the returned
/// effects, and renders `view()` whenever an `Effect::Render` comes out.
pub trait Component: Sized {
    type Event;
    type ViewModel;

    /// Apply one event. Consumes the state and returns its successor.
    fn update(self, event: Self::Event) -> (Self, Vec<Effect>);

    fn view(&self) -> Self::ViewModel;

    /// First event a host sends.
    fn mount_event() -> Self::Event;

    /// Last event a host sends; pending requests and timers become stale.
    fn unmount_event() -> Self::Event;

    /// Event reporting the outcome of an `Effect::Http`.
    fn response_event(ticket: Ticket, result: Result<HttpResponse, ApiError>) -> Self::Event;

    /// Event reporting that an `Effect::StartTimer` has elapsed.
    fn timer_event(ticket: Ticket) -> Self::Event;
}
