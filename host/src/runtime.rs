//! Event loop that runs a `Component`.
//!
//! # Design
//! One unbounded channel feeds the loop. HTTP effects run on tokio's blocking
//! pool, timers are sleeping tasks, and inputs (stdin) push from their own
//! thread; all of them post back into the channel. The component itself is
//! only touched by the loop, one event at a time.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use todo_core::{Component, Effect};
use tracing::debug;

use crate::executor::Executor;

/// What arrives on the loop's channel.
#[derive(Debug)]
pub enum Signal<E> {
    Event(E),
    /// Unmount the component and stop the loop.
    Quit,
}

pub struct Runtime<C: Component> {
    executor: Executor,
    tx: UnboundedSender<Signal<C::Event>>,
    rx: UnboundedReceiver<Signal<C::Event>>,
}

impl<C> Runtime<C>
where
    C: Component + 'static,
    C::Event: Send + 'static,
{
    pub fn new(executor: Executor) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { executor, tx, rx }
    }

    /// Handle for inputs that feed events into the loop.
    pub fn sender(&self) -> UnboundedSender<Signal<C::Event>> {
        self.tx.clone()
    }

    /// Mount `component` and process events until `done` holds after an
    /// event or a `Signal::Quit` arrives. Calls `on_render` for every
    /// `Effect::Render`.
    pub async fn run<R, D>(mut self, mut component: C, mut on_render: R, done: D) -> C
    where
        R: FnMut(&C),
        D: Fn(&C) -> bool,
    {
        let mut next = Some(C::mount_event());
        loop {
            let event = match next.take() {
                Some(event) => event,
                None => match self.rx.recv().await {
                    Some(Signal::Event(event)) => event,
                    Some(Signal::Quit) | None => {
                        let (unmounted, _) = component.update(C::unmount_event());
                        return unmounted;
                    }
                },
            };

            let (updated, effects) = component.update(event);
            component = updated;

            let mut render = false;
            for effect in effects {
                render |= self.launch(effect);
            }
            if render {
                on_render(&component);
            }
            if done(&component) {
                return component;
            }
        }
    }

    /// Start one effect. Returns whether it asked for a render.
    fn launch(&self, effect: Effect) -> bool {
        match effect {
            Effect::Http { ticket, request } => {
                let tx = self.tx.clone();
                let executor = self.executor.clone();
                tokio::task::spawn_blocking(move || {
                    let result = executor.execute(request);
                    // the loop may already be gone
                    let _ = tx.send(Signal::Event(C::response_event(ticket, result)));
                });
                false
            }
            Effect::StartTimer { ticket, after } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(Signal::Event(C::timer_event(ticket)));
                });
                false
            }
            Effect::Focus(field) => {
                debug!(?field, "focus");
                false
            }
            Effect::Render => true,
        }
    }
}
