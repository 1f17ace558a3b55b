use std::collections::VecDeque;

use tracing::{debug, error, info, warn};

use super::state::{Alert, AlertKind, Batch, BatchScope, DeleteModal, InFlight, Pending, Phase, TodoList};
use super::{validate_name, TodoEvent, TodoListViewModel};
use crate::component::Component;
use crate::effect::{Effect, Field, Ticket};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages;
use crate::types::{fallback_tasks, Task, TaskId};

impl Component for TodoList {
    type Event = TodoEvent;
    type ViewModel = TodoListViewModel;

    fn update(mut self, event: TodoEvent) -> (Self, Vec<Effect>) {
        let effects = match event {
            TodoEvent::Mounted => self.mount(),
            TodoEvent::Unmounted => {
                self.phase = Phase::Unmounted;
                self.in_flight = None;
                self.alert = None;
                Vec::new()
            }
            TodoEvent::Response { ticket, result } => self.on_response(ticket, result),
            TodoEvent::TimerElapsed(ticket) => self.on_timer(ticket),
            TodoEvent::FilterChanged(filter) => {
                self.filter = filter;
                vec![Effect::Render]
            }
            event if !self.is_ready() => {
                debug!(?event, "ignoring input before the list is ready");
                Vec::new()
            }
            TodoEvent::DraftChanged(text) => {
                self.draft = text;
                vec![Effect::Render]
            }
            TodoEvent::AddRequested { now_ms } => self.add(now_ms),
            TodoEvent::ToggleRequested(id) => self.toggle(id),
            TodoEvent::EditOpened(id) => self.open_edit(id),
            TodoEvent::EditDraftChanged(text) => match self.editing.as_mut() {
                Some(task) if self.in_flight.is_none() => {
                    task.task = text;
                    vec![Effect::Render]
                }
                _ => Vec::new(),
            },
            TodoEvent::EditCommitted => self.commit_edit(),
            TodoEvent::EditCancelled => {
                if self.is_busy() || self.editing.is_none() {
                    return (self, Vec::new());
                }
                self.editing = None;
                vec![Effect::Render]
            }
            TodoEvent::DeleteOneRequested(id) => match self.find(id).map(|t| t.task.clone()) {
                Some(task_name) if !self.is_busy() => {
                    self.delete_modal = Some(DeleteModal::Single { id, task_name });
                    vec![Effect::Render]
                }
                _ => Vec::new(),
            },
            TodoEvent::DeleteCompletedRequested => {
                if self.is_busy() || !self.tasks.iter().any(|t| t.completed) {
                    return (self, Vec::new());
                }
                self.delete_modal = Some(DeleteModal::Completed);
                vec![Effect::Render]
            }
            TodoEvent::DeleteAllRequested => {
                if self.is_busy() || self.tasks.is_empty() {
                    return (self, Vec::new());
                }
                self.delete_modal = Some(DeleteModal::All);
                vec![Effect::Render]
            }
            TodoEvent::DeleteConfirmed => self.confirm_delete(),
            TodoEvent::DeleteCancelled => {
                if self.is_busy() || self.delete_modal.is_none() {
                    return (self, Vec::new());
                }
                self.delete_modal = None;
                vec![Effect::Render]
            }
        };
        (self, effects)
    }

    fn view(&self) -> TodoListViewModel {
        TodoListViewModel::from_state(self)
    }

    fn mount_event() -> TodoEvent {
        TodoEvent::Mounted
    }

    fn unmount_event() -> TodoEvent {
        TodoEvent::Unmounted
    }

    fn response_event(ticket: Ticket, result: Result<HttpResponse, ApiError>) -> TodoEvent {
        TodoEvent::Response { ticket, result }
    }

    fn timer_event(ticket: Ticket) -> TodoEvent {
        TodoEvent::TimerElapsed(ticket)
    }
}

impl TodoList {
    fn mount(&mut self) -> Vec<Effect> {
        self.tasks.clear();
        self.draft.clear();
        self.filter = Default::default();
        self.alert = None;
        self.delete_modal = None;
        self.editing = None;
        self.phase = Phase::Loading { settle: None };
        let request = self.client.build_list_tasks();
        self.send(request, Pending::Fetch)
    }

    fn send(&mut self, request: HttpRequest, op: Pending) -> Vec<Effect> {
        let ticket = self.tickets.issue();
        debug!(%ticket, method = request.method.as_str(), url = %request.url, "sending request");
        self.in_flight = Some(InFlight { ticket, op });
        vec![Effect::Http { ticket, request }, Effect::Render]
    }

    /// Replace the current alert and schedule its dismissal.
    fn show_alert(&mut self, kind: AlertKind, message: impl Into<String>) -> Effect {
        let ticket = self.tickets.issue();
        self.alert = Some(Alert {
            message: message.into(),
            kind,
            ticket,
        });
        Effect::StartTimer {
            ticket,
            after: self.timings.alert,
        }
    }

    fn alert_only(&mut self, kind: AlertKind, message: impl Into<String>) -> Vec<Effect> {
        vec![self.show_alert(kind, message), Effect::Render]
    }

    fn add(&mut self, now_ms: i64) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        let name = match validate_name(&self.tasks, &self.draft, None) {
            Ok(name) => name,
            Err(e) => return self.alert_only(AlertKind::Error, e.to_string()),
        };
        let task = Task {
            id: self.fresh_id(now_ms),
            task: name,
            completed: false,
        };
        match self.client.build_create_task(&task) {
            Ok(request) => self.send(request, Pending::Add(task)),
            Err(e) => {
                error!(error = %e, "could not build create request");
                self.alert_only(AlertKind::Error, messages::ADD_FAILED)
            }
        }
    }

    fn toggle(&mut self, id: TaskId) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        let Some(task) = self.find(id) else {
            return Vec::new();
        };
        let updated = Task {
            completed: !task.completed,
            ..task.clone()
        };
        match self.client.build_update_task(&updated) {
            Ok(request) => self.send(request, Pending::Toggle(updated)),
            Err(e) => {
                error!(error = %e, "could not build update request");
                self.alert_only(AlertKind::Error, messages::UPDATE_FAILED)
            }
        }
    }

    fn open_edit(&mut self, id: TaskId) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        let Some(task) = self.find(id).cloned() else {
            return Vec::new();
        };
        self.editing = Some(task);
        vec![Effect::Focus(Field::EditTask), Effect::Render]
    }

    fn commit_edit(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        let Some((id, draft)) = self.editing.as_ref().map(|t| (t.id, t.task.clone())) else {
            return Vec::new();
        };
        let Some(completed) = self.find(id).map(|t| t.completed) else {
            // deleted underneath the modal
            self.editing = None;
            return vec![Effect::Render];
        };
        let name = match validate_name(&self.tasks, &draft, Some(id)) {
            Ok(name) => name,
            Err(e) => return self.alert_only(AlertKind::Error, e.to_string()),
        };
        let updated = Task {
            id,
            task: name,
            completed,
        };
        match self.client.build_update_task(&updated) {
            Ok(request) => self.send(request, Pending::Edit(updated)),
            Err(e) => {
                error!(error = %e, "could not build update request");
                self.alert_only(AlertKind::Error, messages::UPDATE_FAILED)
            }
        }
    }

    fn confirm_delete(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        match self.delete_modal.clone() {
            None => Vec::new(),
            Some(DeleteModal::Single { id, .. }) => {
                let request = self.client.build_delete_task(id);
                self.send(request, Pending::DeleteOne(id))
            }
            Some(DeleteModal::Completed) => {
                let ids = self.tasks.iter().filter(|t| t.completed).map(|t| t.id).collect();
                self.start_batch(BatchScope::Completed, ids)
            }
            Some(DeleteModal::All) => {
                let ids = self.tasks.iter().map(|t| t.id).collect();
                self.start_batch(BatchScope::All, ids)
            }
        }
    }

    fn start_batch(&mut self, scope: BatchScope, mut ids: VecDeque<TaskId>) -> Vec<Effect> {
        let Some(first) = ids.pop_front() else {
            self.delete_modal = None;
            return vec![Effect::Render];
        };
        let request = self.client.build_delete_task(first);
        self.send(
            request,
            Pending::DeleteBatch(Batch {
                scope,
                current: first,
                remaining: ids,
                deleted: Vec::new(),
            }),
        )
    }

    fn on_timer(&mut self, ticket: Ticket) -> Vec<Effect> {
        if self.alert.as_ref().is_some_and(|a| a.ticket == ticket) {
            self.alert = None;
            return vec![Effect::Render];
        }
        if self.phase == (Phase::Loading { settle: Some(ticket) }) {
            self.phase = Phase::Ready;
            return vec![Effect::Render];
        }
        debug!(%ticket, "discarding stale timer");
        Vec::new()
    }

    fn on_response(&mut self, ticket: Ticket, result: Result<HttpResponse, ApiError>) -> Vec<Effect> {
        let op = match self.in_flight.take() {
            Some(in_flight) if in_flight.ticket == ticket => in_flight.op,
            other => {
                self.in_flight = other;
                debug!(%ticket, "discarding stale response");
                return Vec::new();
            }
        };

        match op {
            Pending::Fetch => {
                let settle = self.tickets.issue();
                self.phase = Phase::Loading { settle: Some(settle) };
                let mut effects = vec![Effect::StartTimer {
                    ticket: settle,
                    after: self.timings.loading_settle,
                }];
                match result.and_then(|r| self.client.parse_list_tasks(r)) {
                    Ok(tasks) => {
                        info!(count = tasks.len(), "tasks loaded");
                        self.tasks = tasks;
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to load tasks, using sample data");
                        self.tasks = fallback_tasks();
                        effects.push(self.show_alert(AlertKind::Warning, messages::LOAD_FAILED));
                    }
                }
                effects.push(Effect::Render);
                effects
            }
            Pending::Add(task) => {
                let added = match result.and_then(|r| self.client.parse_create_task(r)) {
                    Ok(created) => created,
                    Err(e) => {
                        warn!(error = %e, id = %task.id, "create failed, keeping local copy");
                        task
                    }
                };
                info!(id = %added.id, "task added");
                self.tasks.push(added);
                self.draft.clear();
                vec![
                    self.show_alert(AlertKind::Success, messages::ADDED),
                    Effect::Focus(Field::NewTask),
                    Effect::Render,
                ]
            }
            Pending::Toggle(updated) => match result.and_then(|r| self.client.parse_update_task(r)) {
                Ok(_) => {
                    let completed = updated.completed;
                    self.replace(updated);
                    if completed && self.tasks.iter().all(|t| t.completed) {
                        self.alert_only(AlertKind::Success, messages::ALL_COMPLETED)
                    } else {
                        vec![Effect::Render]
                    }
                }
                Err(e) => {
                    error!(error = %e, id = %updated.id, "toggle failed");
                    self.alert_only(AlertKind::Error, messages::UPDATE_FAILED)
                }
            },
            Pending::Edit(updated) => match result.and_then(|r| self.client.parse_update_task(r)) {
                Ok(_) => {
                    info!(id = %updated.id, "task renamed");
                    self.replace(updated);
                    self.editing = None;
                    self.alert_only(AlertKind::Success, messages::UPDATED)
                }
                Err(e) => {
                    error!(error = %e, id = %updated.id, "rename failed");
                    self.alert_only(AlertKind::Error, messages::UPDATE_FAILED)
                }
            },
            Pending::DeleteOne(id) => match result.and_then(|r| self.client.parse_delete_task(r)) {
                Ok(()) => {
                    info!(%id, "task deleted");
                    self.tasks.retain(|t| t.id != id);
                    self.delete_modal = None;
                    self.alert_only(AlertKind::Success, messages::DELETED_ONE)
                }
                Err(e) => {
                    error!(error = %e, %id, "delete failed");
                    self.alert_only(AlertKind::Error, messages::DELETE_FAILED)
                }
            },
            Pending::DeleteBatch(batch) => self.continue_batch(batch, result),
        }
    }

    fn continue_batch(&mut self, mut batch: Batch, result: Result<HttpResponse, ApiError>) -> Vec<Effect> {
        if let Err(e) = result.and_then(|r| self.client.parse_delete_task(r)) {
            error!(
                error = %e,
                id = %batch.current,
                deleted = batch.deleted.len(),
                remaining = batch.remaining.len(),
                "batch delete failed"
            );
            self.tasks.retain(|t| !batch.deleted.contains(&t.id));
            return self.alert_only(AlertKind::Error, messages::DELETE_FAILED);
        }

        batch.deleted.push(batch.current);
        if let Some(next) = batch.remaining.pop_front() {
            batch.current = next;
            let request = self.client.build_delete_task(next);
            return self.send(request, Pending::DeleteBatch(batch));
        }

        info!(count = batch.deleted.len(), "batch delete finished");
        self.tasks.retain(|t| !batch.deleted.contains(&t.id));
        self.delete_modal = None;
        let message = match batch.scope {
            BatchScope::Completed => messages::DELETED_COMPLETED,
            BatchScope::All => messages::DELETED_ALL,
        };
        self.alert_only(AlertKind::Success, message)
    }
}
