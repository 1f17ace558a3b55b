//! Stateless HTTP request builders and response parsers.
//!
//! # Design
//! `TodoClient` and `UserClient` hold only a base URL. Each operation is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`; the views put the request into an
//! effect and call the parser when the host hands the response back.

use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Task, TaskId, TaskRecord, User};

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Request builder and parser for `/todolist`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todolist", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(&self, task: &Task) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(task).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todolist", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// PUT carries the full record, not a patch.
    pub fn build_update_task(&self, task: &Task) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(task).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todolist/{}", self.base_url, task.id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_task(&self, id: TaskId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todolist/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the task collection. The body must be a JSON array; elements
    /// that cannot be normalized are logged and skipped.
    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response)?;
        let items: Vec<Value> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        let tasks = items
            .into_iter()
            .filter_map(|item| {
                let normalized = serde_json::from_value::<TaskRecord>(item)
                    .map_err(|e| e.to_string())
                    .and_then(|record| record.normalize().map_err(|e| e.to_string()));
                match normalized {
                    Ok(task) => Some(task),
                    Err(reason) => {
                        warn!(%reason, "skipping task record");
                        None
                    }
                }
            })
            .collect();
        Ok(tasks)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        parse_task(response)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        parse_task(response)
    }

    /// The acknowledgement body differs between backends and is ignored.
    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Request builder and parser for `/user`.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/user", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn parse_task(response: HttpResponse) -> Result<Task, ApiError> {
    check_status(&response)?;
    let record: TaskRecord =
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    record
        .normalize()
        .map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Any 2xx is success; everything else becomes `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_tasks_produces_correct_request() {
        let req = client().build_list_tasks();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todolist");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_task_sends_full_record() {
        let req = client().build_create_task(&Task::new(1700000000000, "Buy milk", false)).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todolist");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 1700000000000_i64);
        assert_eq!(body["task"], "Buy milk");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn build_update_task_targets_record() {
        let req = client().build_update_task(&Task::new(9, "Updated", true)).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todolist/9");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["task"], "Updated");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_delete_task_has_no_body() {
        let req = client().build_delete_task(TaskId(3));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/todolist/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_tasks_normalizes_and_skips_bad_records() {
        let response = HttpResponse::new(
            200,
            r#"[
                {"id":1,"task":"A","completed":false},
                {"id":"2","name":"B","completed":"hoan thanh"},
                {"id":3},
                "garbage"
            ]"#,
        );
        let tasks = client().parse_list_tasks(response).unwrap();
        assert_eq!(tasks, vec![Task::new(1, "A", false), Task::new(2, "B", true)]);
    }

    #[test]
    fn parse_list_tasks_rejects_non_array() {
        let err = client()
            .parse_list_tasks(HttpResponse::new(200, r#"{"error":"nope"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_tasks_bad_json() {
        let err = client()
            .parse_list_tasks(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_task_accepts_201() {
        let task = client()
            .parse_create_task(HttpResponse::new(201, r#"{"id":5,"task":"New","completed":false}"#))
            .unwrap();
        assert_eq!(task, Task::new(5, "New", false));
    }

    #[test]
    fn non_2xx_is_http_error_regardless_of_code() {
        for status in [400, 404, 500, 503] {
            let err = client()
                .parse_update_task(HttpResponse::new(status, "boom"))
                .unwrap_err();
            assert!(matches!(err, ApiError::HttpError { status: s, .. } if s == status));
        }
    }

    #[test]
    fn parse_delete_task_ignores_body() {
        assert!(client().parse_delete_task(HttpResponse::new(200, "{}")).is_ok());
        assert!(client().parse_delete_task(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_task(HttpResponse::new(404, "")).is_err());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:3000/").build_list_tasks();
        assert_eq!(req.url, "http://localhost:3000/todolist");

        let req = UserClient::new("http://localhost:8080/").build_list_users();
        assert_eq!(req.url, "http://localhost:8080/user");
    }

    #[test]
    fn parse_list_users_verbatim() {
        let users = UserClient::new("http://x")
            .parse_list_users(HttpResponse::new(
                200,
                r#"[{"id":1,"name":"An","email":"an@example.com","age":30}]"#,
            ))
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "an@example.com");
        assert_eq!(users[0].age, 30);
    }
}
