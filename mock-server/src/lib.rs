//! In-memory backend for the todo and user views.
//!
//! Task records are kept as JSON objects in insertion order, so tests can
//! seed the legacy shapes (`name` instead of `task`, `"hoan thanh"` instead
//! of `true`) the views have to tolerate.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Initial contents of the store.
#[derive(Clone, Debug, Default)]
pub struct Seed {
    pub users: Vec<User>,
    pub todos: Vec<Value>,
}

impl Seed {
    /// A few users and no tasks.
    pub fn demo() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "Nguyen Van An".to_string(),
                    email: "an@example.com".to_string(),
                    age: 28,
                },
                User {
                    id: 2,
                    name: "Tran Thi Binh".to_string(),
                    email: "binh@example.com".to_string(),
                    age: 34,
                },
                User {
                    id: 3,
                    name: "Le Van Cuong".to_string(),
                    email: "cuong@example.com".to_string(),
                    age: 22,
                },
            ],
            todos: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    todos: Vec<Map<String, Value>>,
}

pub type Db = Arc<RwLock<Store>>;

fn record_id(record: &Map<String, Value>) -> Option<i64> {
    match record.get("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub fn app() -> Router {
    app_with(Seed::demo())
}

pub fn app_with(seed: Seed) -> Router {
    let todos = seed
        .todos
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();
    let db: Db = Arc::new(RwLock::new(Store {
        users: seed.users,
        todos,
    }));
    Router::new()
        .route("/user", get(list_users))
        .route("/todolist", get(list_todos).post(create_todo))
        .route(
            "/todolist/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Seed::demo()).await
}

pub async fn run_with(listener: TcpListener, seed: Seed) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users.clone())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Map<String, Value>>> {
    Json(db.read().await.todos.clone())
}

/// Keeps the client's id when it sent one; otherwise assigns `max + 1`,
/// refusing with 422 once ids are exhausted.
async fn create_todo(
    State(db): State<Db>,
    Json(mut input): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Map<String, Value>>), StatusCode> {
    let mut store = db.write().await;
    let id = match record_id(&input) {
        Some(id) => id,
        None if input.contains_key("id") => return Err(StatusCode::UNPROCESSABLE_ENTITY),
        None => match store.todos.iter().filter_map(record_id).max().unwrap_or(0).checked_add(1) {
            Some(id) => id,
            None => return Err(StatusCode::UNPROCESSABLE_ENTITY),
        },
    };
    if store.todos.iter().any(|t| record_id(t) == Some(id)) {
        return Err(StatusCode::CONFLICT);
    }
    input.insert("id".to_string(), json!(id));
    store.todos.push(input.clone());
    info!(id, "todo created");
    Ok((StatusCode::CREATED, Json(input)))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Map<String, Value>>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|t| record_id(t) == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Replaces the whole record; the path id wins over any id in the body.
async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(mut input): Json<Map<String, Value>>,
) -> Result<Json<Map<String, Value>>, StatusCode> {
    let mut store = db.write().await;
    let slot = store
        .todos
        .iter_mut()
        .find(|t| record_id(t) == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    input.insert("id".to_string(), json!(id));
    *slot = input.clone();
    Ok(Json(input))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let index = store
        .todos
        .iter()
        .position(|t| record_id(t) == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    store.todos.remove(index);
    info!(id, "todo deleted");
    Ok(Json(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn record_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(record_id(&record(json!({"id": 7}))), Some(7));
        assert_eq!(record_id(&record(json!({"id": "12"}))), Some(12));
        assert_eq!(record_id(&record(json!({"id": "x"}))), None);
        assert_eq!(record_id(&record(json!({"task": "no id"}))), None);
    }

    #[test]
    fn user_serializes_all_fields() {
        let user = User {
            id: 1,
            name: "An".to_string(),
            email: "an@example.com".to_string(),
            age: 30,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, json!({"id":1,"name":"An","email":"an@example.com","age":30}));
    }

    #[test]
    fn demo_seed_has_users_and_no_todos() {
        let seed = Seed::demo();
        assert_eq!(seed.users.len(), 3);
        assert!(seed.todos.is_empty());
    }
}
