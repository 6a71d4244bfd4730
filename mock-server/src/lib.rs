//! In-memory implementation of the todo API for tests.
//!
//! The schema mirrors the core crate's DTOs but is defined independently;
//! integration tests catch drift between the two. The list
//! endpoint implements the filter/search/sort semantics the real backend
//! is assumed to provide: blank parameters match all, `search` is a
//! case-insensitive substring match over title or details, and `order`
//! only matters together with `sort`.

use std::{collections::HashMap, str::FromStr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    #[serde(rename = "not started")]
    NotStarted,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not started" => Ok(Status::NotStarted),
            "in progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub details: String,
    pub status: Status,
}

#[derive(Deserialize)]
pub struct TodoInput {
    pub title: String,
    pub details: String,
    pub status: Status,
}

/// Envelope the list endpoint wraps its records in.
#[derive(Serialize, Deserialize)]
pub struct TodoPage {
    pub data: Vec<Todo>,
}

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Blank and whitespace-only parameters count as absent.
fn normalized(param: &Option<String>) -> Option<&str> {
    param.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

async fn list_todos(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<TodoPage>, StatusCode> {
    let todos = db.read().await;
    let mut items: Vec<Todo> = todos.values().cloned().collect();

    if let Some(raw) = normalized(&params.status) {
        let wanted: Status = raw.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        items.retain(|t| t.status == wanted);
    }

    if let Some(raw) = normalized(&params.search) {
        let needle = raw.to_lowercase();
        items.retain(|t| {
            t.title.to_lowercase().contains(&needle) || t.details.to_lowercase().contains(&needle)
        });
    }

    let sorted = match normalized(&params.sort) {
        Some("title") => {
            items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            true
        }
        Some("status") => {
            items.sort_by_key(|t| t.status);
            true
        }
        Some(_) => return Err(StatusCode::BAD_REQUEST),
        None => false,
    };

    match normalized(&params.order) {
        Some("desc") => {
            if sorted {
                items.reverse();
            }
        }
        Some("asc") | None => {}
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    }

    Ok(Json(TodoPage { data: items }))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        details: input.details,
        status: input.status,
    };
    db.write().await.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.details = input.details;
    todo.status = input.status;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
