use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::response::{Empty, GetTasksResponse, ItemData, ResponseEnvelope};
use crate::domain::task::{Task, TaskPriority, TaskStatus, UpdateTaskModel};
use crate::domain::todolist::{TitleBody, Todolist};
use crate::http::types::{validate_title, NotFound};

#[derive(Default)]
pub struct Tables {
    pub todolists: Vec<Todolist>,
    pub tasks: HashMap<String, Vec<Task>>,
}

pub type Db = Arc<RwLock<Tables>>;

#[derive(Clone, Default)]
pub struct AppState { pub db: Db }

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todo-lists", get(list_todolists).post(create_todolist))
        .route("/todo-lists/:id", put(update_todolist).delete(delete_todolist))
        .route("/todo-lists/:id/tasks", get(list_tasks).post(create_task))
        .route("/todo-lists/:id/tasks/:task_id", put(update_task).delete(delete_task))
        .with_state(state)
}

fn now() -> chrono::NaiveDateTime { chrono::Utc::now().naive_utc() }

fn next_order<'a>(orders: impl Iterator<Item = &'a i32>) -> i32 { orders.min().map_or(0, |o| o - 1) }

async fn list_todolists(State(state): State<AppState>) -> Json<Vec<Todolist>> {
    Json(state.db.read().await.todolists.clone())
}

async fn create_todolist(State(state): State<AppState>, Json(body): Json<TitleBody>) -> Json<ResponseEnvelope<ItemData<Todolist>>> {
    if let Some(msg) = validate_title(&body.title, "Todolist") {
        return Json(ResponseEnvelope::failure(msg));
    }
    let mut db = state.db.write().await;
    let todolist = Todolist {
        id: Uuid::new_v4().to_string(),
        title: body.title,
        added_date: now(),
        order: next_order(db.todolists.iter().map(|t| &t.order)),
    };
    db.tasks.insert(todolist.id.clone(), Vec::new());
    db.todolists.insert(0, todolist.clone());
    tracing::info!(id = %todolist.id, "todolist created");
    Json(ResponseEnvelope::success(ItemData::new(todolist)))
}

async fn update_todolist(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<TitleBody>) -> Json<ResponseEnvelope> {
    if let Some(msg) = validate_title(&body.title, "Todolist") {
        return Json(ResponseEnvelope::failure(msg));
    }
    let mut db = state.db.write().await;
    match db.todolists.iter_mut().find(|t| t.id == id) {
        Some(t) => {
            t.title = body.title;
            Json(ResponseEnvelope::success(Empty {}))
        }
        None => Json(ResponseEnvelope::failure("Todolist not found")),
    }
}

async fn delete_todolist(State(state): State<AppState>, Path(id): Path<String>) -> Json<ResponseEnvelope> {
    let mut db = state.db.write().await;
    let before = db.todolists.len();
    db.todolists.retain(|t| t.id != id);
    if db.todolists.len() == before {
        return Json(ResponseEnvelope::failure("Todolist not found"));
    }
    db.tasks.remove(&id);
    tracing::info!(%id, "todolist deleted");
    Json(ResponseEnvelope::success(Empty {}))
}

async fn list_tasks(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<GetTasksResponse>, NotFound> {
    let db = state.db.read().await;
    let items = db.tasks.get(&id).cloned().ok_or_else(|| NotFound { message: "Todolist not found".into() })?;
    Ok(Json(GetTasksResponse { total_count: items.len() as i64, items, error: None }))
}

async fn create_task(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<TitleBody>) -> Json<ResponseEnvelope<ItemData<Task>>> {
    if let Some(msg) = validate_title(&body.title, "Task") {
        return Json(ResponseEnvelope::failure(msg));
    }
    let mut db = state.db.write().await;
    let Some(tasks) = db.tasks.get_mut(&id) else {
        return Json(ResponseEnvelope::failure("Todolist not found"));
    };
    let task = Task {
        id: Uuid::new_v4().to_string(),
        todo_list_id: id,
        title: body.title,
        description: None,
        status: TaskStatus::New,
        priority: TaskPriority::Low,
        start_date: None,
        deadline: None,
        order: next_order(tasks.iter().map(|t| &t.order)),
        added_date: now(),
    };
    tasks.insert(0, task.clone());
    Json(ResponseEnvelope::success(ItemData::new(task)))
}

async fn update_task(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(String, String)>,
    Json(model): Json<UpdateTaskModel>,
) -> Json<ResponseEnvelope<ItemData<Task>>> {
    if let Some(msg) = validate_title(&model.title, "Task") {
        return Json(ResponseEnvelope::failure(msg));
    }
    let mut db = state.db.write().await;
    let Some(task) = db.tasks.get_mut(&id).and_then(|tasks| tasks.iter_mut().find(|t| t.id == task_id)) else {
        return Json(ResponseEnvelope::failure("Task not found"));
    };
    task.title = model.title;
    task.description = model.description;
    task.status = model.status;
    task.priority = model.priority;
    task.start_date = model.start_date;
    task.deadline = model.deadline;
    Json(ResponseEnvelope::success(ItemData::new(task.clone())))
}

async fn delete_task(State(state): State<AppState>, Path((id, task_id)): Path<(String, String)>) -> Json<ResponseEnvelope> {
    let mut db = state.db.write().await;
    let Some(tasks) = db.tasks.get_mut(&id) else {
        return Json(ResponseEnvelope::failure("Todolist not found"));
    };
    let before = tasks.len();
    tasks.retain(|t| t.id != task_id);
    if tasks.len() == before {
        return Json(ResponseEnvelope::failure("Task not found"));
    }
    Json(ResponseEnvelope::success(Empty {}))
}
