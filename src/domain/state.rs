//! Reducers. Actions touching both lists and tasks update both in one `apply`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::task::{Task, UpdateDomainTaskModel};
use super::todolist::{FilterValue, Todolist, TodolistDomain};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub status: RequestStatus,
    pub error: Option<String>,
    pub is_initialized: bool,
}

/// Tasks keyed by the id of the list they belong to.
pub type TasksState = HashMap<String, Vec<Task>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAppStatus(RequestStatus),
    SetAppError(Option<String>),
    SetAppInitialized(bool),
    SetTodolists(Vec<Todolist>),
    AddTodolist(Todolist),
    RemoveTodolist { id: String },
    ChangeTodolistTitle { id: String, title: String },
    ChangeTodolistFilter { id: String, filter: FilterValue },
    ChangeTodolistEntityStatus { id: String, entity_status: RequestStatus },
    ClearState,
    SetTasks { todolist_id: String, tasks: Vec<Task> },
    AddTask(Task),
    RemoveTask { task_id: String, todolist_id: String },
    UpdateTask { task_id: String, todolist_id: String, model: UpdateDomainTaskModel },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub app: AppState,
    pub todolists: Vec<TodolistDomain>,
    pub tasks: TasksState,
}

impl RootState {
    pub fn apply(&mut self, action: Action) {
        reduce_app(&mut self.app, &action);
        reduce_tasks(&mut self.tasks, &action);
        reduce_todolists(&mut self.todolists, action);
    }
}

fn reduce_app(state: &mut AppState, action: &Action) {
    match action {
        Action::SetAppStatus(status) => state.status = *status,
        Action::SetAppError(error) => state.error = error.clone(),
        Action::SetAppInitialized(v) => state.is_initialized = *v,
        _ => {}
    }
}

fn reduce_todolists(state: &mut Vec<TodolistDomain>, action: Action) {
    match action {
        Action::SetTodolists(lists) => {
            *state = lists.into_iter().map(TodolistDomain::from).collect();
        }
        Action::AddTodolist(list) => state.insert(0, list.into()),
        Action::RemoveTodolist { id } => state.retain(|tl| tl.id != id),
        Action::ChangeTodolistTitle { id, title } => {
            if let Some(tl) = state.iter_mut().find(|tl| tl.id == id) { tl.title = title; }
        }
        Action::ChangeTodolistFilter { id, filter } => {
            if let Some(tl) = state.iter_mut().find(|tl| tl.id == id) { tl.filter = filter; }
        }
        Action::ChangeTodolistEntityStatus { id, entity_status } => {
            if let Some(tl) = state.iter_mut().find(|tl| tl.id == id) { tl.entity_status = entity_status; }
        }
        Action::ClearState => state.clear(),
        _ => {}
    }
}

fn reduce_tasks(state: &mut TasksState, action: &Action) {
    match action {
        Action::SetTodolists(lists) => {
            *state = lists.iter().map(|tl| (tl.id.clone(), Vec::new())).collect();
        }
        Action::AddTodolist(list) => {
            state.insert(list.id.clone(), Vec::new());
        }
        Action::RemoveTodolist { id } => {
            state.remove(id);
        }
        Action::ClearState => state.clear(),
        Action::SetTasks { todolist_id, tasks } => match state.get_mut(todolist_id) {
            Some(entry) => *entry = tasks.clone(),
            None => tracing::debug!(%todolist_id, "tasks arrived for a list that is no longer cached"),
        },
        Action::AddTask(task) => match state.get_mut(&task.todo_list_id) {
            Some(entry) => entry.insert(0, task.clone()),
            None => tracing::debug!(todolist_id = %task.todo_list_id, "task added to a list that is no longer cached"),
        },
        Action::RemoveTask { task_id, todolist_id } => {
            if let Some(entry) = state.get_mut(todolist_id) { entry.retain(|t| &t.id != task_id); }
        }
        Action::UpdateTask { task_id, todolist_id, model } => {
            if let Some(task) = state.get_mut(todolist_id).and_then(|tasks| tasks.iter_mut().find(|t| &t.id == task_id)) {
                model.apply_to(task);
            }
        }
        _ => {}
    }
}
