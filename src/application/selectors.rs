use crate::domain::state::{RequestStatus, RootState, TasksState};
use crate::domain::task::{Task, TaskStatus};
use crate::domain::todolist::{FilterValue, TodolistDomain};

pub fn select_status(state: &RootState) -> RequestStatus { state.app.status }

pub fn select_error(state: &RootState) -> Option<&str> { state.app.error.as_deref() }

pub fn select_is_initialized(state: &RootState) -> bool { state.app.is_initialized }

pub fn select_todolists(state: &RootState) -> &[TodolistDomain] { &state.todolists }

pub fn select_tasks(state: &RootState) -> &TasksState { &state.tasks }

pub fn select_tasks_for<'a>(state: &'a RootState, todolist_id: &str) -> &'a [Task] {
    state.tasks.get(todolist_id).map(Vec::as_slice).unwrap_or_default()
}

/// Tasks of one list, narrowed by that list's filter.
pub fn select_filtered_tasks<'a>(state: &'a RootState, todolist_id: &str) -> Vec<&'a Task> {
    let filter = state
        .todolists
        .iter()
        .find(|tl| tl.id == todolist_id)
        .map(|tl| tl.filter)
        .unwrap_or_default();
    select_tasks_for(state, todolist_id)
        .iter()
        .filter(|t| match filter {
            FilterValue::All => true,
            FilterValue::Active => t.status != TaskStatus::Completed,
            FilterValue::Completed => t.status == TaskStatus::Completed,
        })
        .collect()
}
