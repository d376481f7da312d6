use std::sync::Arc;

use super::error_utils::{handle_server_app_error, handle_server_network_error};
use super::store::Store;
use crate::domain::api::TodolistsApi;
use crate::domain::state::{Action, RequestStatus};
use crate::domain::task::UpdateDomainTaskModel;

pub struct TasksService<A: TodolistsApi> {
    api: Arc<A>,
    store: Store,
}

impl<A: TodolistsApi> Clone for TasksService<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), store: self.store.clone() }
    }
}

impl<A: TodolistsApi> TasksService<A> {
    pub fn new(api: Arc<A>, store: Store) -> Self { Self { api, store } }

    /// Replaces the cached tasks of `todolist_id` with the server's.
    pub async fn fetch_tasks(&self, todolist_id: &str) {
        self.store.dispatch(Action::SetAppStatus(RequestStatus::Loading)).await;
        match self.api.get_tasks(todolist_id).await {
            Ok(res) => {
                tracing::info!(%todolist_id, count = res.items.len(), "tasks fetched");
                self.store
                    .dispatch(Action::SetTasks { todolist_id: todolist_id.to_string(), tasks: res.items })
                    .await;
                self.store.dispatch(Action::SetAppStatus(RequestStatus::Succeeded)).await;
            }
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    pub async fn add_task(&self, title: &str, todolist_id: &str) {
        self.store.dispatch(Action::SetAppStatus(RequestStatus::Loading)).await;
        match self.api.create_task(todolist_id, title).await {
            Ok(mut res) if res.is_success() => match res.data.item.take() {
                Some(task) => {
                    tracing::info!(id = %task.id, %todolist_id, "task created");
                    self.store.dispatch(Action::AddTask(task)).await;
                    self.store.dispatch(Action::SetAppStatus(RequestStatus::Succeeded)).await;
                }
                None => handle_server_app_error(&res, &self.store).await,
            },
            Ok(res) => handle_server_app_error(&res, &self.store).await,
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    pub async fn remove_task(&self, task_id: &str, todolist_id: &str) {
        match self.api.delete_task(todolist_id, task_id).await {
            Ok(res) => {
                if !res.is_success() {
                    tracing::warn!(%task_id, result_code = res.result_code, messages = ?res.messages, "task delete answered with non-zero result code");
                }
                self.store
                    .dispatch(Action::RemoveTask { task_id: task_id.to_string(), todolist_id: todolist_id.to_string() })
                    .await;
            }
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    /// Sends the cached task with `model` laid over it. A task missing from
    /// the cache aborts the update with a warning and touches nothing.
    pub async fn update_task(&self, task_id: &str, model: UpdateDomainTaskModel, todolist_id: &str) {
        let payload = self
            .store
            .select(|s| {
                s.tasks
                    .get(todolist_id)
                    .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
                    .map(|task| model.merge_onto(task))
            })
            .await;
        let Some(payload) = payload else {
            tracing::warn!(%task_id, %todolist_id, "task not found in the state");
            return;
        };

        match self.api.update_task(todolist_id, task_id, &payload).await {
            Ok(res) if res.is_success() => {
                self.store
                    .dispatch(Action::UpdateTask {
                        task_id: task_id.to_string(),
                        todolist_id: todolist_id.to_string(),
                        model,
                    })
                    .await;
            }
            Ok(res) => handle_server_app_error(&res, &self.store).await,
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }
}
