use std::sync::Arc;

use super::error_utils::{handle_server_app_error, handle_server_network_error};
use super::store::Store;
use crate::domain::api::TodolistsApi;
use crate::domain::state::{Action, RequestStatus};
use crate::domain::todolist::FilterValue;

/// Intents on todo lists. Each one talks to the remote API and records the
/// outcome in the store; failures end up in the app status, not in a
/// return value.
pub struct TodolistsService<A: TodolistsApi> {
    api: Arc<A>,
    store: Store,
}

impl<A: TodolistsApi> Clone for TodolistsService<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), store: self.store.clone() }
    }
}

impl<A: TodolistsApi> TodolistsService<A> {
    pub fn new(api: Arc<A>, store: Store) -> Self { Self { api, store } }

    pub async fn fetch_todolists(&self) {
        self.store.dispatch(Action::SetAppStatus(RequestStatus::Loading)).await;
        match self.api.get_todolists().await {
            Ok(todolists) => {
                tracing::info!(count = todolists.len(), "todolists fetched");
                self.store.dispatch(Action::SetTodolists(todolists)).await;
                self.store.dispatch(Action::SetAppStatus(RequestStatus::Succeeded)).await;
            }
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    pub async fn add_todolist(&self, title: &str) {
        self.store.dispatch(Action::SetAppStatus(RequestStatus::Loading)).await;
        match self.api.create_todolist(title).await {
            Ok(mut res) if res.is_success() => match res.data.item.take() {
                Some(todolist) => {
                    tracing::info!(id = %todolist.id, "todolist created");
                    self.store.dispatch(Action::AddTodolist(todolist)).await;
                    self.store.dispatch(Action::SetAppStatus(RequestStatus::Succeeded)).await;
                }
                None => handle_server_app_error(&res, &self.store).await,
            },
            Ok(res) => handle_server_app_error(&res, &self.store).await,
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    /// The delete response's result code is not checked: the list is
    /// dropped from the cache whenever the server answers.
    pub async fn remove_todolist(&self, id: &str) {
        self.store.dispatch(Action::SetAppStatus(RequestStatus::Loading)).await;
        self.change_entity_status(id, RequestStatus::Loading).await;
        match self.api.delete_todolist(id).await {
            Ok(res) => {
                if !res.is_success() {
                    tracing::warn!(%id, result_code = res.result_code, messages = ?res.messages, "delete answered with non-zero result code");
                }
                self.store.dispatch(Action::RemoveTodolist { id: id.to_string() }).await;
                self.store.dispatch(Action::SetAppStatus(RequestStatus::Succeeded)).await;
            }
            Err(e) => {
                self.change_entity_status(id, RequestStatus::Idle).await;
                handle_server_network_error(&e, &self.store).await;
            }
        }
    }

    /// Like removal, the rename response is applied without checking its
    /// result code, and the app status is left alone.
    pub async fn change_todolist_title(&self, id: &str, title: &str) {
        match self.api.update_todolist(id, title).await {
            Ok(res) => {
                if !res.is_success() {
                    tracing::warn!(%id, result_code = res.result_code, messages = ?res.messages, "rename answered with non-zero result code");
                }
                self.store
                    .dispatch(Action::ChangeTodolistTitle { id: id.to_string(), title: title.to_string() })
                    .await;
            }
            Err(e) => handle_server_network_error(&e, &self.store).await,
        }
    }

    pub async fn change_filter(&self, id: &str, filter: FilterValue) {
        self.store.dispatch(Action::ChangeTodolistFilter { id: id.to_string(), filter }).await;
    }

    pub async fn change_entity_status(&self, id: &str, entity_status: RequestStatus) {
        self.store
            .dispatch(Action::ChangeTodolistEntityStatus { id: id.to_string(), entity_status })
            .await;
    }

    /// Drops every cached list and task, e.g. when the user signs out.
    pub async fn clear(&self) {
        self.store.dispatch(Action::ClearState).await;
    }
}
