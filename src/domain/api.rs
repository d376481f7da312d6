use async_trait::async_trait;

use super::response::{Empty, GetTasksResponse, ItemData, ResponseEnvelope};
use super::task::{Task, UpdateTaskModel};
use super::todolist::Todolist;

/// The remote todolists service. An `Err` means the call failed at the
/// transport level; domain failures come back as `Ok` envelopes with a
/// non-zero result code.
#[async_trait]
pub trait TodolistsApi: Send + Sync + 'static {
    async fn get_todolists(&self) -> anyhow::Result<Vec<Todolist>>;
    async fn create_todolist(&self, title: &str) -> anyhow::Result<ResponseEnvelope<ItemData<Todolist>>>;
    async fn delete_todolist(&self, id: &str) -> anyhow::Result<ResponseEnvelope<Empty>>;
    async fn update_todolist(&self, id: &str, title: &str) -> anyhow::Result<ResponseEnvelope<Empty>>;
    async fn get_tasks(&self, todolist_id: &str) -> anyhow::Result<GetTasksResponse>;
    async fn create_task(&self, todolist_id: &str, title: &str) -> anyhow::Result<ResponseEnvelope<ItemData<Task>>>;
    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> anyhow::Result<ResponseEnvelope<Empty>>;
    async fn update_task(&self, todolist_id: &str, task_id: &str, model: &UpdateTaskModel) -> anyhow::Result<ResponseEnvelope<ItemData<Task>>>;
}
