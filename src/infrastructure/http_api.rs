use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::domain::api::TodolistsApi;
use crate::domain::response::{Empty, GetTasksResponse, ItemData, ResponseEnvelope};
use crate::domain::task::{Task, UpdateTaskModel};
use crate::domain::todolist::{TitleBody, Todolist};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {path} failed")]
    Request { path: String, #[source] source: reqwest::Error },
    #[error("unexpected HTTP {status} from {path}: {body}")]
    Status { path: String, status: u16, body: String },
    #[error("could not decode response from {path}")]
    Decode { path: String, #[source] source: reqwest::Error },
}

#[derive(Clone)]
pub struct HttpTodolistsApi {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTodolistsApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}/{}", self.base_url, path));
        match &self.api_key {
            Some(key) => builder.header("API-KEY", key),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, builder: RequestBuilder) -> Result<T> {
        tracing::debug!(%path, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Request { path: path.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            }
            .into());
        }

        let parsed = response
            .json()
            .await
            .map_err(|source| TransportError::Decode { path: path.to_string(), source })?;
        Ok(parsed)
    }
}

#[async_trait]
impl TodolistsApi for HttpTodolistsApi {
    async fn get_todolists(&self) -> Result<Vec<Todolist>> {
        let path = "todo-lists";
        self.send(path, self.request(Method::GET, path)).await
    }

    async fn create_todolist(&self, title: &str) -> Result<ResponseEnvelope<ItemData<Todolist>>> {
        let path = "todo-lists";
        let body = TitleBody { title: title.to_string() };
        self.send(path, self.request(Method::POST, path).json(&body)).await
    }

    async fn delete_todolist(&self, id: &str) -> Result<ResponseEnvelope<Empty>> {
        let path = format!("todo-lists/{id}");
        self.send(&path, self.request(Method::DELETE, &path)).await
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<ResponseEnvelope<Empty>> {
        let path = format!("todo-lists/{id}");
        let body = TitleBody { title: title.to_string() };
        self.send(&path, self.request(Method::PUT, &path).json(&body)).await
    }

    async fn get_tasks(&self, todolist_id: &str) -> Result<GetTasksResponse> {
        let path = format!("todo-lists/{todolist_id}/tasks");
        self.send(&path, self.request(Method::GET, &path)).await
    }

    async fn create_task(&self, todolist_id: &str, title: &str) -> Result<ResponseEnvelope<ItemData<Task>>> {
        let path = format!("todo-lists/{todolist_id}/tasks");
        let body = TitleBody { title: title.to_string() };
        self.send(&path, self.request(Method::POST, &path).json(&body)).await
    }

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> Result<ResponseEnvelope<Empty>> {
        let path = format!("todo-lists/{todolist_id}/tasks/{task_id}");
        self.send(&path, self.request(Method::DELETE, &path)).await
    }

    async fn update_task(&self, todolist_id: &str, task_id: &str, model: &UpdateTaskModel) -> Result<ResponseEnvelope<ItemData<Task>>> {
        let path = format!("todo-lists/{todolist_id}/tasks/{task_id}");
        self.send(&path, self.request(Method::PUT, &path).json(model)).await
    }
}
