use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::api::TodolistsApi;
use crate::domain::response::{Empty, GetTasksResponse, ItemData, ResponseEnvelope, RESULT_CODE_ERROR};
use crate::domain::task::{Task, TaskPriority, TaskStatus, UpdateTaskModel};
use crate::domain::todolist::Todolist;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetTodolists,
    CreateTodolist(String),
    DeleteTodolist(String),
    UpdateTodolist(String, String),
    GetTasks(String),
    CreateTask(String, String),
    DeleteTask(String, String),
    UpdateTask(String, String, UpdateTaskModel),
}

#[derive(Default)]
struct Inner {
    todolists: Vec<Todolist>,
    tasks: HashMap<String, Vec<Task>>,
    transport_failure: Option<String>,
    rejection: Option<Vec<String>>,
    calls: Vec<Call>,
    next_id: u32,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

pub fn list(id: &str, title: &str) -> Todolist {
    Todolist { id: id.into(), title: title.into(), added_date: date(), order: 0 }
}

pub fn task(id: &str, todolist_id: &str, title: &str) -> Task {
    Task {
        id: id.into(),
        todo_list_id: todolist_id.into(),
        title: title.into(),
        description: None,
        status: TaskStatus::New,
        priority: TaskPriority::Middle,
        start_date: None,
        deadline: None,
        order: 0,
        added_date: date(),
    }
}

fn date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
}

impl FakeApi {
    pub fn with_lists(lists: Vec<Todolist>) -> Self {
        let api = Self::default();
        {
            let mut inner = api.inner.lock().unwrap();
            for l in &lists {
                inner.tasks.insert(l.id.clone(), Vec::new());
            }
            inner.todolists = lists;
        }
        api
    }

    pub fn with_tasks(self, todolist_id: &str, tasks: Vec<Task>) -> Self {
        self.inner.lock().unwrap().tasks.insert(todolist_id.to_string(), tasks);
        self
    }

    /// The next call fails at the transport level.
    pub fn fail_next(&self, message: &str) {
        self.inner.lock().unwrap().transport_failure = Some(message.to_string());
    }

    /// The next write answers with a non-zero result code.
    pub fn reject_next(&self, messages: &[&str]) {
        self.inner.lock().unwrap().rejection = Some(messages.iter().map(|m| m.to_string()).collect());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn begin(&self, call: Call) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        match inner.transport_failure.take() {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        }
    }

    fn rejection<D: Default>(&self) -> Option<ResponseEnvelope<D>> {
        self.inner.lock().unwrap().rejection.take().map(|messages| ResponseEnvelope {
            result_code: RESULT_CODE_ERROR,
            messages,
            data: D::default(),
        })
    }
}

#[async_trait]
impl TodolistsApi for FakeApi {
    async fn get_todolists(&self) -> Result<Vec<Todolist>> {
        self.begin(Call::GetTodolists)?;
        Ok(self.inner.lock().unwrap().todolists.clone())
    }

    async fn create_todolist(&self, title: &str) -> Result<ResponseEnvelope<ItemData<Todolist>>> {
        self.begin(Call::CreateTodolist(title.to_string()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let created = list(&format!("list-{}", inner.next_id), title);
        inner.todolists.insert(0, created.clone());
        inner.tasks.insert(created.id.clone(), Vec::new());
        Ok(ResponseEnvelope::success(ItemData::new(created)))
    }

    async fn delete_todolist(&self, id: &str) -> Result<ResponseEnvelope<Empty>> {
        self.begin(Call::DeleteTodolist(id.to_string()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        let mut inner = self.inner.lock().unwrap();
        inner.todolists.retain(|l| l.id != id);
        inner.tasks.remove(id);
        Ok(ResponseEnvelope::success(Empty {}))
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<ResponseEnvelope<Empty>> {
        self.begin(Call::UpdateTodolist(id.to_string(), title.to_string()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        Ok(ResponseEnvelope::success(Empty {}))
    }

    async fn get_tasks(&self, todolist_id: &str) -> Result<GetTasksResponse> {
        self.begin(Call::GetTasks(todolist_id.to_string()))?;
        let items = self.inner.lock().unwrap().tasks.get(todolist_id).cloned().unwrap_or_default();
        Ok(GetTasksResponse { total_count: items.len() as i64, items, error: None })
    }

    async fn create_task(&self, todolist_id: &str, title: &str) -> Result<ResponseEnvelope<ItemData<Task>>> {
        self.begin(Call::CreateTask(todolist_id.to_string(), title.to_string()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let created = task(&format!("task-{}", inner.next_id), todolist_id, title);
        inner.tasks.entry(todolist_id.to_string()).or_default().insert(0, created.clone());
        Ok(ResponseEnvelope::success(ItemData::new(created)))
    }

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> Result<ResponseEnvelope<Empty>> {
        self.begin(Call::DeleteTask(todolist_id.to_string(), task_id.to_string()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        Ok(ResponseEnvelope::success(Empty {}))
    }

    async fn update_task(&self, todolist_id: &str, task_id: &str, model: &UpdateTaskModel) -> Result<ResponseEnvelope<ItemData<Task>>> {
        self.begin(Call::UpdateTask(todolist_id.to_string(), task_id.to_string(), model.clone()))?;
        if let Some(rejected) = self.rejection() { return Ok(rejected); }
        let mut updated = task(task_id, todolist_id, &model.title);
        updated.status = model.status;
        updated.priority = model.priority;
        updated.description = model.description.clone();
        Ok(ResponseEnvelope::success(ItemData::new(updated)))
    }
}
