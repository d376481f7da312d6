use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    New,
    InProgress,
    Completed,
    Draft,
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TaskStatus::New),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Draft),
            other => Err(format!("unknown task status {other}")),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(s: TaskStatus) -> u8 {
        match s {
            TaskStatus::New => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Draft => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    Low,
    Middle,
    Hi,
    Urgently,
    Later,
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::Middle),
            2 => Ok(TaskPriority::Hi),
            3 => Ok(TaskPriority::Urgently),
            4 => Ok(TaskPriority::Later),
            other => Err(format!("unknown task priority {other}")),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(p: TaskPriority) -> u8 {
        match p {
            TaskPriority::Low => 0,
            TaskPriority::Middle => 1,
            TaskPriority::Hi => 2,
            TaskPriority::Urgently => 3,
            TaskPriority::Later => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub todo_list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
    pub order: i32,
    pub added_date: NaiveDateTime,
}

/// Payload of the task update endpoint. The remote API replaces the whole
/// record, so every field is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskModel {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
}

/// Caller-supplied delta for a task. `None` keeps the cached value.
///
/// Covered fields: `title`, `description`, `status`, `priority`,
/// `start_date`, `deadline`. A nullable field can be set but not cleared
/// through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDomainTaskModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
}

impl UpdateDomainTaskModel {
    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    /// Full update payload: the cached task's fields with this delta laid
    /// over them.
    pub fn merge_onto(&self, task: &Task) -> UpdateTaskModel {
        UpdateTaskModel {
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            description: self.description.clone().or_else(|| task.description.clone()),
            status: self.status.unwrap_or(task.status),
            priority: self.priority.unwrap_or(task.priority),
            start_date: self.start_date.or(task.start_date),
            deadline: self.deadline.or(task.deadline),
        }
    }

    /// Writes the delta into a cached task in place.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(t) = &self.title { task.title = t.clone(); }
        if let Some(d) = &self.description { task.description = Some(d.clone()); }
        if let Some(s) = self.status { task.status = s; }
        if let Some(p) = self.priority { task.priority = p; }
        if let Some(d) = self.start_date { task.start_date = Some(d); }
        if let Some(d) = self.deadline { task.deadline = Some(d); }
    }
}
