use serde::{Deserialize, Serialize};

use super::task::Task;

pub const RESULT_CODE_SUCCESS: i32 = 0;
pub const RESULT_CODE_ERROR: i32 = 1;

/// Wrapper the remote API puts around every write response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<D = Empty> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    pub data: D,
}

impl<D> ResponseEnvelope<D> {
    pub fn is_success(&self) -> bool {
        self.result_code == RESULT_CODE_SUCCESS
    }
}

impl<D: Default> ResponseEnvelope<D> {
    pub fn success(data: D) -> Self {
        Self { result_code: RESULT_CODE_SUCCESS, messages: Vec::new(), data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { result_code: RESULT_CODE_ERROR, messages: vec![message.into()], data: D::default() }
    }
}

/// `data` payload of create/update responses. Failed envelopes carry `{}`,
/// hence the optional item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemData<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
}

impl<T> Default for ItemData<T> {
    fn default() -> Self { Self { item: None } }
}

impl<T> ItemData<T> {
    pub fn new(item: T) -> Self { Self { item: Some(item) } }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksResponse {
    pub items: Vec<Task>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub error: Option<String>,
}
