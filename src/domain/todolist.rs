use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::state::RequestStatus;

/// A todo list as the remote API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    pub added_date: NaiveDateTime,
    pub order: i32,
}

/// Client-only view filter for the tasks of one list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterValue {
    pub fn next(self) -> Self {
        match self {
            FilterValue::All => FilterValue::Active,
            FilterValue::Active => FilterValue::Completed,
            FilterValue::Completed => FilterValue::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterValue::All => "All",
            FilterValue::Active => "Active",
            FilterValue::Completed => "Completed",
        }
    }
}

/// A cached list: the server record plus the annotations the client keeps
/// for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodolistDomain {
    pub id: String,
    pub title: String,
    pub added_date: NaiveDateTime,
    pub order: i32,
    pub filter: FilterValue,
    pub entity_status: RequestStatus,
}

impl From<Todolist> for TodolistDomain {
    fn from(t: Todolist) -> Self {
        Self {
            id: t.id,
            title: t.title,
            added_date: t.added_date,
            order: t.order,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBody {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record_without_timezone() {
        let raw = r#"{"id":"a1","title":"Groceries","addedDate":"2019-07-30T12:24:15.063","order":-1}"#;
        let t: Todolist = serde_json::from_str(raw).unwrap();
        assert_eq!(t.id, "a1");
        assert_eq!(t.order, -1);
        assert_eq!(t.added_date.format("%Y-%m-%d").to_string(), "2019-07-30");
    }

    #[test]
    fn domain_defaults_to_all_and_idle() {
        let raw = r#"{"id":"a1","title":"Groceries","addedDate":"2019-07-30T12:24:15","order":0}"#;
        let t: Todolist = serde_json::from_str(raw).unwrap();
        let d = TodolistDomain::from(t);
        assert_eq!(d.filter, FilterValue::All);
        assert_eq!(d.entity_status, RequestStatus::Idle);
    }

    #[test]
    fn filter_cycles_through_all_values() {
        assert_eq!(FilterValue::All.next(), FilterValue::Active);
        assert_eq!(FilterValue::Active.next(), FilterValue::Completed);
        assert_eq!(FilterValue::Completed.next(), FilterValue::All);
    }
}
