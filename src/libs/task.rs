use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status values as they are stored in the database.
pub const STATUS_PENDING: &str = "Pendente";
pub const STATUS_COMPLETED: &str = "Concluida";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => STATUS_PENDING,
            TaskStatus::Completed => STATUS_COMPLETED,
        }
    }

    /// The opposite status, used when toggling a task.
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendente" | "pending" => Ok(TaskStatus::Pending),
            "concluida" | "completed" | "done" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status: {}", other)),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()
            .and_then(|s| s.parse().map_err(|e: String| FromSqlError::Other(e.into())))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(title: &str, description: &str, status: TaskStatus) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            status,
        }
    }
}

/// Search criteria for the task list. Both axes are optional: an absent
/// query matches every row and an absent status applies no status filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub query: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// The search query, normalized so that an empty string behaves
    /// exactly like no query at all.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.query().is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(STATUS_PENDING.parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!(STATUS_COMPLETED.parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Pending.to_string(), STATUS_PENDING);
        assert!("Cancelada".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_empty_query_is_no_query() {
        let filter = TaskFilter {
            query: Some(String::new()),
            status: None,
        };
        assert_eq!(filter.query(), None);
        assert!(filter.is_empty());
    }
}
