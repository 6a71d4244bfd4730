//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently; integration tests catch any schema drift between the two
//! crates. `TodoDraft` serves both create and update — the form submits the
//! identical full body on POST and PUT, with the server assigning or
//! preserving the identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Progress state of a todo.
///
/// Serialized with the exact wire spellings the API uses. Declaration order
/// is the sort rank: not started < in progress < completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "not started")]
    NotStarted,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    /// Wire spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not started",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input was not one of the three status spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not started" => Ok(Status::NotStarted),
            "in progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// A single todo record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub details: String,
    pub status: Status,
}

/// Request payload for creating or updating a todo. Carries no identifier;
/// the target of an update is named in the request path instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub details: String,
    pub status: Status,
}

/// Envelope the list endpoint wraps its records in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPage {
    pub data: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_wire_spelling() {
        let json = serde_json::to_value(Status::NotStarted).unwrap();
        assert_eq!(json, "not started");
        let json = serde_json::to_value(Status::InProgress).unwrap();
        assert_eq!(json, "in progress");
    }

    #[test]
    fn status_parses_ignoring_case_and_padding() {
        assert_eq!(" Completed ".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("IN PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "done".parse::<Status>().unwrap_err();
        assert_eq!(err, ParseStatusError("done".to_string()));
    }

    #[test]
    fn status_rank_follows_progress() {
        assert!(Status::NotStarted < Status::InProgress);
        assert!(Status::InProgress < Status::Completed);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: "Buy milk".to_string(),
            details: "2%".to_string(),
            status: Status::NotStarted,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_rejects_unknown_status() {
        let result: Result<Todo, _> = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","title":"x","details":"y","status":"done"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn page_envelope_unwraps_records() {
        let page: TodoPage = serde_json::from_str(
            r#"{"data":[{"id":"00000000-0000-0000-0000-000000000001","title":"Test","details":"d","status":"completed"}]}"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].status, Status::Completed);
    }
}
