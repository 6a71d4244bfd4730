//! State behind the read-only detail screen.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

pub const DELETED: &str = "Todo deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete the todo. Please try again.";

/// One record, displayed as-is. The record arrives through navigation from
/// the list screen; no refetch happens here.
#[derive(Debug, Clone)]
pub struct DetailsScreen {
    todo: Todo,
}

impl DetailsScreen {
    pub fn new(todo: Todo) -> Self {
        Self { todo }
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    /// Request deleting the displayed record.
    pub fn delete_request(&self, client: &TodoClient) -> HttpRequest {
        client.build_delete_todo(self.todo.id)
    }

    /// Fold the executed delete outcome. Success means the record is gone
    /// server-side and the caller navigates back; failure maps to
    /// [`DELETE_FAILED`] and nothing changes client-side.
    pub fn apply_delete(
        &self,
        client: &TodoClient,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        client.parse_delete_todo(outcome?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::types::Status;
    use uuid::Uuid;

    fn screen() -> DetailsScreen {
        DetailsScreen::new(Todo {
            id: Uuid::nil(),
            title: "Doomed".to_string(),
            details: "soon gone".to_string(),
            status: Status::Completed,
        })
    }

    #[test]
    fn delete_request_targets_the_displayed_record() {
        let req = screen().delete_request(&TodoClient::new("http://localhost:3000"));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn apply_delete_maps_outcomes() {
        let client = TodoClient::new("http://localhost:3000");
        let ok = screen().apply_delete(
            &client,
            Ok(HttpResponse {
                status: 204,
                headers: Vec::new(),
                body: String::new(),
            }),
        );
        assert!(ok.is_ok());

        let err = screen()
            .apply_delete(&client, Err(ApiError::Transport("reset".into())))
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
