//! State behind the todo list screen.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{ListQuery, SortField, SortOrder};
use crate::types::{Status, Todo};

/// Alert text for any failed fetch. Transport failures and server
/// rejections read the same to the user.
pub const FETCH_FAILED: &str = "Failed to load todos. Please try again later.";

/// Current filter selections plus the last successfully fetched collection.
///
/// The collection only changes through `apply_refresh`; every query setter
/// leaves it as-is until the caller refetches. Callers refetch after each
/// setter and whenever the screen regains focus, so mutations performed on
/// other screens are picked up.
#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    query: ListQuery,
    todos: Vec<Todo>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) {
        self.query.status = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.query.sort = sort;
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.query.order = order;
    }

    /// Request for (re)loading the collection under the current selections.
    pub fn refresh_request(&self, client: &TodoClient) -> HttpRequest {
        client.build_list_todos(&self.query)
    }

    /// Fold an executed refresh back into the screen.
    ///
    /// On success the collection is replaced wholesale. On failure it stays
    /// exactly as it was (no partial update) and the caller shows
    /// [`FETCH_FAILED`].
    pub fn apply_refresh(
        &mut self,
        client: &TodoClient,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        let todos = outcome.and_then(|response| client.parse_list_todos(response))?;
        self.todos = todos;
        Ok(())
    }
}
