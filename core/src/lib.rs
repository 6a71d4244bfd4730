//! Deterministic core of the todo front-end.
//!
//! # Overview
//! Everything the application decides lives here: which request a screen
//! issues, how a response mutates screen state, which form submissions are
//! allowed. Nothing touches the network (host-does-IO pattern); the
//! `todo-app` crate executes the actual HTTP round-trips.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `screen` holds one plain state object per screen (list, details,
//!   form); screens emit requests and fold executed outcomes back in.
//! - `query` renders the list screen's filter/search/sort selections into
//!   query pairs, omitting every unset dimension.
//! - `validate` is the form's rule table: `{field, predicate, message}`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod screen;
pub mod types;
pub mod validate;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{ListQuery, SortField, SortOrder};
pub use screen::{DetailsScreen, FormScreen, ListScreen, Submission};
pub use types::{Status, Todo, TodoDraft, TodoPage};
pub use validate::{Field, FieldError, FormValues};
