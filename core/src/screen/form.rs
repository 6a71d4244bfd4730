//! State behind the create/edit form.

use std::collections::HashSet;

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Status, Todo};
use crate::validate::{Field, FieldError, FormValues};

pub const SAVED: &str = "Todo saved successfully";
pub const SAVE_FAILED: &str = "There was an error saving the todo. Please try again.";

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum Submission {
    /// Every rule passed; execute this request and feed the response to
    /// [`FormScreen::apply_submit`].
    Request(HttpRequest),
    /// Rules failed; nothing was sent.
    Invalid(Vec<FieldError>),
}

/// Form values, per-field touch state, and the optional identifier of the
/// record being edited.
///
/// Field errors are only exposed for fields the user has already
/// interacted with, so an untouched form does not open covered in
/// messages. A submission attempt touches everything.
#[derive(Debug, Clone)]
pub struct FormScreen {
    values: FormValues,
    touched: HashSet<Field>,
    editing: Option<Uuid>,
}

impl FormScreen {
    /// Blank form for creating a todo. The status picker starts on
    /// "not started", like the original form.
    pub fn create() -> Self {
        Self {
            values: FormValues {
                status: Some(Status::NotStarted),
                ..FormValues::default()
            },
            touched: HashSet::new(),
            editing: None,
        }
    }

    /// Form pre-filled from an existing record; submission updates it.
    pub fn edit(todo: &Todo) -> Self {
        Self {
            values: FormValues {
                title: todo.title.clone(),
                details: todo.details.clone(),
                status: Some(todo.status),
            },
            touched: HashSet::new(),
            editing: Some(todo.id),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
        self.touched.insert(Field::Title);
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.values.details = details.into();
        self.touched.insert(Field::Details);
    }

    pub fn set_status(&mut self, status: Status) {
        self.values.status = Some(status);
        self.touched.insert(Field::Status);
    }

    /// Errors for touched fields only: what the view shows while the user
    /// is still filling the form in.
    pub fn visible_errors(&self) -> Vec<FieldError> {
        crate::validate::validate(&self.values)
            .into_iter()
            .filter(|e| self.touched.contains(&e.field))
            .collect()
    }

    /// Attempt submission.
    ///
    /// Marks every field touched so all remaining errors become visible,
    /// then either reports the failing rules (no request issued) or builds
    /// exactly one request: PUT when editing an existing record, POST
    /// otherwise.
    pub fn submit(&mut self, client: &TodoClient) -> Result<Submission, ApiError> {
        self.touched.extend(Field::ALL);
        match self.values.to_draft() {
            Err(errors) => Ok(Submission::Invalid(errors)),
            Ok(draft) => {
                let request = match self.editing {
                    Some(id) => client.build_update_todo(id, &draft)?,
                    None => client.build_create_todo(&draft)?,
                };
                Ok(Submission::Request(request))
            }
        }
    }

    /// Fold the executed submission outcome. Success yields the saved
    /// record and the caller navigates back to the list; failure maps to
    /// [`SAVE_FAILED`] with no automatic retry.
    pub fn apply_submit(
        &self,
        client: &TodoClient,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<Todo, ApiError> {
        let response = outcome?;
        if self.editing.is_some() {
            client.parse_update_todo(response)
        } else {
            client.parse_create_todo(response)
        }
    }
}
