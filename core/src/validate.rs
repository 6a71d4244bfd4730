//! Submission rules for the todo form.
//!
//! # Design
//! Validation is a flat table of `{field, predicate, message}` entries
//! walked in order; the first failing rule per field wins. The table is
//! the single source of truth: screens and tests read the resulting
//! `FieldError` values rather than re-stating the rules.

use crate::types::{Status, TodoDraft};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Title is too short";
pub const DETAILS_REQUIRED: &str = "Details are required";
pub const STATUS_REQUIRED: &str = "Status is required";

/// Minimum title length, in characters.
pub const MIN_TITLE_LEN: usize = 3;

/// The three form fields, used to scope errors and track touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Details,
    Status,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Details, Field::Status];
}

/// Raw form values prior to validation. `status` holds whatever the status
/// picker currently shows; `None` until a selection is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub details: String,
    pub status: Option<Status>,
}

/// A failed rule, scoped to the field it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

struct Rule {
    field: Field,
    message: &'static str,
    ok: fn(&FormValues) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Title,
        message: TITLE_REQUIRED,
        ok: |v| !v.title.is_empty(),
    },
    Rule {
        field: Field::Title,
        message: TITLE_TOO_SHORT,
        ok: |v| v.title.chars().count() >= MIN_TITLE_LEN,
    },
    Rule {
        field: Field::Details,
        message: DETAILS_REQUIRED,
        ok: |v| !v.details.is_empty(),
    },
    Rule {
        field: Field::Status,
        message: STATUS_REQUIRED,
        ok: |v| v.status.is_some(),
    },
];

/// Evaluate the rule table, keeping at most one error per field.
pub fn validate(values: &FormValues) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();
    for rule in RULES {
        if errors.iter().any(|e| e.field == rule.field) {
            continue;
        }
        if !(rule.ok)(values) {
            errors.push(FieldError {
                field: rule.field,
                message: rule.message,
            });
        }
    }
    errors
}

impl FormValues {
    /// Validate and convert into a submission payload. Failing rules come
    /// back as field errors and no draft is produced.
    pub fn to_draft(&self) -> Result<TodoDraft, Vec<FieldError>> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(status) = self.status else {
            // The rule table guarantees a selection by this point.
            return Err(vec![FieldError {
                field: Field::Status,
                message: STATUS_REQUIRED,
            }]);
        };
        Ok(TodoDraft {
            title: self.title.clone(),
            details: self.details.clone(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        FormValues {
            title: "Buy milk".to_string(),
            details: "2%".to_string(),
            status: Some(Status::NotStarted),
        }
    }

    #[test]
    fn valid_values_pass_every_rule() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn empty_form_fails_all_three_fields() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, TITLE_REQUIRED);
        assert_eq!(errors[1].message, DETAILS_REQUIRED);
        assert_eq!(errors[2].message, STATUS_REQUIRED);
    }

    #[test]
    fn short_title_gets_the_too_short_message() {
        let values = FormValues {
            title: "ab".to_string(),
            ..valid()
        };
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Title);
        assert_eq!(errors[0].message, TITLE_TOO_SHORT);
    }

    #[test]
    fn empty_title_reports_required_not_too_short() {
        let values = FormValues {
            title: String::new(),
            ..valid()
        };
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, TITLE_REQUIRED);
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let values = FormValues {
            title: "äöü".to_string(),
            ..valid()
        };
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn missing_status_is_rejected() {
        let values = FormValues {
            status: None,
            ..valid()
        };
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Status);
    }

    #[test]
    fn to_draft_succeeds_only_on_valid_values() {
        let draft = valid().to_draft().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.status, Status::NotStarted);

        let errors = FormValues::default().to_draft().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
