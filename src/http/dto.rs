//! Request payloads and boundary validation.
//!
//! Payload fields are all optional on the wire so that a missing field is
//! reported per field rather than as an opaque deserialization failure.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::task::domain::{TaskDetails, TaskStatus, TaskTitle};

/// Per-field validation messages keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// Records a message for a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the names of every failing field in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Required, non-blank title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Required status label.
    pub status: Option<String>,
    /// Required local due date-time.
    pub due_date_time: Option<String>,
}

impl TaskPayload {
    /// Validates every field and builds task content.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(self) -> Result<TaskDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = match self.title.map(TaskTitle::new) {
            Some(Ok(title)) => Some(title),
            Some(Err(_)) | None => {
                errors.add("title", "Title is required");
                None
            }
        };
        let status = parse_status(self.status.as_deref(), &mut errors);
        let due_date_time = match self.due_date_time.as_deref() {
            Some(raw) => parse_due_date_time(raw).or_else(|| {
                errors.add(
                    "dueDateTime",
                    "Due date must be a local date-time such as 2026-02-01T10:00:00",
                );
                None
            }),
            None => {
                errors.add("dueDateTime", "Due date is required");
                None
            }
        };

        match (title, status, due_date_time) {
            (Some(title), Some(status), Some(due)) => {
                Ok(TaskDetails::new(title, status, due).with_optional_description(self.description))
            }
            _ => Err(errors),
        }
    }
}

/// Body of `PATCH /tasks/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    /// Required status label.
    pub status: Option<String>,
}

impl StatusPayload {
    /// Validates the status label.
    ///
    /// # Errors
    ///
    /// Returns a `status` field error when the label is missing or unknown.
    pub fn validate(self) -> Result<TaskStatus, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        parse_status(self.status.as_deref(), &mut errors).ok_or(errors)
    }
}

fn parse_status(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<TaskStatus> {
    let Some(label) = raw else {
        errors.add("status", "Status is required");
        return None;
    };
    TaskStatus::try_from(label)
        .map_err(|_| {
            let allowed: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.as_str()).collect();
            errors.add(
                "status",
                format!("Status must be one of {}", allowed.join(", ")),
            );
        })
        .ok()
}

/// Parses a local date-time with at most microsecond precision, the
/// resolution of a `PostgreSQL` `TIMESTAMP`.
fn parse_due_date_time(raw: &str) -> Option<NaiveDateTime> {
    raw.trim()
        .parse::<NaiveDateTime>()
        .ok()
        .filter(|parsed| parsed.nanosecond().is_multiple_of(1_000))
}
