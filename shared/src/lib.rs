use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod age;
pub mod draft;
pub mod roster;

pub use age::derive_age;
pub use draft::TeacherDraft;
pub use roster::{ClassAverage, PresentedRoster, RosterView, SortCriterion};

/// A teacher as stored by the record store.
///
/// `age` is derived from `date_of_birth` by the client before submission;
/// the store keeps whatever value it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Opaque identifier assigned by the store on creation
    pub id: String,
    pub full_name: String,
    /// Age in whole years as of the last derivation
    pub age: i64,
    /// Calendar date, serialized as YYYY-MM-DD
    pub date_of_birth: NaiveDate,
    pub number_of_classes: i64,
}

impl Teacher {
    /// Build the stored form of a record from its mutable fields
    pub fn from_fields(id: String, fields: TeacherFields) -> Self {
        Self {
            id,
            full_name: fields.full_name,
            age: fields.age,
            date_of_birth: fields.date_of_birth,
            number_of_classes: fields.number_of_classes,
        }
    }

    /// The mutable part of this record
    pub fn fields(&self) -> TeacherFields {
        TeacherFields {
            full_name: self.full_name.clone(),
            date_of_birth: self.date_of_birth,
            number_of_classes: self.number_of_classes,
            age: self.age,
        }
    }
}

/// Body of POST /teachers and PUT /teachers/:id.
///
/// All four fields are required; an update replaces every one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFields {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub number_of_classes: i64,
    pub age: i64,
}

/// JSON error body returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const STORAGE_UNAVAILABLE: &'static str = "STORAGE_UNAVAILABLE";

    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }
}

/// Log line shipped from the browser to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
