pub mod teacher;

pub use teacher::{validate_fields, TeacherValidationError, MAX_NAME_LENGTH};
