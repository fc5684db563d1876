//! # REST API Interface Layer
//!
//! - **teacher_apis**: CRUD endpoints for the roster
//! - **logging_apis**: sink for client-side log lines
//! - **error**: domain error to HTTP response translation

pub mod error;
pub mod logging_apis;
pub mod teacher_apis;

pub use logging_apis::log_message;
pub use teacher_apis::*;
