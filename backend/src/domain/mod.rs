//! # Domain Module
//!
//! Business rules for the teacher roster, independent of HTTP and of the
//! storage engine.
//!
//! ## Business Rules
//!
//! - A teacher's full name must contain a non-whitespace character
//! - Date of birth may not be later than today
//! - Number of classes and age are non-negative
//! - IDs are assigned here on creation and never change
//! - Updates replace every mutable field
//! - Age is derived by the client; a mismatch with the date of birth is
//!   logged, not corrected

pub mod models;
pub mod teacher_service;

pub use models::*;
pub use teacher_service::*;
