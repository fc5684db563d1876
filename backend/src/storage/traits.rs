//! # Storage Traits
//!
//! Abstraction the domain layer uses to persist teacher records.

use anyhow::Result;
use async_trait::async_trait;
use shared::Teacher;

/// Trait defining the interface for teacher storage operations.
///
/// Errors mean the backing store could not be reached or refused the
/// operation; "record does not exist" is never an error at this level.
#[async_trait]
pub trait TeacherStorage: Send + Sync {
    /// Store a new teacher
    async fn store_teacher(&self, teacher: &Teacher) -> Result<()>;

    /// Retrieve a specific teacher by ID
    async fn get_teacher(&self, teacher_id: &str) -> Result<Option<Teacher>>;

    /// List every stored teacher. Order is not part of the contract.
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    /// Replace all mutable fields of an existing teacher.
    /// Returns false if no teacher has that ID.
    async fn update_teacher(&self, teacher: &Teacher) -> Result<bool>;

    /// Delete a teacher by ID.
    /// Returns false if no teacher has that ID.
    async fn delete_teacher(&self, teacher_id: &str) -> Result<bool>;
}
