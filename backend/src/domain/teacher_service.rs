use std::sync::Arc;

use chrono::{Local, NaiveDate};
use shared::{derive_age, Teacher, TeacherFields};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::models::{validate_fields, TeacherValidationError};
use crate::storage::TeacherStorage;

#[derive(Debug, thiserror::Error)]
pub enum TeacherServiceError {
    #[error(transparent)]
    Validation(#[from] TeacherValidationError),
    #[error("Teacher not found: {0}")]
    NotFound(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, TeacherServiceError>;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service for managing the teacher roster
#[derive(Clone)]
pub struct TeacherService {
    storage: Arc<dyn TeacherStorage>,
    today: fn() -> NaiveDate,
}

impl TeacherService {
    /// Create a new TeacherService validating against the local date
    pub fn new(storage: Arc<dyn TeacherStorage>) -> Self {
        Self {
            storage,
            today: local_today,
        }
    }

    /// Create a service with a fixed notion of "today"
    pub fn with_clock(storage: Arc<dyn TeacherStorage>, today: fn() -> NaiveDate) -> Self {
        Self { storage, today }
    }

    /// List every teacher
    pub async fn list_teachers(&self) -> ServiceResult<Vec<Teacher>> {
        info!("Listing all teachers");

        let teachers = self.storage.list_teachers().await.map_err(storage_failure)?;

        info!("Found {} teachers", teachers.len());
        Ok(teachers)
    }

    /// Get a teacher by ID
    pub async fn get_teacher(&self, teacher_id: &str) -> ServiceResult<Teacher> {
        info!("Getting teacher: {}", teacher_id);

        self.storage
            .get_teacher(teacher_id)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| {
                warn!("Teacher not found: {}", teacher_id);
                TeacherServiceError::NotFound(teacher_id.to_string())
            })
    }

    /// Create a new teacher with a freshly assigned ID
    pub async fn create_teacher(&self, fields: TeacherFields) -> ServiceResult<Teacher> {
        info!(
            "Creating teacher: name={}, date_of_birth={}",
            fields.full_name, fields.date_of_birth
        );

        self.validate(&fields)?;

        let teacher = Teacher::from_fields(Uuid::new_v4().to_string(), fields);
        self.storage.store_teacher(&teacher).await.map_err(storage_failure)?;

        info!("Created teacher: {} with ID: {}", teacher.full_name, teacher.id);
        Ok(teacher)
    }

    /// Replace every mutable field of an existing teacher
    pub async fn update_teacher(
        &self,
        teacher_id: &str,
        fields: TeacherFields,
    ) -> ServiceResult<Teacher> {
        info!("Updating teacher: {}", teacher_id);

        self.validate(&fields)?;

        let teacher = Teacher::from_fields(teacher_id.to_string(), fields);
        let found = self.storage.update_teacher(&teacher).await.map_err(storage_failure)?;
        if !found {
            warn!("Teacher not found for update: {}", teacher_id);
            return Err(TeacherServiceError::NotFound(teacher_id.to_string()));
        }

        info!("Updated teacher: {} with ID: {}", teacher.full_name, teacher.id);
        Ok(teacher)
    }

    /// Delete a teacher. Deleting an ID twice reports NotFound the second time.
    pub async fn delete_teacher(&self, teacher_id: &str) -> ServiceResult<()> {
        info!("Deleting teacher: {}", teacher_id);

        let found = self.storage.delete_teacher(teacher_id).await.map_err(storage_failure)?;
        if !found {
            warn!("Teacher not found for delete: {}", teacher_id);
            return Err(TeacherServiceError::NotFound(teacher_id.to_string()));
        }

        info!("Deleted teacher: {}", teacher_id);
        Ok(())
    }

    fn validate(&self, fields: &TeacherFields) -> ServiceResult<()> {
        let today = (self.today)();
        validate_fields(fields, today)?;

        // The client owns age derivation; a stale age is stored as given.
        let expected = derive_age(fields.date_of_birth, today);
        if fields.age != expected {
            warn!(
                "Age {} does not match date of birth {} (expected {}); storing as submitted",
                fields.age, fields.date_of_birth, expected
            );
        }
        Ok(())
    }
}

fn storage_failure(e: anyhow::Error) -> TeacherServiceError {
    error!("Teacher storage failed: {:#}", e);
    TeacherServiceError::StorageUnavailable(e)
}
