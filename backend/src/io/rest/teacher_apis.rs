//! # REST API for the Teacher Roster
//!
//! Endpoints for creating, retrieving, updating, and deleting teachers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::TeacherFields;
use tracing::{error, info};

use crate::domain::TeacherServiceError;
use crate::AppState;

/// Create the teacher API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/:id",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}

fn log_failure(action: &str, e: &TeacherServiceError) {
    match e {
        TeacherServiceError::StorageUnavailable(_) => error!("Failed to {}: {}", action, e),
        _ => info!("Rejected {}: {}", action, e),
    }
}

/// List all teachers
pub async fn list_teachers(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /teachers");

    match state.teacher_service.list_teachers().await {
        Ok(teachers) => (StatusCode::OK, Json(teachers)).into_response(),
        Err(e) => {
            log_failure("list teachers", &e);
            e.into_response()
        }
    }
}

/// Get a teacher by ID
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /teachers/{}", teacher_id);

    match state.teacher_service.get_teacher(&teacher_id).await {
        Ok(teacher) => (StatusCode::OK, Json(teacher)).into_response(),
        Err(e) => {
            log_failure("get teacher", &e);
            e.into_response()
        }
    }
}

/// Create a new teacher
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<TeacherFields>, JsonRejection>,
) -> impl IntoResponse {
    let result = match payload {
        Ok(Json(fields)) => {
            info!("POST /teachers - request: {:?}", fields);
            state.teacher_service.create_teacher(fields).await
        }
        Err(rejection) => {
            info!("POST /teachers - unreadable body");
            Err(rejection.into())
        }
    };

    match result {
        Ok(teacher) => (StatusCode::CREATED, Json(teacher)).into_response(),
        Err(e) => {
            log_failure("create teacher", &e);
            e.into_response()
        }
    }
}

/// Replace a teacher's fields
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    payload: Result<Json<TeacherFields>, JsonRejection>,
) -> impl IntoResponse {
    let result = match payload {
        Ok(Json(fields)) => {
            info!("PUT /teachers/{} - request: {:?}", teacher_id, fields);
            state.teacher_service.update_teacher(&teacher_id, fields).await
        }
        Err(rejection) => {
            info!("PUT /teachers/{} - unreadable body", teacher_id);
            Err(rejection.into())
        }
    };

    match result {
        Ok(teacher) => (StatusCode::OK, Json(teacher)).into_response(),
        Err(e) => {
            log_failure("update teacher", &e);
            e.into_response()
        }
    }
}

/// Delete a teacher
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /teachers/{}", teacher_id);

    match state.teacher_service.delete_teacher(&teacher_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log_failure("delete teacher", &e);
            e.into_response()
        }
    }
}
