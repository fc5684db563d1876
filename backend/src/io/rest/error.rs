use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;

use crate::domain::{TeacherServiceError, TeacherValidationError};

impl TeacherServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TeacherServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            TeacherServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            TeacherServiceError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TeacherServiceError::Validation(_) => ErrorResponse::VALIDATION_ERROR,
            TeacherServiceError::NotFound(_) => ErrorResponse::NOT_FOUND,
            TeacherServiceError::StorageUnavailable(_) => ErrorResponse::STORAGE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for TeacherServiceError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.code(), self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for TeacherServiceError {
    /// Missing fields, wrong types and bad dates all surface as 400
    fn from(rejection: JsonRejection) -> Self {
        TeacherValidationError::MalformedBody(rejection.body_text()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request() {
        let response = TeacherServiceError::from(TeacherValidationError::EmptyName).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.error, "Full name cannot be empty");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = TeacherServiceError::NotFound("t-1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_storage_unavailable_maps_to_503() {
        let error = TeacherServiceError::StorageUnavailable(anyhow::anyhow!("disk gone"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_of(response).await.code, "STORAGE_UNAVAILABLE");
    }
}
