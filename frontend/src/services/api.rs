use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Teacher, TeacherFields};

/// Failure of a call to the record store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Teacher not found: {0}")]
    NotFound(String),
    #[error("The server could not reach its storage: {0}")]
    StorageUnavailable(String),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Could not reach the server: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-success response from its status and body
    pub fn from_response_parts(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
        let message = parsed
            .as_ref()
            .map(|e| e.error.clone())
            .unwrap_or_else(|| body.to_string());

        match parsed.as_ref().map(|e| e.code.as_str()) {
            Some(ErrorResponse::VALIDATION_ERROR) => return ApiError::Validation(message),
            Some(ErrorResponse::NOT_FOUND) => return ApiError::NotFound(message),
            Some(ErrorResponse::STORAGE_UNAVAILABLE) => {
                return ApiError::StorageUnavailable(message)
            }
            _ => {}
        }

        match status {
            400 | 422 => ApiError::Validation(message),
            404 => ApiError::NotFound(message),
            503 => ApiError::StorageUnavailable(message),
            _ => ApiError::Server { status, message },
        }
    }
}

/// API client for the teacher record store
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Talk to the origin that served the page
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Use the base URL baked in at build time through `ROSTER_API_BASE_URL`
    /// (e.g. a backend on another port during `trunk serve`), falling back
    /// to the page's own origin.
    pub fn from_build_env() -> Self {
        Self::from_optional_base_url(option_env!("ROSTER_API_BASE_URL"))
    }

    fn from_optional_base_url(base_url: Option<&str>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the whole collection
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        let response = Request::get(&self.url("/teachers"))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Fetch one record by id
    pub async fn get_teacher(&self, teacher_id: &str) -> Result<Teacher, ApiError> {
        let response = Request::get(&self.url(&format!("/teachers/{}", teacher_id)))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Create a record; the server assigns its id
    pub async fn create_teacher(&self, fields: &TeacherFields) -> Result<Teacher, ApiError> {
        let response = Request::post(&self.url("/teachers"))
            .json(fields)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Replace every field of an existing record
    pub async fn update_teacher(
        &self,
        teacher_id: &str,
        fields: &TeacherFields,
    ) -> Result<Teacher, ApiError> {
        let response = Request::put(&self.url(&format!("/teachers/{}", teacher_id)))
            .json(fields)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    pub async fn delete_teacher(&self, teacher_id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/teachers/{}", teacher_id)))
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response).await.map(|_| ())
    }
}

fn network_error(e: gloo::net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response_parts(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Server {
        status: response.status(),
        message: format!("Failed to parse response: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wins_over_status() {
        let body = r#"{"error":"Full name must not be empty","code":"VALIDATION_ERROR"}"#;
        assert_eq!(
            ApiError::from_response_parts(400, body),
            ApiError::Validation("Full name must not be empty".to_string())
        );

        let body = r#"{"error":"Teacher not found: t-1","code":"NOT_FOUND"}"#;
        assert!(matches!(ApiError::from_response_parts(404, body), ApiError::NotFound(_)));

        let body = r#"{"error":"down","code":"STORAGE_UNAVAILABLE"}"#;
        assert_eq!(
            ApiError::from_response_parts(503, body),
            ApiError::StorageUnavailable("down".to_string())
        );
    }

    #[test]
    fn test_unstructured_body_falls_back_to_status() {
        assert_eq!(
            ApiError::from_response_parts(404, "nope"),
            ApiError::NotFound("nope".to_string())
        );
        assert_eq!(
            ApiError::from_response_parts(500, "boom"),
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(client.url("/teachers"), "http://localhost:5000/teachers");
        assert_eq!(ApiClient::new().url("/teachers"), "/teachers");
    }

    #[test]
    fn test_build_time_base_url() {
        assert_eq!(ApiClient::from_optional_base_url(None), ApiClient::new());
        assert_eq!(ApiClient::from_optional_base_url(Some("  ")), ApiClient::new());
        assert_eq!(
            ApiClient::from_optional_base_url(Some("http://localhost:5000/")).url("/teachers"),
            "http://localhost:5000/teachers"
        );
    }
}
