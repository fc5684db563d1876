use axum::response::Json;
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

/// Re-emit a browser log line through the server's subscriber
pub async fn log_message(Json(request): Json<LogRequest>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "info" => info!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_level_is_accepted() {
        let request = LogRequest {
            level: "verbose".to_string(),
            message: "hello".to_string(),
            component: None,
        };

        let Json(response) = log_message(Json(request)).await;
        assert!(response.success);
    }
}
