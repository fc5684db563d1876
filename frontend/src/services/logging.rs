use gloo::net::http::Request;
use shared::{LogRequest, LogResponse};
use wasm_bindgen_futures::spawn_local;

const LOG_ENDPOINT: &str = "/logs";

/// Forwards browser log lines to the server so they land in its trace output
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Fire and forget; a lost log line must never break the page
        spawn_local(async move {
            let Ok(request) = Request::post(LOG_ENDPOINT).json(&request) else {
                return;
            };
            if let Ok(response) = request.send().await {
                let _ = response.json::<LogResponse>().await;
            }
        });
    }
}
