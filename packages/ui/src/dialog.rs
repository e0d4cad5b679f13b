//! Blocking browser dialogs (`alert`, `confirm`) through the renderer's JS bridge.

use dioxus::prelude::*;

/// Show a blocking alert.
pub async fn alert(message: &str) {
    tracing::warn!("{}", message);
    let script = format!("window.alert({});", js_string(message));
    if let Err(e) = document::eval(&script).join::<serde_json::Value>().await {
        tracing::error!("Failed to show alert: {:?}", e);
    }
}

/// Ask for confirmation with a blocking prompt. Anything but an explicit "OK" is a refusal.
pub async fn confirm(message: &str) -> bool {
    let script = format!("return window.confirm({});", js_string(message));
    match document::eval(&script).join::<bool>().await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!("Failed to show confirmation: {:?}", e);
            false
        }
    }
}

fn js_string(message: &str) -> String {
    serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string())
}
