//! Runtime Configuration
//!
//! The API base URL comes from `window.SGCP_CONFIG` when the host page sets it,
//! then from `SGCP_API_URL` at build time, then from the local default.

use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "SGCP_CONFIG";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the REST API, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    option_env!("SGCP_API_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl AppConfig {
    /// Read the page-provided config object, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => {
                let config = config.normalized();
                log!("[CONFIG] API base URL: {}", config.api_base_url);
                config
            }
            Err(e) => {
                warn!("[CONFIG] ignoring window.{}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            default_api_base_url()
        } else {
            trimmed.to_string()
        };
        self
    }

    /// Absolute URL for a resource path such as `movimientos/7`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
