//! REST API Bindings
//!
//! Frontend bindings to the SGCP backend, organized by resource.

mod movement;
mod container;

use async_trait::async_trait;
use gloo_net::http::Response;
use leptos::logging::error;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{ContainerRecord, MovementPayload, MovementRecord};

/// Operations the movements screen needs from the backend
#[async_trait(?Send)]
pub trait MovementsApi {
    async fn list_movements(&self) -> ApiResult<Vec<MovementRecord>>;
    async fn list_containers(&self) -> ApiResult<Vec<ContainerRecord>>;
    async fn create_movement(&self, payload: &MovementPayload) -> ApiResult<()>;
    async fn update_movement(&self, id: u32, payload: &MovementPayload) -> ApiResult<()>;
    async fn delete_movement(&self, id: u32) -> ApiResult<()>;
}

/// HTTP implementation backed by `gloo-net`
#[derive(Debug, Clone, PartialEq)]
pub struct RestApi {
    config: AppConfig,
}

impl RestApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl MovementsApi for RestApi {
    async fn list_movements(&self) -> ApiResult<Vec<MovementRecord>> {
        movement::list_movements(&self.config).await
    }

    async fn list_containers(&self) -> ApiResult<Vec<ContainerRecord>> {
        container::list_containers(&self.config).await
    }

    async fn create_movement(&self, payload: &MovementPayload) -> ApiResult<()> {
        movement::create_movement(&self.config, payload).await
    }

    async fn update_movement(&self, id: u32, payload: &MovementPayload) -> ApiResult<()> {
        movement::update_movement(&self.config, id, payload).await
    }

    async fn delete_movement(&self, id: u32) -> ApiResult<()> {
        movement::delete_movement(&self.config, id).await
    }
}

// ========================
// Response Helpers
// ========================

/// Map transport failures and non-2xx statuses into `ApiError`
async fn checked(url: &str, result: Result<Response, gloo_net::Error>) -> ApiResult<Response> {
    let response = result.map_err(|e| {
        error!("[API] {} failed: {}", url, e);
        ApiError::Network(e.to_string())
    })?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("[API] {} returned {}: {}", url, status, body);
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| {
        error!("[API] {} sent an unreadable body: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

fn encode_err(e: gloo_net::Error) -> ApiError {
    error!("[API] could not serialize request body: {}", e);
    ApiError::Encode(e.to_string())
}
