//! Movement Endpoints
//!
//! `movimientos` collection: list, create, update, delete.

use gloo_net::http::Request;

use super::{checked, encode_err, read_json};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{MovementPayload, MovementRecord};

const RESOURCE: &str = "movimientos";

fn item_url(config: &AppConfig, id: u32) -> String {
    config.endpoint(&format!("{}/{}", RESOURCE, id))
}

pub async fn list_movements(config: &AppConfig) -> ApiResult<Vec<MovementRecord>> {
    let url = config.endpoint(RESOURCE);
    let response = checked(&url, Request::get(&url).send().await).await?;
    read_json(&url, response).await
}

pub async fn create_movement(config: &AppConfig, payload: &MovementPayload) -> ApiResult<()> {
    let url = config.endpoint(RESOURCE);
    let request = Request::post(&url).json(payload).map_err(encode_err)?;
    checked(&url, request.send().await).await?;
    Ok(())
}

pub async fn update_movement(
    config: &AppConfig,
    id: u32,
    payload: &MovementPayload,
) -> ApiResult<()> {
    let url = item_url(config, id);
    let request = Request::put(&url).json(payload).map_err(encode_err)?;
    checked(&url, request.send().await).await?;
    Ok(())
}

pub async fn delete_movement(config: &AppConfig, id: u32) -> ApiResult<()> {
    let url = item_url(config, id);
    checked(&url, Request::delete(&url).send().await).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        let config = AppConfig { api_base_url: "http://host/api".into() };
        assert_eq!(item_url(&config, 42), "http://host/api/movimientos/42");
    }
}
