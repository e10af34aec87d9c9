//! Container Endpoints

use gloo_net::http::Request;

use super::{checked, read_json};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::ContainerRecord;

pub async fn list_containers(config: &AppConfig) -> ApiResult<Vec<ContainerRecord>> {
    let url = config.endpoint("contenedores");
    let response = checked(&url, Request::get(&url).send().await).await?;
    read_json(&url, response).await
}
