//! Shared HTTP plumbing for the upstream collaborators.

use std::time::Duration;

use reqwest::{Client, Response};
use runwear_core::{HttpConfig, NetworkError, ReqwestErrorExt};
use serde::de::DeserializeOwned;

/// Build the client shared by every stage of one pipeline.
pub fn build_client(config: &HttpConfig) -> Result<Client, NetworkError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ReqwestErrorExt::into_network_error)
}

/// Fail with the numeric status unless the response is a 2xx.
pub fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("Upstream returned status {}", status);
        Err(NetworkError::HttpStatus {
            status: status.as_u16(),
        })
    }
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, NetworkError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(ReqwestErrorExt::into_network_error)?;

    ensure_success(response)?
        .json::<T>()
        .await
        .map_err(|e| NetworkError::InvalidResponse(e.to_string()))
}
