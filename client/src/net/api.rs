//! REST API helpers for communicating with the account backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: the transport reports itself unavailable, which the
//! registration flow maps to its generic server-error message.
//!
//! ERROR HANDLING
//! ==============
//! Only a missing HTTP response is an error; non-2xx statuses are returned to
//! the flow with their body so the server's message can be shown.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use accounts::config::{ApiConfig, parse_origin};
use accounts::register::{RegisterApi, RegisterResponse, RegistrationRequest, TransportError};

/// API config for the browser build.
///
/// The origin can be overridden at compile time with `CULINARY_API_ORIGIN`.
pub fn api_config() -> ApiConfig {
    config_for(option_env!("CULINARY_API_ORIGIN"))
}

fn config_for(origin: Option<&str>) -> ApiConfig {
    origin
        .and_then(|raw| parse_origin(raw).ok())
        .map(|origin| ApiConfig { origin, ..ApiConfig::default() })
        .unwrap_or_default()
}

/// `POST /user/register` through `fetch`.
#[derive(Clone, Debug)]
pub struct GlooRegisterApi {
    endpoint: String,
}

impl GlooRegisterApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self { endpoint: config.register_url() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl RegisterApi for GlooRegisterApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
            Ok(RegisterResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Request("not available outside the browser".to_owned()))
        }
    }
}
