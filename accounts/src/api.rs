//! Native HTTP transport for the registration endpoint.
//!
//! Thin `reqwest` wrapper: sends the JSON body and hands back status + raw
//! body text. Interpreting the body is [`crate::register`]'s job.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use crate::config::ApiConfig;
use crate::register::{RegisterApi, RegisterResponse, RegistrationRequest, Timer, TransportError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpRegisterApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRegisterApi {
    /// Build a client for `config.register_url()`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.register_url() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl RegisterApi for HttpRegisterApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, username = %request.username, "POST registration");
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(RegisterResponse { status, body })
    }
}

// =============================================================================
// TIMER
// =============================================================================

/// [`Timer`] backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait::async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
