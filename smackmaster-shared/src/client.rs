// SPDX-License-Identifier: GPL-3.0-only
//! HTTP client for the remote roast generator
//!
//! One POST per call, no retries. Every failure is mapped onto [`RoastError`]
//! so the caller can decide how to surface it.

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::error::RoastError;
use crate::models::protocol::{RoastRequest, RoastResponse, roast_url};

/// Overall timeout for a single roast call
pub const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type sent with every request body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Anything that can turn a [`RoastRequest`] into a [`RoastResponse`]
pub trait RoastService: Send + Sync + 'static {
    /// Send one request to `base_url` + `endpoint`
    fn send(
        &self,
        base_url: &str,
        endpoint: &str,
        request: &RoastRequest,
    ) -> impl Future<Output = Result<RoastResponse, RoastError>> + Send;
}

/// [`RoastService`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct RoastClient {
    client: reqwest::Client,
}

impl RoastClient {
    /// Create a client with the default call timeout
    ///
    /// # Errors
    ///
    /// Returns [`RoastError::Transport`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, RoastError> {
        Self::with_timeout(CALL_TIMEOUT)
    }

    /// Create a client with a custom overall call timeout
    ///
    /// # Errors
    ///
    /// Returns [`RoastError::Transport`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, RoastError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl RoastService for RoastClient {
    async fn send(
        &self,
        base_url: &str,
        endpoint: &str,
        request: &RoastRequest,
    ) -> Result<RoastResponse, RoastError> {
        let url = roast_url(base_url, endpoint);
        let body = serde_json::to_vec(request)?;
        debug!("POST {url} (tone {})", request.tone);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Roast endpoint answered {status}");

        if !status.is_success() {
            // The body is only a better message; a failed read falls back to the status
            let text = response.text().await.unwrap_or_default();
            if text.trim().is_empty() {
                return Err(RoastError::Transport(format!(
                    "Failed with code {}",
                    status.as_u16()
                )));
            }
            return Err(RoastError::Transport(text));
        }

        let payload = response.text().await?;
        let roast: RoastResponse = serde_json::from_str(&payload)?;
        Ok(roast)
    }
}
