// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};

use crate::models::tone::Tone;

/// Body of a roast request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoastRequest {
    pub tone: String,
    pub comment: String,
}

impl RoastRequest {
    #[must_use]
    pub fn new(tone: Tone, comment: impl Into<String>) -> Self {
        Self {
            tone: tone.machine_name().to_string(),
            comment: comment.into(),
        }
    }
}

/// Body of a successful roast response. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoastResponse {
    pub roast: String,
}

/// Where roast requests are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastTarget {
    pub base_url: String,
    pub endpoint: String,
}

impl RoastTarget {
    #[must_use]
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Final request URL: base URL without trailing slashes, then the endpoint
    #[must_use]
    pub fn url(&self) -> String {
        roast_url(&self.base_url, &self.endpoint)
    }
}

#[must_use]
pub fn roast_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}
