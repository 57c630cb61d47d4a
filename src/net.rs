// SPDX-License-Identifier: MPL-2.0
//! Outbound HTTP: manifest fetches, search submissions and thumbnails.

use crate::config::{SearchConfig, USER_AGENT};
use crate::error::{Error, Result};
use serde::Serialize;

/// Shared HTTP client. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Builds a client with the configured timeout and our user agent.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client })
    }

    /// `GET url`, returning the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response)?;
        Ok(response.text().await?)
    }

    /// `GET url`, returning the raw body.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response)?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST url` with `body` serialized as JSON, returning the response text.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<String> {
        let response = self.client.post(url).json(body).send().await?;
        let response = check_status(response)?;
        Ok(response.text().await?)
    }
}

impl Default for HttpClient {
    /// Client without our timeout or user agent, used when the configured
    /// builder fails.
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Http(format!("HTTP status: {status}")))
    }
}
