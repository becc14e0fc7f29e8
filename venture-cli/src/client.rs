//! API Client
//!
//! HTTP client for driving a running venture API server from the
//! command line.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::{CliError, CliResult};

/// Venture API client
pub struct VentureClient {
    /// HTTP client
    client: Client,
    /// Base URL
    base_url: String,
}

impl VentureClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CliError::connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get health status
    pub async fn health(&self) -> CliResult<serde_json::Value> {
        let url = format!("{}/api/v1/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(CliError::api(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ))
        }
    }

    /// Log in and return a bearer token
    pub async fn login(&self, email: &str, password: &str) -> CliResult<String> {
        let url = format!("{}/api/v1/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({"email": email, "password": password}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CliError::api(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let body: serde_json::Value = response.json().await?;
        body["token"]
            .as_str()
            .map(|t| t.to_string())
            .ok_or_else(|| CliError::Server("login response carried no token".to_string()))
    }

    /// Update a pending startup's multiplier
    pub async fn update_multiplier(
        &self,
        token: &str,
        startup_id: &str,
        multiplier: f64,
    ) -> CliResult<serde_json::Value> {
        let url = format!(
            "{}/api/v1/admin/startups/{}/multiplier",
            self.base_url, startup_id
        );
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(&json!({"multiplier": multiplier}))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(CliError::api(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ))
        }
    }

    /// Create a startup
    pub async fn create_startup(
        &self,
        token: &str,
        name: &str,
        description: &str,
        pitch: &str,
        multiplier: Option<f64>,
    ) -> CliResult<serde_json::Value> {
        let url = format!("{}/api/v1/admin/startups", self.base_url);
        let mut body = json!({
            "name": name,
            "description": description,
            "pitch": pitch,
        });
        if let Some(m) = multiplier {
            body["multiplier"] = json!(m);
        }

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(CliError::api(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ))
        }
    }
}
