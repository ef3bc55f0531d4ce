use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Value, json};

use super::PlatformApi;
use super::models::{ApiService, CatalogItem, Environment, Subscription, Webhook};
use crate::config::Config;

const TOKEN_URL: &str = "https://login.axway.com/auth/realms/Broker/protocol/openid-connect/token";

/// Amplify Central platform API client with connection pooling.
///
/// Holds at most one access token, acquired by `authenticate()` and never
/// refreshed mid-run; each process invocation executes a single command.
pub struct CentralClient {
    config: Config,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

impl CentralClient {
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("acutils/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            http_client,
            access_token: None,
        })
    }

    fn token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .context("Not authenticated: no access token acquired")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self
            .http_client
            .get(self.url(path))
            .bearer_auth(self.token()?)
            .header("X-Axway-Tenant-Id", &self.config.org_id)
            .send()
            .await?;

        debug!("GET {} -> {}", path, response.status());

        if !response.status().is_success() {
            bail!("GET {} failed with status {}", path, response.status());
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlatformApi for CentralClient {
    async fn authenticate(&mut self) -> Result<()> {
        info!("Authenticating with Amplify Central...");
        debug!(
            "Base URL: {}, Client ID: {}",
            self.config.base_url, self.config.client_id
        );

        if !self.config.is_complete() {
            bail!(
                "Configuration is incomplete: client id, client secret, base URL and organization id are all required"
            );
        }

        let response = self
            .http_client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        debug!("Token request status: {}", response.status());

        if response.status().is_success() {
            let token_data: Value = response.json().await?;
            if let Some(access_token) = token_data.get("access_token").and_then(|t| t.as_str()) {
                self.access_token = Some(access_token.to_string());
                debug!("Access token obtained successfully");
                return Ok(());
            }
            bail!("Authentication failed: no access token in response");
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Authentication failed: {}", error_text)
        }
    }

    async fn list_environments(&self) -> Result<Vec<Environment>> {
        info!("Fetching environments");
        self.get_list("/apis/management/v1alpha1/environments").await
    }

    async fn list_catalog_items(&self) -> Result<Vec<CatalogItem>> {
        info!("Fetching catalog items");
        self.get_list("/api/unifiedCatalog/v1/catalogItems").await
    }

    async fn list_catalog_items_for_environment(
        &self,
        environment: &str,
    ) -> Result<Vec<CatalogItem>> {
        info!("Fetching catalog items for environment {}", environment);
        let path = format!(
            "/api/unifiedCatalog/v1/catalogItems?query=environmentName=={}",
            urlencoding::encode(environment)
        );
        self.get_list(&path).await
    }

    async fn list_api_services(&self, environment: &str) -> Result<Vec<ApiService>> {
        info!("Fetching API services for environment {}", environment);
        let path = format!(
            "/apis/management/v1alpha1/environments/{}/apiservices",
            urlencoding::encode(environment)
        );
        self.get_list(&path).await
    }

    async fn delete_api_service(&self, environment: &str, service: &str) -> Result<()> {
        info!(
            "Deleting API service {} in environment {}",
            service, environment
        );
        let path = format!(
            "/apis/management/v1alpha1/environments/{}/apiservices/{}",
            urlencoding::encode(environment),
            urlencoding::encode(service)
        );

        let response = self
            .http_client
            .delete(self.url(&path))
            .bearer_auth(self.token()?)
            .header("X-Axway-Tenant-Id", &self.config.org_id)
            .send()
            .await?;

        debug!("DELETE {} -> {}", path, response.status());

        if !response.status().is_success() {
            bail!("DELETE {} failed with status {}", path, response.status());
        }
        Ok(())
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        info!("Fetching subscriptions");
        self.get_list("/api/unifiedCatalog/v1/subscriptions").await
    }

    async fn list_webhooks(&self, environment: &str) -> Result<Vec<Webhook>> {
        info!("Fetching webhooks for environment {}", environment);
        let path = format!(
            "/apis/management/v1alpha1/environments/{}/webhooks",
            urlencoding::encode(environment)
        );
        self.get_list(&path).await
    }

    async fn update_subscription_webhook_url(&self, environment: &str, url: &str) -> Result<()> {
        info!(
            "Updating subscription webhook URL in environment {}",
            environment
        );
        let path = format!(
            "/apis/management/v1alpha1/environments/{}/webhooks/subscriptions",
            urlencoding::encode(environment)
        );

        let response = self
            .http_client
            .put(self.url(&path))
            .bearer_auth(self.token()?)
            .header("X-Axway-Tenant-Id", &self.config.org_id)
            .json(&json!({ "url": url }))
            .send()
            .await?;

        debug!("PUT {} -> {}", path, response.status());

        if !response.status().is_success() {
            bail!("PUT {} failed with status {}", path, response.status());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubled_slash() {
        let client = CentralClient::new(Config {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            base_url: "https://central.example/".to_string(),
            org_id: "123456".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.url("/apis/management/v1alpha1/environments"),
            "https://central.example/apis/management/v1alpha1/environments"
        );
    }

    #[test]
    fn resource_calls_require_a_token() {
        let client = CentralClient::new(Config::default()).unwrap();
        assert!(client.token().is_err());
    }
}
