//! Amplify Central platform API boundary.
//!
//! `PlatformApi` is the seam between command orchestration and the remote
//! platform: one method per remote call, every call returning a plain
//! `Result`. `CentralClient` is the production implementation over HTTP.

pub mod client;
pub mod models;

pub use client::CentralClient;
pub use models::{ApiService, CatalogItem, Environment, Subscription, Webhook, WebhookSpec};

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PlatformApi {
    /// Exchange the configured client credentials for an access token.
    /// Must succeed before any other call is made.
    async fn authenticate(&mut self) -> Result<()>;

    async fn list_environments(&self) -> Result<Vec<Environment>>;

    async fn list_catalog_items(&self) -> Result<Vec<CatalogItem>>;

    async fn list_catalog_items_for_environment(
        &self,
        environment: &str,
    ) -> Result<Vec<CatalogItem>>;

    async fn list_api_services(&self, environment: &str) -> Result<Vec<ApiService>>;

    async fn delete_api_service(&self, environment: &str, service: &str) -> Result<()>;

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>>;

    async fn list_webhooks(&self, environment: &str) -> Result<Vec<Webhook>>;

    async fn update_subscription_webhook_url(&self, environment: &str, url: &str) -> Result<()>;
}
