//! Webhooks service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{WebexId, Webhook, WebhookCreate, WebhookUpdate};
use crate::Result;

/// Service for webhook registrations.
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing webhooks.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhooksQuery {
    /// Set to `org` to list organization-wide webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List webhooks.
    pub fn list(&self, query: WebhooksQuery) -> PaginatedStream<Webhook> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/webhooks").build_with_query(&query)
    }

    /// Get a webhook by ID.
    pub async fn get(&self, webhook_id: &WebexId) -> Result<Webhook> {
        self.inner.get(&format!("/webhooks/{}", webhook_id)).await
    }

    /// Register a webhook.
    pub async fn create(&self, webhook: &WebhookCreate) -> Result<Webhook> {
        tracing::info!(
            name = %webhook.name,
            resource = %webhook.resource,
            event = %webhook.event,
            "Registering webhook"
        );
        self.inner.post("/webhooks", webhook).await
    }

    /// Update a webhook.
    pub async fn update(&self, webhook_id: &WebexId, update: &WebhookUpdate) -> Result<Webhook> {
        self.inner
            .put(&format!("/webhooks/{}", webhook_id), update)
            .await
    }

    /// Delete a webhook.
    pub async fn delete(&self, webhook_id: &WebexId) -> Result<()> {
        tracing::info!(%webhook_id, "Deleting webhook");
        self.inner
            .delete(&format!("/webhooks/{}", webhook_id))
            .await
    }
}
