//! Webhook models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{WebhookEvent, WebhookResource, WebhookStatus};
use super::field::Field;
use super::primitives::WebexId;

/// A webhook registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Unique identifier
    pub id: WebexId,
    /// Name
    pub name: String,
    /// URL events are posted to
    pub target_url: String,
    /// Resource listened to
    pub resource: WebhookResource,
    /// Event listened to
    pub event: WebhookEvent,
    /// Filter on the resource, e.g. `roomId=...`
    #[serde(default)]
    pub filter: Option<String>,
    /// Secret used to sign payloads
    #[serde(default)]
    pub secret: Option<String>,
    /// Delivery status
    #[serde(default)]
    pub status: Option<WebhookStatus>,
    /// When the webhook was created
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Organization-wide (`org`) or personal
    #[serde(default)]
    pub owned_by: Option<String>,
}

/// Request body for registering a webhook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreate {
    /// Name
    pub name: String,
    /// URL events are posted to
    pub target_url: String,
    /// Resource to listen to
    pub resource: WebhookResource,
    /// Event to listen to
    pub event: WebhookEvent,
    /// Filter on the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Secret used to sign payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Set to `org` for an organization-wide webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

impl WebhookCreate {
    /// Start a registration with the required fields.
    pub fn new(
        name: impl Into<String>,
        target_url: impl Into<String>,
        resource: WebhookResource,
        event: WebhookEvent,
    ) -> Self {
        Self {
            name: name.into(),
            target_url: target_url.into(),
            resource,
            event,
            filter: None,
            secret: None,
            owned_by: None,
        }
    }
}

/// Request body for updating a webhook.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    /// Name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// URL events are posted to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub target_url: Field<String>,
    /// Secret used to sign payloads
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub secret: Field<String>,
    /// Set to `active` to re-enable a disabled webhook
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<WebhookStatus>,
}

impl WebhookUpdate {
    /// Start an update from an existing webhook.
    ///
    /// Webex requires `name` and `targetUrl` on every update.
    pub fn from_webhook(webhook: &Webhook) -> Self {
        Self {
            name: Field::Value(webhook.name.clone()),
            target_url: Field::Value(webhook.target_url.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_deserialize() {
        let hook: Webhook = serde_json::from_value(json!({
            "id": "Y2lzY29zcGFyazovL3VzL1dFQkhPT0svMQ",
            "name": "calls",
            "targetUrl": "https://hooks.example.com/webex",
            "resource": "telephony_calls",
            "event": "created",
            "status": "active",
            "created": "2024-01-02T03:04:05.000Z"
        }))
        .unwrap();

        assert_eq!(hook.resource, WebhookResource::TelephonyCalls);
        assert_eq!(hook.event, WebhookEvent::Created);
        assert_eq!(hook.status, Some(WebhookStatus::Active));
    }

    #[test]
    fn test_update_reactivates() {
        let hook: Webhook = serde_json::from_value(json!({
            "id": "h1",
            "name": "calls",
            "targetUrl": "https://hooks.example.com/webex",
            "resource": "telephony_calls",
            "event": "all",
            "status": "inactive"
        }))
        .unwrap();

        let mut update = WebhookUpdate::from_webhook(&hook);
        update.status = WebhookStatus::Active.into();

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "name": "calls",
                "targetUrl": "https://hooks.example.com/webex",
                "status": "active"
            })
        );
    }
}
