//! Webhook subscription operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWebhooksParams {}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookHeader {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWebhookParams {
    /// Event to subscribe to, e.g. "track" or "batch"
    pub event: String,
    /// Callback URL
    pub url: String,
    /// Restrict to one store
    pub store_id: Option<String>,
    /// Extra headers sent with each callback
    pub headers: Option<Vec<WebhookHeader>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookIdParams {
    /// The webhook ID
    pub webhook_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateWebhookParams {
    /// The webhook ID
    pub webhook_id: String,
    /// New callback URL
    pub url: Option<String>,
    pub headers: Option<Vec<WebhookHeader>>,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_webhooks",
        "List webhook subscriptions",
        endpoints::LIST_WEBHOOKS,
        RequestShape::Query,
        cached_schema_for_type::<GetWebhooksParams>,
    ),
    Operation::new(
        "create_webhook",
        "Subscribe a URL to an event",
        endpoints::CREATE_WEBHOOK,
        RequestShape::Body,
        cached_schema_for_type::<CreateWebhookParams>,
    ),
    Operation::new(
        "get_webhook_by_id",
        "Get a webhook subscription by its ID",
        endpoints::GET_WEBHOOK,
        RequestShape::Empty,
        cached_schema_for_type::<WebhookIdParams>,
    ),
    Operation::new(
        "update_webhook",
        "Update a webhook subscription",
        endpoints::UPDATE_WEBHOOK,
        RequestShape::Body,
        cached_schema_for_type::<UpdateWebhookParams>,
    ),
    Operation::new(
        "delete_webhook",
        "Delete a webhook subscription",
        endpoints::DELETE_WEBHOOK,
        RequestShape::Empty,
        cached_schema_for_type::<WebhookIdParams>,
    ),
];
