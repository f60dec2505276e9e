use std::sync::Arc;

use crate::services::webhook::WebhookClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub webhook: Arc<WebhookClient>,
    /// Resolved n8n destination. `None` when the environment left it unset
    /// or at the deployment placeholder.
    pub webhook_url: Option<String>,
}

impl AppState {
    pub fn new(webhook: WebhookClient, webhook_url: Option<String>) -> Self {
        Self {
            webhook: Arc::new(webhook),
            webhook_url,
        }
    }
}
