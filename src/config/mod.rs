use serde::Deserialize;

/// Value the deployment template ships before a real webhook URL is filled in.
const WEBHOOK_URL_PLACEHOLDER: &str = "YOUR_N8N_WEBHOOK_URL_HERE";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// n8n workflow webhook that performs the actual video generation.
    pub n8n_webhook_url: Option<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Destination for submissions, if one is actually configured.
    ///
    /// An unset variable, an empty value, and the deployment placeholder all
    /// count as unconfigured; the proxy then answers 500 without attempting
    /// the outbound call.
    pub fn webhook_url(&self) -> Option<String> {
        match self.n8n_webhook_url.as_deref() {
            Some(url) if !url.is_empty() && url != WEBHOOK_URL_PLACEHOLDER => {
                Some(url.to_string())
            }
            _ => None,
        }
    }
}
