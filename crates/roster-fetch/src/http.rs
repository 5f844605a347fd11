use crate::source::RawSource;
use crate::{FetchError, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

const DEFAULT_USER_AGENT: &str = "roster";

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    user_agent: Option<String>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl RawSource for HttpSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch_json(&self) -> Result<Value> {
        get_json(&self.url, self.user_agent.as_deref())
    }
}

/// Issues a single GET and decodes the body as JSON. Anything other than
/// 200 OK is reported as [`FetchError::Status`] without reading the body.
pub fn get_json(url: &str, user_agent: Option<&str>) -> Result<Value> {
    let parsed = Url::parse(url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    let client = Client::builder()
        .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
        .build()?;

    debug!(url = %parsed, "sending request");
    let response = client.get(parsed).send()?;
    let status = response.status();
    debug!(status = status.as_u16(), "response received");
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    serde_json::from_str(&body).map_err(FetchError::Decode)
}
