//! Client for a user-supplied translation proxy endpoint.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::backend::{TranslationRequest, USER_AGENT, http_error};

#[derive(Debug, Deserialize)]
struct ResponseBody {
    data: String,
    #[serde(default)]
    #[allow(dead_code)]
    code: i64,
}

/// HTTP client for a proxy endpoint. The whole request travels as a JSON
/// body; the proxy answers with `{"data": <translated>, "code": <status>}`.
#[derive(Debug, Clone)]
pub struct ProxyApiClient {
    client: Client,
    base_url: Url,
}

impl ProxyApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid proxy API url: {base_url}"))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let response = self
            .client
            .post(self.base_url.clone())
            .header("User-Agent", USER_AGENT)
            .header("Accept", "*/*")
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        let url = response.url().to_string();
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;

        if status != StatusCode::OK {
            return Err(http_error(&url, status.as_u16(), &body));
        }

        parse_response(&body, &url)
    }
}

/// Extracts the translated text from a 200 proxy response body.
fn parse_response(body: &str, url: &str) -> Result<String> {
    let parsed: ResponseBody = serde_json::from_str(body)
        .with_context(|| format!("malformed response from {url}: {body}"))?;

    Ok(parsed.data)
}
