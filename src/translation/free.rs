//! Client for the hosted DeepL free-tier API.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::backend::{TranslationRequest, USER_AGENT, http_error};

/// Fixed endpoint of the free tier.
const FREE_API_URL: &str = "https://api-free.deepl.com/v2/translate";

#[derive(Debug, Deserialize)]
struct ResponseBody {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
    #[serde(default)]
    #[allow(dead_code)]
    detected_source_language: String,
}

/// HTTP client for the free-tier endpoint. The auth key and the request
/// fields travel as query parameters on a POST with an empty body.
#[derive(Debug, Clone)]
pub struct FreeApiClient {
    client: Client,
    base_url: String,
    auth_key: String,
}

impl FreeApiClient {
    pub fn new(auth_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: FREE_API_URL.to_string(),
            auth_key: auth_key.to_string(),
        }
    }

    /// Points the client at a different endpoint, e.g. the paid tier or a
    /// local test server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.base_url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "*/*")
            .query(&[
                ("auth_key", self.auth_key.as_str()),
                ("text", request.text.as_str()),
                ("source_lang", request.source_lang.as_str()),
                ("target_lang", request.target_lang.as_str()),
            ])
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

/// Extracts the first translation from a 200 response body.
fn parse_response(body: &str, url: &str) -> Result<String> {
    let parsed: ResponseBody = serde_json::from_str(body)
        .with_context(|| format!("malformed response from {url}: {body}"))?;

    parsed
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .with_context(|| format!("response from {url} contains no translations"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_returns_first_translation() {
        let body = r#"{"translations":[
            {"detected_source_language":"EN","text":"你好"},
            {"detected_source_language":"EN","text":"unused"}
        ]}"#;

        assert_eq!(parse_response(body, "http://t").unwrap(), "你好");
    }

    #[test]
    fn test_parse_response_tolerates_missing_detected_language() {
        let body = r#"{"translations":[{"text":"hallo"}]}"#;
        assert_eq!(parse_response(body, "http://t").unwrap(), "hallo");
    }

    #[test]
    fn test_parse_response_rejects_empty_translations() {
        let err = parse_response(r#"{"translations":[]}"#, "http://t").unwrap_err();
        assert!(err.to_string().contains("no translations"));
    }

    #[test]
    fn test_parse_response_rejects_malformed_json() {
        let err = parse_response("not json", "http://t").unwrap_err();
        assert!(err.to_string().contains("malformed response"));
    }

    #[test]
    fn test_with_base_url_overrides_endpoint() {
        let client = FreeApiClient::new("key").with_base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
