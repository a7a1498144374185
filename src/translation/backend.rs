//! The translate capability and the closed set of backends implementing it.

use anyhow::Result;
use serde::Serialize;

use super::free::FreeApiClient;
use super::proxy::ProxyApiClient;

/// User-Agent sent with every backend request.
pub(crate) const USER_AGENT: &str = "dlt client";

/// One translation request, shared by every backend variant.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Turns text plus a language pair into translated text via an external
/// service. Implemented by each [`Backend`] variant and by test doubles.
#[allow(async_fn_in_trait)]
pub trait Translate {
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

impl<T: Translate> Translate for &T {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        (**self).translate(request).await
    }
}

/// The selectable backends. Adding a service means adding a variant here;
/// call sites stay untouched.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Hosted DeepL free-tier API, authenticated by key.
    Free(FreeApiClient),
    /// User-supplied proxy endpoint.
    Proxy(ProxyApiClient),
}

impl Backend {
    /// Selects a backend: a non-empty proxy URL wins, otherwise the hosted
    /// free-tier API is used with the given auth key.
    pub fn select(proxy_api: Option<&str>, auth_key: &str) -> Result<Self> {
        match proxy_api {
            Some(url) if !url.is_empty() => Ok(Self::Proxy(ProxyApiClient::new(url)?)),
            _ => Ok(Self::Free(FreeApiClient::new(auth_key))),
        }
    }
}

impl Translate for Backend {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        match self {
            Self::Free(client) => client.translate(request).await,
            Self::Proxy(client) => client.translate(request).await,
        }
    }
}

/// Error for a non-200 backend response. Carries everything needed to
/// diagnose the failure: the request URL, the status, and the raw body.
pub(crate) fn http_error(url: &str, status: u16, body: &str) -> anyhow::Error {
    anyhow::anyhow!("request [{url}], response status code [{status}], response body [{body}]")
}
