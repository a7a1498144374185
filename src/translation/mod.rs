mod backend;
mod document;
mod free;
mod language;
mod proxy;

pub use backend::{Backend, Translate, TranslationRequest};
pub use document::DocumentTranslator;
pub use free::FreeApiClient;
pub use language::{SUPPORTED_LANGUAGES, print_languages, validate_language};
pub use proxy::ProxyApiClient;
