//! Page Configuration
//!
//! Settings read from the host page's `<meta>` tags.

/// Meta tag holding an optional endpoint prefix (e.g. `https://goals.example.com`)
pub const API_BASE_META: &str = "api-base";
/// Meta tag holding the anti-forgery token issued by the server
pub const CSRF_META: &str = "csrf-token";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every endpoint path; empty means same origin.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read the config from the current document.
    pub fn from_document() -> Self {
        Self::new(read_meta(API_BASE_META).unwrap_or_default())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// `content` attribute of `<meta name="{name}">`
pub fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content").filter(|v| !v.is_empty())
}

pub fn csrf_token() -> Option<String> {
    read_meta(CSRF_META)
}
