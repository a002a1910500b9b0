//! Outbound link to a brand's own product page.

use serde::Serialize;
use tracing::warn;
use url::Url;

pub const SOURCE_LABEL: &str = "View source";
pub const NEW_CONTEXT: &str = "_blank";
/// Target page gets no `window.opener` and no referrer.
pub const NO_BACK_REFERENCE: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

/// The label stays generic; `_brand_name` is accepted but not shown.
pub fn source_link(url: &str, _brand_name: &str) -> SourceLink {
    SourceLink {
        href: url.to_string(),
        label: SOURCE_LABEL,
        target: NEW_CONTEXT,
        rel: NO_BACK_REFERENCE,
    }
}

/// Only `http`/`https` targets get a link; anything else is dropped with a warning.
pub fn checked_source_link(url: &str, brand_name: &str) -> Option<SourceLink> {
    if is_web_url(url) {
        Some(source_link(url, brand_name))
    } else {
        warn!("Source link not http(s) for {brand_name}: {url}");
        None
    }
}

pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
