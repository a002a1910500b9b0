//! # Image Hosts
//!
//! Product photos are hot-linked from brand sites. Only these hosts may
//! appear as an image source; anything else renders the placeholder.
//!
//! A leading `*.` matches exactly one extra DNS label.

use url::Url;

pub static ALLOWED_IMAGE_HOSTS: &[&str] = &[
    "*.mcdonalds.co.kr",
    "mob-prd.burgerking.co.kr",
    "www.lotteeatz.com",
    "momstouch.co.kr",
    "www.shinsegaefood.com",
    "frankburger.co.kr",
    "kfcapi.inicis.com",
    "k.kakaocdn.net",
];

pub fn is_allowed_image(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    url.host_str()
        .is_some_and(|host| ALLOWED_IMAGE_HOSTS.iter().any(|pattern| host_matches(pattern, host)))
}

fn host_matches(pattern: &str, host: &str) -> bool {
    match pattern.strip_prefix("*.") {
        Some(suffix) => host
            .strip_suffix(suffix)
            .and_then(|label| label.strip_suffix('.'))
            .is_some_and(|label| !label.is_empty() && !label.contains('.')),
        None => host == pattern,
    }
}
