//! # Navigation Header
//!
//! The active brand is derived from the request path on every render and
//! never stored.

use serde::Serialize;

use crate::brands::{BRAND_PREFIX, Brand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: String,
    pub is_active: bool,
}

/// Index of the first brand whose route prefix the path starts with.
pub fn active_index(path: Option<&str>, brands: &[Brand]) -> Option<usize> {
    let path = path?;

    brands.iter().position(|brand| {
        path.strip_prefix(BRAND_PREFIX)
            .is_some_and(|rest| rest.starts_with(brand.slug))
    })
}

pub fn nav_entries(path: Option<&str>, brands: &[Brand]) -> Vec<NavEntry> {
    let active = active_index(path, brands);

    brands
        .iter()
        .enumerate()
        .map(|(index, brand)| NavEntry {
            label: brand.display_name,
            href: brand.path(),
            is_active: active == Some(index),
        })
        .collect()
}
