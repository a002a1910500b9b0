//! # Menu Cards
//!
//! One product entry per brand. Nutrition fields are optional and render
//! independently; nothing checks their range.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{brands::menu_path, error::CatalogError, images::is_allowed_image};

pub const PLACEHOLDER_GLYPH: &str = "🍔";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub brand_slug: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub kcal: Option<f64>,
    /// Milligrams.
    #[serde(default)]
    pub sodium: Option<f64>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl MenuItem {
    /// Blank required fields are a caller error, reported against the item's position.
    /// `id` and `brandSlug` also become route segments, so they must not split the path.
    pub fn validate(&self, index: usize) -> Result<(), CatalogError> {
        let required = [
            ("id", &self.id),
            ("brandSlug", &self.brand_slug),
            ("name", &self.name),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::InvalidMenuItem {
                index,
                field: *field,
            });
        }

        let segments = [("id", &self.id), ("brandSlug", &self.brand_slug)];

        match segments.iter().find(|(_, value)| !is_path_segment(value)) {
            Some((field, _)) => Err(CatalogError::InvalidMenuItem {
                index,
                field: *field,
            }),
            None => Ok(()),
        }
    }
}

fn is_path_segment(value: &str) -> bool {
    !value.contains(['/', '?', '#'])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuCard {
    pub name: String,
    pub image_url: Option<String>,
    pub placeholder: &'static str,
    pub metrics: Vec<String>,
    pub href: String,
}

pub fn calories_line(kcal: f64) -> String {
    format!("Calories: {kcal} kcal")
}

pub fn sodium_line(sodium: f64) -> String {
    format!("Sodium: {sodium} mg")
}

pub fn metric_lines(item: &MenuItem) -> Vec<String> {
    item.kcal
        .map(calories_line)
        .into_iter()
        .chain(item.sodium.map(sodium_line))
        .collect()
}

pub fn render_card(item: &MenuItem) -> MenuCard {
    let image_url = item.image_url.as_deref().and_then(|url| {
        if is_allowed_image(url) {
            Some(url.to_string())
        } else {
            warn!("Image host not allowed for {}/{}: {url}", item.brand_slug, item.id);
            None
        }
    });

    MenuCard {
        name: item.name.clone(),
        image_url,
        placeholder: PLACEHOLDER_GLYPH,
        metrics: metric_lines(item),
        href: menu_path(&item.brand_slug, &item.id),
    }
}
