//! # Menu Catalog
//!
//! Product data supplied by whoever scrapes the brand sites. Loaded once at
//! startup from a JSON document:
//!
//! ```json
//! { "items": [{ "id": "bigmac", "brandSlug": "mcdonalds", "name": "빅맥", "kcal": 583 }] }
//! ```
//!
//! - Catalog order is kept, brand listings show items in file order
//! - Blank required fields reject the whole file
//! - Unknown brand slugs are kept, only logged

use std::{fs, io::ErrorKind, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{brands::find_brand, error::CatalogError, menu::MenuItem};

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    pub items: Vec<MenuItem>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Catalog {} not found, serving empty menus", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let catalog = Self::from_json(&data)?;
        info!("Loaded {} menu items from {}", catalog.items.len(), path.display());

        Ok(catalog)
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(data)?;

        for (index, item) in catalog.items.iter().enumerate() {
            item.validate(index)?;

            if find_brand(&item.brand_slug).is_none() {
                warn!("Menu item {} references unknown brand {}", item.id, item.brand_slug);
            }
        }

        Ok(catalog)
    }

    pub fn for_brand<'a>(&'a self, brand_slug: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.items.iter().filter(move |item| item.brand_slug == brand_slug)
    }

    pub fn find(&self, brand_slug: &str, id: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.brand_slug == brand_slug && item.id == id)
    }
}
