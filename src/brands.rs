//! # Brands
//!
//! Fixed registry of fast-food chains. Order matters: the navigation header
//! renders brands in exactly this order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub slug: &'static str,
    pub display_name: &'static str,
}

pub const BRAND_PREFIX: &str = "/brand/";

pub static BRANDS: &[Brand] = &[
    Brand {
        slug: "mcdonalds",
        display_name: "맥도날드",
    },
    Brand {
        slug: "burgerking",
        display_name: "버거킹",
    },
    Brand {
        slug: "lotte",
        display_name: "롯데리아",
    },
    Brand {
        slug: "momstouch",
        display_name: "맘스터치",
    },
    Brand {
        slug: "kfc",
        display_name: "KFC",
    },
    Brand {
        slug: "nobrand",
        display_name: "노브랜드버거",
    },
    Brand {
        slug: "frank",
        display_name: "프랭크버거",
    },
];

impl Brand {
    pub fn path(&self) -> String {
        brand_path(self.slug)
    }
}

pub fn brand_path(slug: &str) -> String {
    format!("{BRAND_PREFIX}{slug}")
}

pub fn menu_path(brand_slug: &str, id: &str) -> String {
    format!("{BRAND_PREFIX}{brand_slug}/menu/{id}")
}

/// Linear lookup, the registry is tiny.
pub fn find_brand(slug: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_unique_and_lowercase() {
        for (i, brand) in BRANDS.iter().enumerate() {
            assert!(brand.slug.chars().all(|c| c.is_ascii_lowercase()));
            assert!(BRANDS[i + 1..].iter().all(|other| other.slug != brand.slug));
        }
    }

    #[test]
    fn test_no_slug_prefixes_another() {
        for a in BRANDS {
            for b in BRANDS {
                if a.slug != b.slug {
                    assert!(!a.slug.starts_with(b.slug));
                }
            }
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(brand_path("kfc"), "/brand/kfc");
        assert_eq!(menu_path("kfc", "zinger"), "/brand/kfc/menu/zinger");
        assert_eq!(BRANDS[0].path(), "/brand/mcdonalds");
    }

    #[test]
    fn test_find_brand() {
        assert_eq!(find_brand("lotte").map(|b| b.display_name), Some("롯데리아"));
        assert!(find_brand("subway").is_none());
        assert!(find_brand("").is_none());
    }
}
