//! # Pages
//!
//! Server-side HTML. Each page is a handlebars template sharing the `head`,
//! `nav` and `tail` partials; view models are computed in Rust first so the
//! templates only decide layout.

use handlebars::Handlebars;
use serde::Serialize;

use crate::{
    brands::{BRANDS, Brand, brand_path},
    error::AppError,
    menu::{MenuCard, MenuItem, render_card},
    nav::{NavEntry, nav_entries},
    source::{SourceLink, checked_source_link},
};

const PARTIALS: &[(&str, &str)] = &[
    ("head", include_str!("../templates/partials/head.hbs")),
    ("nav", include_str!("../templates/partials/nav.hbs")),
    ("tail", include_str!("../templates/partials/tail.hbs")),
    ("card", include_str!("../templates/partials/card.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    ("home", include_str!("../templates/home.hbs")),
    ("brand", include_str!("../templates/brand.hbs")),
    ("menu", include_str!("../templates/menu.hbs")),
    ("mypage", include_str!("../templates/mypage.hbs")),
    ("board", include_str!("../templates/board.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
];

#[derive(Serialize)]
struct Layout {
    title: String,
    nav: Vec<NavEntry>,
}

impl Layout {
    fn new(title: impl Into<String>, path: &str) -> Self {
        Self {
            title: title.into(),
            nav: nav_entries(Some(path), BRANDS),
        }
    }
}

#[derive(Serialize)]
struct HomePage {
    layout: Layout,
    brands: Vec<NavEntry>,
}

#[derive(Serialize)]
struct BrandPage {
    layout: Layout,
    brand: &'static Brand,
    cards: Vec<MenuCard>,
}

#[derive(Serialize)]
struct MenuPage {
    layout: Layout,
    brand_name: String,
    brand_href: String,
    card: MenuCard,
    source: Option<SourceLink>,
}

#[derive(Serialize)]
struct Profile {
    nickname: &'static str,
    bio: &'static str,
    favorites: Vec<NavEntry>,
    posts: Vec<PostLink>,
}

#[derive(Serialize)]
struct PostLink {
    title: &'static str,
    href: String,
}

#[derive(Serialize)]
struct ProfilePage {
    layout: Layout,
    profile: Profile,
}

#[derive(Serialize)]
struct Post {
    id: String,
    title: String,
    author: &'static str,
    content: &'static str,
}

#[derive(Serialize)]
struct BoardPage {
    layout: Layout,
    post: Post,
}

#[derive(Serialize)]
struct NotFoundPage {
    layout: Layout,
}

pub fn board_path(id: &str) -> String {
    format!("/board/{id}")
}

pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    pub fn home(&self, path: &str) -> Result<String, AppError> {
        let page = HomePage {
            layout: Layout::new("홈", path),
            brands: nav_entries(None, BRANDS),
        };

        Ok(self.registry.render("home", &page)?)
    }

    pub fn brand<'a>(
        &self,
        path: &str,
        brand: &'static Brand,
        items: impl Iterator<Item = &'a MenuItem>,
    ) -> Result<String, AppError> {
        let page = BrandPage {
            layout: Layout::new(brand.display_name, path),
            brand,
            cards: items.map(render_card).collect(),
        };

        Ok(self.registry.render("brand", &page)?)
    }

    pub fn menu(&self, path: &str, brand_name: &str, item: &MenuItem) -> Result<String, AppError> {
        let page = MenuPage {
            layout: Layout::new(item.name.as_str(), path),
            brand_name: brand_name.to_string(),
            brand_href: brand_path(&item.brand_slug),
            card: render_card(item),
            source: item
                .source_url
                .as_deref()
                .and_then(|url| checked_source_link(url, brand_name)),
        };

        Ok(self.registry.render("menu", &page)?)
    }

    pub fn mypage(&self, path: &str) -> Result<String, AppError> {
        let page = ProfilePage {
            layout: Layout::new("마이페이지", path),
            profile: Profile {
                nickname: "버거러버",
                bio: "세상의 모든 버거를 먹어보는 중입니다.",
                favorites: nav_entries(None, &BRANDS[..3]),
                posts: vec![
                    PostLink {
                        title: "빅맥 vs 와퍼 칼로리 비교",
                        href: board_path("1"),
                    },
                    PostLink {
                        title: "나트륨 적은 버거 추천",
                        href: board_path("2"),
                    },
                ],
            },
        };

        Ok(self.registry.render("mypage", &page)?)
    }

    pub fn board(&self, path: &str, id: &str) -> Result<String, AppError> {
        let title = format!("게시글 {id}");
        let page = BoardPage {
            layout: Layout::new(title.as_str(), path),
            post: Post {
                id: id.to_string(),
                title,
                author: "버거러버",
                content: "게시글 내용이 여기에 표시됩니다.",
            },
        };

        Ok(self.registry.render("board", &page)?)
    }

    pub fn not_found(&self, path: &str) -> Result<String, AppError> {
        let page = NotFoundPage {
            layout: Layout::new("페이지를 찾을 수 없음", path),
        };

        Ok(self.registry.render("not_found", &page)?)
    }

    /// Renders the not-found view into an error that responds with 404.
    pub fn missing(&self, path: &str) -> AppError {
        match self.not_found(path) {
            Ok(body) => AppError::NotFound {
                path: path.to_string(),
                body,
            },
            Err(e) => e,
        }
    }
}
