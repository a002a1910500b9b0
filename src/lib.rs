//! Documentation of a fast-food menu browser.
//!
//! Lists burger chains, renders their menus as cards with calorie and sodium
//! figures, and links out to each brand's own product page.
//!
//!
//!
//! # Routes
//! - `/` brand grid
//! - `/brand/{slug}` menu cards for one brand
//! - `/brand/{slug}/menu/{id}` single menu item with a link to the brand site
//! - `/mypage` profile
//! - `/board/{id}` post detail
//! - `/static/*` stylesheet
//!
//! Anything else gets the 404 page with a link home.
//!
//!
//!
//! # Rendering
//! - Everything is rendered on the server, no client script
//! - Handlebars templates live in `templates/` and are compiled into the binary
//! - View models (nav entries, cards, source links) are computed in Rust, templates only lay them out
//! - The active brand in the header is derived from the request path every time
//!
//!
//!
//! # Data
//! Menu data is scraped elsewhere and dropped in as JSON (`CATALOG_PATH`, default `data/menu.json`).
//! The brand list itself is fixed in [`brands::BRANDS`].
//!
//! Product photos are hot-linked. Only hosts in [`images::ALLOWED_IMAGE_HOSTS`] are rendered,
//! anything else falls back to the placeholder.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Environment
//! - `RUST_PORT` listen port, default 3000
//! - `CATALOG_PATH` menu JSON, default `data/menu.json`
//! - `STATIC_DIR` assets, default `static`
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```

use std::sync::Arc;

use axum::{Router, routing::get};

use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod brands;
pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod menu;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod source;
pub mod state;

use config::Config;
use error::AppError;
use routes::{
    board_handler, brand_handler, home_handler, menu_handler, mypage_handler, not_found_handler,
};
use state::State;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config)?;

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/brand/{slug}", get(brand_handler))
        .route("/brand/{slug}/menu/{id}", get(menu_handler))
        .route("/mypage", get(mypage_handler))
        .route("/board/{id}", get(board_handler))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            return std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{catalog::Catalog, pages::Pages};

    const SAMPLE: &str = r#"{
        "items": [
            { "id": "bigmac", "brandSlug": "mcdonalds", "name": "빅맥", "kcal": 583, "sodium": 1007,
              "imageUrl": "https://www.mcdonalds.co.kr/upload/bigmac.png",
              "sourceUrl": "https://www.mcdonalds.co.kr/kor/menu/detail/1" },
            { "id": "whopper", "brandSlug": "burgerking", "name": "와퍼", "kcal": 646 },
            { "id": "zinger", "brandSlug": "kfc", "name": "징거버거", "sourceUrl": "javascript:alert(1)" }
        ]
    }"#;

    fn app() -> Router {
        let config = Config {
            port: 0,
            catalog_path: PathBuf::from("unused.json"),
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        };
        let catalog = Catalog::from_json(SAMPLE).unwrap();

        router(State::with_catalog(config, catalog, Pages::new().unwrap()))
    }

    async fn get_page(path: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home() {
        let (status, html) = get_page("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("롯데리아"));
    }

    #[tokio::test]
    async fn test_brand_listing() {
        let (status, html) = get_page("/brand/mcdonalds").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("빅맥"));
        assert!(!html.contains("와퍼"));
        assert!(html.contains(r#"<img src="https://www.mcdonalds.co.kr/upload/bigmac.png""#));
        assert!(html.contains(r#"<a href="/brand/mcdonalds" class="active" aria-current="page">"#));
    }

    #[tokio::test]
    async fn test_menu_detail() {
        let (status, html) = get_page("/brand/burgerking/menu/whopper").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Calories: 646 kcal"));
        assert!(!html.contains("Sodium:"));
        assert!(!html.contains("source-link"));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[tokio::test]
    async fn test_menu_detail_source_link() {
        let (_, html) = get_page("/brand/mcdonalds/menu/bigmac").await;

        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer">View source</a>"#));
    }

    #[tokio::test]
    async fn test_menu_detail_script_source_dropped() {
        let (status, html) = get_page("/brand/kfc/menu/zinger").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("View source"));
    }

    #[tokio::test]
    async fn test_static_pages() {
        let (status, html) = get_page("/mypage").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"href="/board/1""#));
        assert!(!html.contains("aria-current"));

        let (status, html) = get_page("/board/7").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("게시글 #7"));
    }

    #[tokio::test]
    async fn test_not_found() {
        for path in [
            "/nowhere",
            "/brand/subway",
            "/brand/kfc/menu/missing",
            "/brand/mcdonalds/menu/whopper",
        ] {
            let (status, html) = get_page(path).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(html.contains(r#"<a href="/">홈으로 돌아가기</a>"#), "{path}");
        }
    }

    #[tokio::test]
    async fn test_stylesheet_served() {
        let (status, css) = get_page("/static/site.css").await;

        assert_eq!(status, StatusCode::OK);
        assert!(css.contains(".menu-card"));
    }
}
