use std::sync::Arc;

use axum::{
    extract::{Path, State as AxumState},
    http::Uri,
    response::Html,
};
use tracing::debug;

use crate::{brands::find_brand, error::AppError, state::State};

type Page = Result<Html<String>, AppError>;

pub async fn home_handler(AxumState(state): AxumState<Arc<State>>, uri: Uri) -> Page {
    Ok(Html(state.pages.home(uri.path())?))
}

pub async fn brand_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Page {
    let brand = find_brand(&slug).ok_or_else(|| state.pages.missing(uri.path()))?;

    let html = state
        .pages
        .brand(uri.path(), brand, state.catalog.for_brand(brand.slug))?;

    Ok(Html(html))
}

pub async fn menu_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path((slug, id)): Path<(String, String)>,
    uri: Uri,
) -> Page {
    let item = state
        .catalog
        .find(&slug, &id)
        .ok_or_else(|| state.pages.missing(uri.path()))?;

    let brand_name = find_brand(&slug).map_or(slug.as_str(), |brand| brand.display_name);

    Ok(Html(state.pages.menu(uri.path(), brand_name, item)?))
}

pub async fn mypage_handler(AxumState(state): AxumState<Arc<State>>, uri: Uri) -> Page {
    Ok(Html(state.pages.mypage(uri.path())?))
}

pub async fn board_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Page {
    Ok(Html(state.pages.board(uri.path(), &id)?))
}

pub async fn not_found_handler(AxumState(state): AxumState<Arc<State>>, uri: Uri) -> AppError {
    debug!("No route for {}", uri.path());

    state.pages.missing(uri.path())
}
