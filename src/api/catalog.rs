//! Storefront page handlers: home, category browsing, search, book detail

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::{error::AppResult, models::Cart, views, AppState};

use super::{nav, SessionCart};

/// Landing page listing every category.
pub async fn home(
    State(state): State<AppState>,
    SessionCart(cart): SessionCart,
) -> AppResult<Html<String>> {
    let nav = nav(&state, &cart).await?;
    Ok(views::home_page(&nav))
}

/// All books for one category; 404 when the category does not exist.
pub async fn category(
    State(state): State<AppState>,
    SessionCart(cart): SessionCart,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let nav = nav(&state, &cart).await?;
    let (category, books) = state.services.catalog.category_with_books(id).await?;
    Ok(views::category_page(&nav, &category, &books))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

/// `GET /search?q=term`
pub async fn search_get(
    State(state): State<AppState>,
    SessionCart(cart): SessionCart,
    Query(query): Query<SearchQuery>,
) -> AppResult<Response> {
    run_search(&state, &cart, &query.q).await
}

/// `POST /search` with the `search` form field
pub async fn search_post(
    State(state): State<AppState>,
    SessionCart(cart): SessionCart,
    Form(form): Form<SearchForm>,
) -> AppResult<Response> {
    run_search(&state, &cart, &form.search).await
}

/// A blank term never reaches the store: it redirects straight home.
async fn run_search(state: &AppState, cart: &Cart, term: &str) -> AppResult<Response> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let nav = nav(state, cart).await?;
    let books = state.services.catalog.search(term).await?;
    Ok(views::search_page(&nav, term, &books).into_response())
}

/// Book detail enriched with the category name; 404 when absent.
pub async fn book_detail(
    State(state): State<AppState>,
    SessionCart(cart): SessionCart,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let nav = nav(&state, &cart).await?;
    let book = state.services.catalog.book_detail(id).await?;
    Ok(views::book_detail_page(&nav, &book))
}
