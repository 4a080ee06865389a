//! Cart mutation handler

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{error::AppResult, AppState};

use super::{store_cart, SessionCart};

/// `POST /add-to-cart/:id`
///
/// A known book increments its cart entry, persists the cookie, and
/// redirects to the book's category. An unknown id redirects home without
/// touching the cart.
pub async fn add_to_cart(
    State(state): State<AppState>,
    SessionCart(mut cart): SessionCart,
    jar: SignedCookieJar,
    Path(book_id): Path<i64>,
) -> AppResult<Response> {
    match state.services.cart.add(&mut cart, book_id).await? {
        Some(category_id) => {
            let jar = store_cart(jar, &cart);
            let location = format!("/category/{}", category_id);
            Ok((jar, Redirect::to(&location)).into_response())
        }
        None => Ok(Redirect::to("/").into_response()),
    }
}
