//! HTTP handlers for the storefront pages

pub mod cart;
pub mod catalog;
pub mod health;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    error::{AppResult, ErrorContext},
    models::{Cart, Category},
    views, AppState,
};

pub(crate) const CART_COOKIE: &str = "cart";

/// Build the application router with every route and shared layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog::home))
        .route("/category/:id", get(catalog::category))
        .route(
            "/search",
            get(catalog::search_get).post(catalog::search_post),
        )
        .route("/book/:id", get(catalog::book_detail))
        .route("/add-to-cart/:id", post(cart::add_to_cart))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_pages,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Shared navigation view model rendered on every page.
pub struct Nav {
    pub categories: Vec<Category>,
    pub cart_count: u32,
}

/// Build the navigation for a request: one category listing plus the cart
/// total from the session cookie.
pub async fn nav(state: &AppState, cart: &Cart) -> AppResult<Nav> {
    Ok(Nav {
        categories: state.services.catalog.categories().await?,
        cart_count: cart.count(),
    })
}

/// Extractor for the session cart carried in the signed `cart` cookie.
///
/// An absent, unreadable, or tampered cookie yields the empty cart, and
/// extraction never writes session state. Mutating handlers persist the cart
/// explicitly with [`store_cart`].
pub struct SessionCart(pub Cart);

#[async_trait]
impl FromRequestParts<AppState> for SessionCart {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_request_parts(parts, state).await?;
        Ok(SessionCart(cart_from_jar(&jar)))
    }
}

fn cart_from_jar(jar: &SignedCookieJar) -> Cart {
    jar.get(CART_COOKIE)
        .and_then(|cookie| URL_SAFE_NO_PAD.decode(cookie.value()).ok())
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Persist the cart back into the jar. This is the explicit dirty signal:
/// only handlers that mutated the cart call it.
///
/// The mapping is stored as base64-wrapped JSON so the cookie value stays
/// within RFC 6265's allowed octets.
pub fn store_cart(jar: SignedCookieJar, cart: &Cart) -> SignedCookieJar {
    // A string-keyed map always serializes
    let json = serde_json::to_string(cart).unwrap_or_default();
    jar.add(
        Cookie::build((CART_COOKIE, URL_SAFE_NO_PAD.encode(json)))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// The single global error handler.
///
/// Any response carrying an [`ErrorContext`] is re-rendered as the shared
/// error view, keeping the page chrome (navigation, cart count) intact.
/// Chrome lookups here are best-effort: a failing store degrades to an empty
/// navigation instead of recursing.
pub async fn render_error_pages(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let Some(ctx) = response.extensions().get::<ErrorContext>().cloned() else {
        return response;
    };

    let categories = state
        .services
        .catalog
        .categories()
        .await
        .unwrap_or_default();
    let nav = Nav {
        categories,
        cart_count: cart_from_jar(&jar).count(),
    };

    (ctx.status, views::error_page(&nav, &ctx.message)).into_response()
}
