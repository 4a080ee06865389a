//! Cart operations

use crate::{error::AppResult, models::Cart, repository::Repository};

#[derive(Clone)]
pub struct CartService {
    repository: Repository,
}

impl CartService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add one copy of `book_id` to the cart.
    ///
    /// The book must exist in the catalog: an unknown id leaves the cart
    /// untouched and returns `Ok(None)`. On success the book's category id is
    /// returned so the caller can redirect to the category view.
    pub async fn add(&self, cart: &mut Cart, book_id: i64) -> AppResult<Option<i64>> {
        let Some(book) = self.repository.books.find(book_id).await? else {
            tracing::debug!("add-to-cart ignored unknown book id {}", book_id);
            return Ok(None);
        };

        cart.add(book.id);
        Ok(Some(book.category_id))
    }
}
