//! Catalog browsing service

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDetail, Category},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every category, for the navigation and the home page.
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// A category together with its books.
    pub async fn category_with_books(&self, id: i64) -> AppResult<(Category, Vec<Book>)> {
        let category = self
            .repository
            .categories
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        let books = self.repository.books.list_by_category(id).await?;
        Ok((category, books))
    }

    /// Books whose title contains `term`, case-insensitively.
    ///
    /// Callers trim the term and short-circuit the blank case before getting
    /// here; a blank term would match every book.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Book>> {
        self.repository.books.search_by_title(term).await
    }

    /// A book enriched with its category name.
    pub async fn book_detail(&self, id: i64) -> AppResult<BookDetail> {
        self.repository
            .books
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }
}
