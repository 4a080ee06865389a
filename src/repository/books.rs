//! Books repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::{Book, BookDetail},
};

const BOOK_COLUMNS: &str = "id, category_id, title, author, description, price";

/// Escape LIKE metacharacters so the term matches as a literal substring.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List the books belonging to one category.
    pub async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Book>> {
        let query = format!("SELECT {} FROM books WHERE category_id = ?", BOOK_COLUMNS);
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search over titles.
    pub async fn search_by_title(&self, term: &str) -> AppResult<Vec<Book>> {
        let query = format!(
            "SELECT {} FROM books WHERE lower(title) LIKE lower(?) ESCAPE '\\'",
            BOOK_COLUMNS
        );
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find a book by id.
    pub async fn find(&self, id: i64) -> AppResult<Option<Book>> {
        let query = format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS);
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Find a book joined with its category name, for the detail view.
    pub async fn find_detail(&self, id: i64) -> AppResult<Option<BookDetail>> {
        let row = sqlx::query_as::<_, BookDetail>(
            r#"
            SELECT b.id, b.category_id, b.title, b.author, b.description, b.price,
                   c.name AS category_name
            FROM books b
            JOIN categories c ON c.id = b.category_id
            WHERE b.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("dune"), "dune");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
