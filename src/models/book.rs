//! Book models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog book. Rows are read-only for this application; the optional
/// columns are display-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// A book joined with its category's name, used only by the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookDetail {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_name: String,
}
