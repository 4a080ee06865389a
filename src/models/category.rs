//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A browsable book category. Rows are read-only for this application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
