// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;

pub use error::{map_sqlx, with_deadline};
pub use sqlite_article::SqliteArticleRepository;
