use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            title: article.title,
            content: article.content,
            author: article.author,
        }
    }
}

/// Request body for create and update. Omitted fields decode as empty strings;
/// anything else in the body (`id`, timestamps) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub author: String,
}
