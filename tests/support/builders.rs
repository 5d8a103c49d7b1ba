// tests/support/builders.rs
use chrono::{DateTime, Utc};

use article_service::domain::article::{Article, ArticleDraft, ArticleId};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: String,
    title: String,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "article-0".into(),
            title: "Test Article".into(),
            content: "Test content".into(),
            author: "Test Author".into(),
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article::new(
            ArticleId::new(self.id).expect("valid article id"),
            ArticleDraft::new(self.title, self.content, self.author),
            self.created_at,
        )
    }
}
