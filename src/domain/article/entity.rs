// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Article {
    /// Fresh article with both timestamps set to `now`.
    pub fn new(id: ArticleId, draft: ArticleDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            title: draft.title,
            content: draft.content,
            author: draft.author,
        }
    }

    /// Replaces the mutable fields. `updated_at` always moves forward, even when
    /// `now` does not advance past the previous value.
    pub fn revise(&mut self, draft: ArticleDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.updated_at = now.max(self.updated_at + TimeDelta::microseconds(1));
    }
}

/// The caller-supplied part of an article: everything except identity and
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
