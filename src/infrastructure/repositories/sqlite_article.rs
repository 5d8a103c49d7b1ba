use super::with_deadline;
use crate::context::RequestContext;
use crate::domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const SELECT_ARTICLES: &str =
    "SELECT id, created_at, updated_at, title, content, author FROM articles";

/// SQLite-backed article store. The pool is shared by every request; write
/// serialisation is left to SQLite's own locking.
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    content: String,
    author: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            title: row.title,
            content: row.content,
            author: row.author,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, ctx: &RequestContext, article: Article) -> DomainResult<Article> {
        let Article {
            id,
            created_at,
            updated_at,
            title,
            content,
            author,
        } = article;

        let query = "INSERT INTO articles (id, created_at, updated_at, title, content, author) VALUES (?, ?, ?, ?, ?, ?)";
        let result = with_deadline(
            ctx,
            sqlx::query(query)
                .bind(id.as_str())
                .bind(created_at)
                .bind(updated_at)
                .bind(title.as_str())
                .bind(content.as_str())
                .bind(author.as_str())
                .execute(&self.pool),
        )
        .await?;

        tracing::debug!(
            request_id = %ctx.request_id(),
            query = %query,
            rows_affected = result.rows_affected(),
            "inserted article"
        );
        if result.rows_affected() != 1 {
            return Err(DomainError::persistence("row was not inserted"));
        }

        self.find_by_id(ctx, &id).await
    }

    async fn update(&self, ctx: &RequestContext, article: Article) -> DomainResult<Article> {
        let query =
            "UPDATE articles SET title = ?, content = ?, author = ?, updated_at = ? WHERE id = ?";
        let result = with_deadline(
            ctx,
            sqlx::query(query)
                .bind(article.title.as_str())
                .bind(article.content.as_str())
                .bind(article.author.as_str())
                .bind(article.updated_at)
                .bind(article.id.as_str())
                .execute(&self.pool),
        )
        .await?;

        tracing::debug!(
            request_id = %ctx.request_id(),
            query = %query,
            rows_affected = result.rows_affected(),
            "updated article"
        );
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("article {}", article.id)));
        }

        self.find_by_id(ctx, &article.id).await
    }

    async fn delete(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<()> {
        let query = "DELETE FROM articles WHERE id = ?";
        let result = with_deadline(
            ctx,
            sqlx::query(query).bind(id.as_str()).execute(&self.pool),
        )
        .await?;

        tracing::debug!(
            request_id = %ctx.request_id(),
            query = %query,
            rows_affected = result.rows_affected(),
            "deleted article"
        );
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("article {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn list(&self, ctx: &RequestContext) -> DomainResult<Vec<Article>> {
        let query = format!("{SELECT_ARTICLES} ORDER BY rowid");
        let rows = with_deadline(
            ctx,
            sqlx::query_as::<_, ArticleRow>(&query).fetch_all(&self.pool),
        )
        .await?;

        tracing::debug!(request_id = %ctx.request_id(), query = %query, rows = rows.len(), "listed articles");
        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article> {
        let query = format!("{SELECT_ARTICLES} WHERE id = ?");
        // a missing row comes back as RowNotFound, which map_sqlx turns into NotFound
        let row = with_deadline(
            ctx,
            sqlx::query_as::<_, ArticleRow>(&query)
                .bind(id.as_str())
                .fetch_one(&self.pool),
        )
        .await
        .inspect_err(|err| {
            tracing::debug!(request_id = %ctx.request_id(), query = %query, id = %id, error = %err, "article lookup failed");
        })?;

        tracing::debug!(request_id = %ctx.request_id(), query = %query, id = %id, "fetched article");
        Article::try_from(row)
    }
}
