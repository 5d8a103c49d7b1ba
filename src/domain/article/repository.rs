use crate::context::RequestContext;
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists a fully populated article and returns the row as committed.
    async fn insert(&self, ctx: &RequestContext, article: Article) -> DomainResult<Article>;
    /// Replaces title, content, author and `updated_at` of the row with
    /// `article.id`. Fails with `NotFound` when no row matches.
    async fn update(&self, ctx: &RequestContext, article: Article) -> DomainResult<Article>;
    /// Hard delete. Fails with `NotFound` when no row matches.
    async fn delete(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// All articles in insertion order. Empty when none exist.
    async fn list(&self, ctx: &RequestContext) -> DomainResult<Vec<Article>>;
    /// Fails with `NotFound` when no row matches.
    async fn find_by_id(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article>;
}
