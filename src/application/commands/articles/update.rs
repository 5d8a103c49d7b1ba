use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationResult, StoreResultExt},
    },
    context::RequestContext,
    domain::article::{ArticleDraft, ArticleId},
};

/// Full replacement of an article's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl ArticleCommandService {
    /// Read-modify-write: the current row is loaded first so that identity and
    /// `created_at` are carried over untouched. Content length is not
    /// re-checked here. The read and the write are not atomic; a concurrent
    /// delete in between surfaces as `NotFound` from the write.
    pub async fn update_article(
        &self,
        ctx: &RequestContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            author,
        } = command;
        let id = ArticleId::new(id).context("invalid article id")?;

        let mut article = self
            .read_repo
            .find_by_id(ctx, &id)
            .await
            .with_context(|| format!("could not get article id {id}"))?;

        article.revise(ArticleDraft::new(title, content, author), self.clock.now());

        let updated = self
            .write_repo
            .update(ctx, article)
            .await
            .with_context(|| format!("could not update article id {id}"))?;

        tracing::debug!(request_id = %ctx.request_id(), id = %updated.id, "updated article");
        Ok(updated.into())
    }
}
