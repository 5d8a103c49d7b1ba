// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, StoreResultExt},
    },
    context::RequestContext,
    domain::article::{Article, ArticleDraft, ArticleId},
};

/// Upper bound on article content, in characters. Enforced on create only.
pub const MAX_CONTENT_LEN: usize = 1000;

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<CreateArticleCommand> for ArticleDraft {
    fn from(command: CreateArticleCommand) -> Self {
        ArticleDraft::new(command.title, command.content, command.author)
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content_len = command.content.chars().count();
        if content_len > MAX_CONTENT_LEN {
            tracing::warn!(
                request_id = %ctx.request_id(),
                content_len,
                "rejected article with oversized content"
            );
            return Err(ApplicationError::validation(format!(
                "article content is longer than {MAX_CONTENT_LEN} characters"
            )));
        }

        let id = ArticleId::new(self.ids.next_id()).context("could not assign article id")?;
        let article = Article::new(id, command.into(), self.clock.now());

        let created = self
            .write_repo
            .insert(ctx, article)
            .await
            .context("could not create article")?;

        tracing::debug!(request_id = %ctx.request_id(), id = %created.id, "created article");
        Ok(created.into())
    }
}
