// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationResult, StoreResultExt},
    context::RequestContext,
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        ctx: &RequestContext,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id).context("invalid article id")?;

        // existence check; a missing row must surface as NotFound
        self.read_repo
            .find_by_id(ctx, &id)
            .await
            .with_context(|| format!("could not get article id {id}"))?;

        self.write_repo
            .delete(ctx, &id)
            .await
            .with_context(|| format!("could not delete article id {id}"))?;

        tracing::debug!(request_id = %ctx.request_id(), id = %id, "deleted article");
        Ok(())
    }
}
