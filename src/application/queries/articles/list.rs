use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationResult, StoreResultExt},
    },
    context::RequestContext,
};

impl ArticleQueryService {
    pub async fn list_articles(&self, ctx: &RequestContext) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self
            .read_repo
            .list(ctx)
            .await
            .inspect_err(|err| {
                tracing::error!(request_id = %ctx.request_id(), error = %err, "could not get all articles");
            })
            .context("could not get all articles")?;

        tracing::debug!(request_id = %ctx.request_id(), articles = records.len(), "found articles");
        Ok(records.into_iter().map(Into::into).collect())
    }
}
