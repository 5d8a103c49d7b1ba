use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, StoreResultExt},
    },
    context::RequestContext,
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        ctx: &RequestContext,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id).context("invalid article id")?;
        let article = match self.read_repo.find_by_id(ctx, &id).await {
            Ok(article) => article,
            Err(err) if err.is_not_found() => {
                tracing::warn!(request_id = %ctx.request_id(), id = %id, error = %err, "article not found");
                return Err(ApplicationError::store(format!("article id {id} not found"), err));
            }
            Err(err) => {
                tracing::error!(request_id = %ctx.request_id(), id = %id, error = %err, "could not get article");
                return Err(ApplicationError::store(format!("could not get article id {id}"), err));
            }
        };

        tracing::debug!(request_id = %ctx.request_id(), id = %article.id, "found article");
        Ok(article.into())
    }
}
