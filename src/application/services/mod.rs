// src/application/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::{
        commands::articles::{
            ArticleCommandService, CreateArticleCommand, DeleteArticleCommand,
            UpdateArticleCommand,
        },
        dto::ArticleDto,
        error::ApplicationResult,
        ports::{time::Clock, util::IdGenerator},
        queries::articles::{ArticleQueryService, GetArticleByIdQuery},
    },
    context::RequestContext,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// Everything the transport layer needs from the business layer.
#[async_trait]
pub trait ArticleUsecase: Send + Sync {
    async fn list_articles(&self, ctx: &RequestContext) -> ApplicationResult<Vec<ArticleDto>>;
    async fn get_article(&self, ctx: &RequestContext, id: String)
    -> ApplicationResult<ArticleDto>;
    async fn create_article(
        &self,
        ctx: &RequestContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto>;
    async fn update_article(
        &self,
        ctx: &RequestContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto>;
    async fn delete_article(&self, ctx: &RequestContext, id: String) -> ApplicationResult<()>;
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
            Arc::clone(&ids),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
        }
    }
}

#[async_trait]
impl ArticleUsecase for ApplicationServices {
    async fn list_articles(&self, ctx: &RequestContext) -> ApplicationResult<Vec<ArticleDto>> {
        self.article_queries.list_articles(ctx).await
    }

    async fn get_article(
        &self,
        ctx: &RequestContext,
        id: String,
    ) -> ApplicationResult<ArticleDto> {
        self.article_queries
            .get_article_by_id(ctx, GetArticleByIdQuery { id })
            .await
    }

    async fn create_article(
        &self,
        ctx: &RequestContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.article_commands.create_article(ctx, command).await
    }

    async fn update_article(
        &self,
        ctx: &RequestContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.article_commands.update_article(ctx, command).await
    }

    async fn delete_article(&self, ctx: &RequestContext, id: String) -> ApplicationResult<()> {
        self.article_commands
            .delete_article(ctx, DeleteArticleCommand { id })
            .await
    }
}
