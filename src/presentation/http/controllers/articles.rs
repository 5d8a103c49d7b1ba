// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleInput},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticlePath, Ctx, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .usecase
        .list_articles(&ctx)
        .await
        .into_http(&ctx)
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .usecase
        .get_article(&ctx, id)
        .await
        .into_http(&ctx)
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    JsonBody(payload): JsonBody<ArticleInput>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    let created = state
        .usecase
        .create_article(&ctx, command)
        .await
        .into_http(&ctx)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    ArticlePath(id): ArticlePath,
    JsonBody(payload): JsonBody<ArticleInput>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    state
        .usecase
        .update_article(&ctx, command)
        .await
        .into_http(&ctx)
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    ArticlePath(id): ArticlePath,
) -> HttpResult<StatusCode> {
    state
        .usecase
        .delete_article(&ctx, id)
        .await
        .into_http(&ctx)?;

    Ok(StatusCode::OK)
}
