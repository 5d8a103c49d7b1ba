use crate::context::RequestContext;
use crate::domain::errors::{DomainError, DomainResult};
use std::future::Future;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::not_found("article not found"),
        // constraint violations, I/O, pool exhaustion: all opaque to callers
        other => DomainError::persistence(other),
    }
}

/// Runs a query under the context's deadline. When the deadline passes first
/// the query future is dropped, which aborts it.
pub async fn with_deadline<T, F>(ctx: &RequestContext, query: F) -> DomainResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match ctx.deadline() {
        Some(deadline) => tokio::time::timeout_at(deadline, query)
            .await
            .map_err(|elapsed| {
                tracing::warn!(request_id = %ctx.request_id(), "query aborted: deadline exceeded");
                DomainError::persistence(elapsed)
            })?
            .map_err(map_sqlx),
        None => query.await.map_err(map_sqlx),
    }
}
