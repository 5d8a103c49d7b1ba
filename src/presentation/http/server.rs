// src/presentation/http/server.rs
use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Response},
};
use std::{future::Future, io, time::Duration};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// How long cut-off requests get to flush their 503 before the server task is
/// dropped.
const CUT_OFF_FLUSH: Duration = Duration::from_millis(500);

/// Serves `app` until `signal` resolves, then stops accepting connections and
/// gives in-flight requests `grace` to finish. Requests still running after
/// that are cut off with a 503, which drops their handler futures and returns
/// any pooled connections they hold.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = CancellationToken::new();
    let cut_off = CancellationToken::new();

    let app = app.layer(from_fn_with_state(cut_off.clone(), cut_off_after_grace));

    let mut server = tokio::spawn({
        let draining = draining.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { draining.cancelled().await })
                .await
        }
    });

    tokio::select! {
        joined = &mut server => return joined.map_err(io::Error::other)?,
        () = signal => {}
    }

    draining.cancel();
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => joined.map_err(io::Error::other)?,
        Err(_) => {
            tracing::warn!(
                grace_ms = u64::try_from(grace.as_millis()).unwrap_or(u64::MAX),
                "grace period elapsed; cutting off in-flight requests"
            );
            cut_off.cancel();
            if tokio::time::timeout(CUT_OFF_FLUSH, &mut server).await.is_err() {
                server.abort();
            }
            Ok(())
        }
    }
}

async fn cut_off_after_grace(
    State(cut_off): State<CancellationToken>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    tokio::select! {
        response = next.run(req) => response,
        () = cut_off.cancelled() => {
            tracing::warn!(path = %path, "request cut off by shutdown");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
