//! The LlamaVocs web server.
//!
//! Serves the `card.*` procedures under `/rpc` and the card page at `/`.
//! The page is rendered server-side: a [`CardView`] is mounted against the
//! in-process [`Caller`] and awaited to settlement before responding.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use llamavocs_client::{CardView, page};
use llamavocs_rpc::{Caller, http};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, info};

/// Build the full application: the page at `/` and the `/rpc` routes.
pub fn app(caller: Caller) -> Router {
    Router::new()
        .route("/", get(home))
        .with_state(caller.clone())
        .merge(http::routes(caller))
}

/// Serve `app` on `listener` until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, caller: Caller) -> std::io::Result<()> {
    axum::serve(listener, app(caller))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn home(State(caller): State<Caller>) -> Html<String> {
    let mut view = CardView::new();
    view.mount(Arc::new(caller));

    let state = view.settled().await;
    debug!(?state, "Card page rendered");

    Html(page(&view.panel()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
