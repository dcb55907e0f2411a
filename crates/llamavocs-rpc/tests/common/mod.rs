//! Common test utilities for procedure tests.

use llamavocs_rpc::{Caller, app_router, http};
use llamavocs_store::CardStore;
use tokio::net::TcpListener;

/// A caller over a fresh in-memory store, plus a handle on that store.
pub fn memory_caller() -> (Caller, CardStore) {
    let store = CardStore::open_in_memory().expect("in-memory store");
    (app_router().caller(store.clone()), store)
}

/// Serve the `/rpc` routes on an ephemeral port and return the base URL.
#[allow(dead_code)] // Only the HTTP tests serve over a socket
pub async fn spawn_server(caller: Caller) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, http::routes(caller))
            .await
            .expect("serve");
    });

    format!("http://{addr}")
}
