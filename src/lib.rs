mod api;
pub mod config;
mod error;
mod filters;
mod models;
mod pagination;
mod repo;
mod store;

use std::net::SocketAddr;

use axum::{serve::Serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use api::build_app;
use store::MemoryBookRepo;

pub use models::{Book, NewBook};

/// Binds a listener on `addr` and returns the bound address together with
/// the server future. Passing port 0 (as the tests do) picks a free port.
pub async fn start_server(addr: &str) -> (SocketAddr, Serve<TcpListener, Router, Router>) {
    let repo = MemoryBookRepo::new();

    let router = build_app(repo);

    let listener = TcpListener::bind(addr).await.unwrap();
    let local_addr = listener.local_addr().unwrap();
    info!("Listening on {}", local_addr);

    (local_addr, axum::serve(listener, router))
}
