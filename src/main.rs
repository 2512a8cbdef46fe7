use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_api::config::Config;
use book_api::start_server;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::load();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("book_api={},tower_http=debug", config.log_level).into()
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (_, server) = start_server(&format!("0.0.0.0:{}", config.port)).await;

    server.await.unwrap();
}
