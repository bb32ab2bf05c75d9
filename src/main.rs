use tracing::info;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = rental_api::config::config();
    info!("Starting Rental API in {:?} mode", config.environment);

    let app = rental_api::app::app();

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    info!("Rental API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
