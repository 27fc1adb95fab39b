use clap::Parser;
use dotenvy::dotenv;
use pizzeria_api::{app, config::Config, handlers::AppState};
use pizzeria_restaurant_service::run_migrations;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();

    let pool = config.establish_pool()?;
    run_migrations(&mut *pool.get()?)?;

    let app = app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Pizzeria API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
