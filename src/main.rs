use anyhow::Context;
use clap::Parser;

use tech_hunt_api::{app, config, database, state::AppState};

#[derive(Debug, Parser)]
#[command(name = "tech-hunt-api", about = "Tech Hunt marketplace backend")]
struct Args {
    /// Port to listen on (falls back to PORT, then 5000)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, ACCESS_TOKEN_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Tech Hunt API in {:?} mode", config.environment);

    let args = Args::parse();

    let state = AppState::new(config).context("failed to initialize application state")?;

    // Best effort: the server still boots without a database and reports
    // degraded health until one shows up.
    match database::ensure_schema(&state.pool).await {
        Ok(()) => tracing::info!("Database schema is ready"),
        Err(e) => tracing::warn!("Schema bootstrap failed, continuing without database: {}", e),
    }

    let app = app::app(state);

    // Allow tests or deployments to override port via env
    let port = args
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse::<u16>().ok()))
        .unwrap_or(5000);

    let bind_addr = format!("{}:{}", args.bind, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Tech Hunt API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
