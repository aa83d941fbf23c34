//! courtlog server binary

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use courtlog::config::{self, Args};
use courtlog::{build_router, db, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting courtlog v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let pool = db::init_database(&args.database).await?;

    let video_root = config::video_root_from(args.video_root);
    match &video_root {
        Some(root) => info!("Video root: {}", root.display()),
        None => warn!("Video root not configured; video serving disabled"),
    }

    let state = AppState::new(pool, video_root);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("courtlog listening on http://127.0.0.1:{}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
