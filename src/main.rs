use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duescript::config::{self, Args};
use duescript::rate_limit::RateLimiter;
use duescript::router;
use duescript::state::AppState;
use duescript::template::TemplateStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duescript=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Template load is fatal: serving without a valid template is meaningless,
    // so the process exits before the port is ever bound.
    let template = match TemplateStore::load(Path::new(&args.template)) {
        Ok(template) => template,
        Err(err) => {
            tracing::error!(path = %args.template, error = %err, "failed to load template");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        template,
        limiter: RateLimiter::new(config::RATE_LIMIT_MAX_REQUESTS, config::RATE_LIMIT_WINDOW),
    });

    let app = router::build(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "server is running");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
