use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealerdesk::config::Config;
use dealerdesk::invoices::services::DEFAULT_SWEEP_INTERVAL;
use dealerdesk::invoices::{DraftStore, DraftSweeper};
use dealerdesk::middleware::{ErrorHandler, RequestId};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("dealerdesk={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json_logging() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting DealerDesk invoicing engine");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Drafts default to {} (limit {}, idle timeout {}s)",
        config.drafts.default_jurisdiction,
        config.drafts.max_sessions,
        config.drafts.idle_timeout.as_secs()
    );

    let store = Arc::new(
        DraftStore::new(config.drafts.max_sessions, config.drafts.default_jurisdiction)
            .with_idle_timeout(config.drafts.idle_timeout),
    );
    actix_web::rt::spawn(DraftSweeper::new(store.clone(), DEFAULT_SWEEP_INTERVAL).start());

    let draft_store = web::Data::from(store);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(draft_store.clone())
            .configure(dealerdesk::configure_app)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
