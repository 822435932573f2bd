use mimalloc::MiMalloc;
use quizbuddy::config::Config;
use quizbuddy::db::QuizStorage;
use quizbuddy::mail::SmtpMailer;
use quizbuddy::service::clock::SystemClock;
use quizbuddy::{QuizState, quiz_router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        smtp_host = %cfg.smtp.host,
        smtp_port = cfg.smtp.port,
        teacher_email = %cfg.teacher_email,
        loglevel = %cfg.loglevel
    );

    // Schema creation happens exactly once, here.
    let storage = QuizStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;

    let mailer = SmtpMailer::from_config(&cfg.smtp)?;

    let state = QuizState::new(
        storage,
        Arc::new(mailer),
        Arc::new(SystemClock),
        cfg.teacher_email.as_str(),
    );
    let app = quiz_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
