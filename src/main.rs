//! Music Buff server binary.
//!
//! Loads configuration, installs the tracing subscriber, wires the Wikipedia
//! lookup client into the skill and serves the webhook.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use music_buff::adapters::http::{skill_app, SkillAppState};
use music_buff::adapters::lookup::WikipediaLookupClient;
use music_buff::application::{MusicBuffSkill, SkillExecutor};
use music_buff::config::{AppConfig, ServerConfig};
use music_buff::domain::foundation::ApplicationId;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let lookup = WikipediaLookupClient::new(config.wikipedia.clone())?;
    let skill = MusicBuffSkill::new(Arc::new(lookup))
        .with_default_artist(&config.skill.default_artist)
        .with_lookup_deadline(config.server.lookup_deadline());

    let mut executor = SkillExecutor::new(Arc::new(skill));
    if let Some(application_id) = config.skill.enforced_application_id() {
        executor = executor.with_application_id(ApplicationId::new(application_id)?);
    }

    let app = skill_app(SkillAppState::new(executor), config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        extraction = %config.wikipedia.extraction,
        "Music Buff listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Music Buff stopped");
    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
