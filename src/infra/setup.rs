use std::{fs::File, path::Path, sync::Arc};

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    infra::{InfraError, config::AppConfig, postgres_persistence},
    use_cases::{
        admin::AdminUseCases,
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let postgres_arc = Arc::new(
        postgres_persistence(&config.database_url, config.database_max_connections).await?,
    );
    let waitlist_repo_arc = postgres_arc.clone() as Arc<dyn WaitlistRepo>;

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc.clone());

    let admin_use_cases = AdminUseCases::new(
        waitlist_repo_arc,
        config.admin_password.clone(),
        config.jwt_secret.clone(),
        config.admin_session_ttl,
    );

    info!(bind_addr = %config.bind_addr, "Application state initialized");

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        admin_use_cases: Arc::new(admin_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when configured
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
