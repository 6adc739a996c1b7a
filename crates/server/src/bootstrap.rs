use std::sync::Arc;

use fridgefix_core::config::{AppConfig, ConfigError};
use fridgefix_core::{InMemoryConversationStore, IntakeEngine};
use thiserror::Error;
use tracing::info;

pub type SharedEngine = Arc<IntakeEngine<InMemoryConversationStore>>;

pub struct Application {
    pub config: AppConfig,
    pub engine: SharedEngine,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    config.validate()?;

    let engine = Arc::new(IntakeEngine::new(
        InMemoryConversationStore::new(),
        config.intake.settings(),
    ));
    info!(
        event_name = "system.bootstrap.engine_ready",
        correlation_id = "bootstrap",
        brand_name = %config.intake.brand_name,
        max_attempts = config.intake.max_attempts,
        twilio_account_pinned = config.twilio.account_sid.is_some(),
        twilio_number_pinned = config.twilio.whatsapp_number.is_some(),
        "intake engine initialized with in-memory conversation store"
    );

    Ok(Application { config, engine })
}
