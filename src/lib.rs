pub mod commands;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod host;
pub mod logger;
pub mod models;
pub mod upload;
pub mod validation;
pub mod wizard;

pub use error::{Result, StudioError};

use commands::StudioState;
use host::StudioHost;

/// Loads the config and serves studio commands over stdin/stdout.
pub async fn run() -> Result<()> {
    let config = config::load_config()?;
    tracing::info!("Upload provider: {:?}", config.upload_provider);

    let state = StudioState::new(&config)?;
    let host = StudioHost::new(state);
    host.serve(tokio::io::stdin(), tokio::io::stdout()).await
}
