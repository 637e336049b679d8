//! `serve` command: run the HTTP API

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::api::{self, AppState};
use crate::config::ServerSettings;
use crate::error::{TrackerError, TrackerResult};
use crate::services::Ledger;

/// Overrides for the configured server settings
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (default from config.json)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// HTML file served at `/`
    #[arg(short, long)]
    pub index: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply the command-line overrides on top of the configured settings
    pub fn apply(self, mut settings: ServerSettings) -> ServerSettings {
        if let Some(bind) = self.bind {
            settings.bind_address = bind;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(index) = self.index {
            settings.index_file = index;
        }
        settings
    }
}

/// Run the server on a fresh multi-threaded runtime until Ctrl-C
pub fn handle_serve_command(ledger: Arc<Ledger>, settings: ServerSettings) -> TrackerResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| TrackerError::Server(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async move {
        let listener = api::bind(&settings).await?;
        let state = AppState::new(ledger, settings.index_file.clone());
        api::serve(listener, state, &settings).await
    })
}
