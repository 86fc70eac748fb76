use std::path::PathBuf;

use clap::Parser;
use spellhost_app::server;
use spellhost_app::state::AppState;
use spellhost_app::{profile, telemetry};
use spellhost_config::Config;
use spellhost_core::{discover, search_paths, IsoLocaleDatabase, Platform};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Serve installed Hunspell dictionaries to a browser spell checker
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON profile; environment defaults are used if it does not exist
    #[arg(long, env = "SPELLHOST_CONFIG", default_value = "spellhost.json")]
    config: PathBuf,

    /// Override the listen address
    #[arg(long)]
    bind: Option<String>,

    /// Extra directory to scan (repeatable)
    #[arg(long = "dictionary-path", value_name = "DIR")]
    dictionary_paths: Vec<PathBuf>,

    /// Skip the OS dictionary directories
    #[arg(long)]
    no_system_paths: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(bind) = self.bind {
            config.network.bind = bind;
        }
        config.dictionary.additional_paths.extend(self.dictionary_paths);
        if self.no_system_paths {
            config.dictionary.include_system_paths = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config_path = args.config.clone();
    let mut config = profile::load_config(&config_path)?;
    args.apply(&mut config);

    telemetry::init(config.log_json);
    tracing::info!(profile = %config_path.display(), "configuration loaded");

    // Discovery finishes before the listener binds
    let paths = search_paths(&config.dictionary, Platform::current());
    let locales = IsoLocaleDatabase::new(config.dictionary.display_language);
    let catalog = tokio::task::spawn_blocking(move || discover(&paths, &locales)).await?;

    if catalog.is_empty() {
        tracing::warn!("No hunspell dictionaries found, the frontend will offer no languages");
    }
    if config.auth.token.is_none() {
        tracing::warn!("SPELLHOST_TOKEN is not set, the catalog endpoint is unauthenticated");
    }

    let bind = config.network.bind.clone();
    let state = AppState::new(config, catalog);
    let mount_path = state.mount_path.clone();
    let app = server::router(state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(
        "Registered spellhost at URL path {mount_path}, listening on {}",
        listener.local_addr()?
    );

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        return;
    }
    tracing::info!("Shutdown requested");
    cancel.cancel();
}
