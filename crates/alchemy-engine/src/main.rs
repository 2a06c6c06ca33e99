//! Lab driver binary for Neon Alchemy.
//!
//! Reads one command per line from stdin, feeds it to a [`LabSession`] and
//! writes the resulting game state (or the rejection) to stdout as one JSON
//! document per line. Logs go to stderr so stdout stays machine-readable.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `alchemy-config.yaml` (or `ALCHEMY_CONFIG`)
//! 2. Initialize structured logging (tracing), level from `RUST_LOG` or config
//! 3. Build the configured resolver (local catalog or remote oracle)
//! 4. Start the session and run the command loop until `quit` or EOF
//! 5. Cancel any reaction still in flight

mod command;
mod error;
mod resolver;

use std::path::PathBuf;

use alchemy_core::{GameConfig, LabSession};
use alchemy_lab::shop_items;
use serde::Serialize;
use alchemy_core::Resolver;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::error::EngineError;
use crate::resolver::ConfiguredResolver;

/// Config file looked up in the working directory when `ALCHEMY_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "alchemy-config.yaml";

/// Application entry point for the lab driver.
///
/// # Errors
///
/// Returns an error if configuration, resolver setup or stdio fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration. Logging depends on it, so report afterwards.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("alchemy-engine starting");
    match &source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        mode = ?config.resolver.mode,
        seed = ?config.lab.seed,
        max_input_slots = config.lab.max_input_slots,
        processing_delay_ms = config.lab.processing_delay_ms,
        "Lab configured"
    );

    // 3. Build the resolver.
    let resolver = ConfiguredResolver::from_config(&config)?;

    // 4. Run the session.
    let mut session = LabSession::new(&config, resolver);
    let mut stdout = tokio::io::stdout();
    emit(&mut stdout, session.state()).await?;

    let input = BufReader::new(tokio::io::stdin());
    let result = run(&mut session, input, &mut stdout).await;

    // 5. Shut down. Only a failed loop can leave a reaction in flight here.
    session.shutdown().await;
    info!(
        discoveries = session.state().inventory.len(),
        "alchemy-engine shutdown complete"
    );

    result.map_err(Into::into)
}

/// The command loop. Returns on `quit` or end of input, after the reaction
/// still in flight, if any, has been applied and its state written.
async fn run<R: Resolver + 'static>(
    session: &mut LabSession<R>,
    input: impl AsyncBufRead + Unpin,
    stdout: &mut (impl AsyncWrite + Unpin),
) -> Result<(), EngineError> {
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        // Pick up a reaction that finished while we were waiting for input.
        if session.poll().await {
            emit(stdout, session.state()).await?;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "command rejected");
                emit(stdout, &serde_json::json!({ "error": e.to_string() })).await?;
                continue;
            }
        };

        match command {
            Command::Intent(intent) => match session.dispatch(&intent) {
                Ok(state) => emit(stdout, state).await?,
                Err(rejection) => {
                    emit(
                        stdout,
                        &serde_json::json!({ "rejection": rejection.to_string() }),
                    )
                    .await?;
                }
            },
            Command::Wait => {
                session.settle().await;
                emit(stdout, session.state()).await?;
            }
            Command::State => emit(stdout, session.state()).await?,
            Command::Shop => emit(stdout, &shop_items()).await?,
            Command::Help => emit(stdout, &serde_json::json!({ "help": HELP })).await?,
            Command::Quit => break,
        }
    }

    if session.settle().await {
        emit(stdout, session.state()).await?;
    }
    Ok(())
}

/// Write one JSON document followed by a newline.
async fn emit(
    stdout: &mut (impl AsyncWrite + Unpin),
    value: &impl Serialize,
) -> Result<(), EngineError> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    stdout.write_all(&line).await?;
    stdout.flush().await?;
    Ok(())
}

/// Load the game configuration.
///
/// Reads `ALCHEMY_CONFIG` if set, otherwise `alchemy-config.yaml` in the
/// working directory. A missing file means defaults; the returned path is
/// `None` in that case.
fn load_config() -> Result<(GameConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var_os("ALCHEMY_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = GameConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((GameConfig::default(), None))
    }
}
