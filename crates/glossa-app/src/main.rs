use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glossa_core::state::AppState;
use tokio::signal;

pub mod cli;
pub mod io;
pub mod logging;
pub mod profile;
pub mod render;
pub mod session;


use self::cli::Cli;
use self::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine, it only supplies GLOSSA_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = profile::resolve_config(&cli)?;
    logging::init(&config.log);
    tracing::debug!("Effective config: {:?}", config);

    let dictionary = glossa_dictionary::load_all(&config.dictionary.paths)
        .context("failed to load dictionary")?;

    let state = Arc::new(AppState::new(config));
    state.set_dictionary(dictionary).await;

    let session = Session::new(state, cli.output_format(), cli.all);
    let mut stdout = tokio::io::stdout();

    if !cli.words.is_empty() {
        return session.run_words(&cli.words, &mut stdout).await;
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    let show_prompt = atty::is(atty::Stream::Stdin);
    session
        .run_until(io::stdin_lines(), &mut stdout, show_prompt, shutdown)
        .await
}
