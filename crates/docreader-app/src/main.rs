use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

mod controller;
mod document;
mod events;
mod io;
mod state;
mod ui;

use self::controller::AppController;
use self::state::AppState;

/// Document reader core: offline dictionary lookups, saved vocabulary,
/// optional AI assistance
#[derive(Parser)]
#[command(name = "docreader", version)]
struct Args {
    /// External dictionary file (JSON array of word/definition records)
    #[arg(long)]
    dictionary: Option<String>,

    /// Vocabulary storage file
    #[arg(long)]
    vocabulary: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = docreader_config::Config::new();
    if let Some(path) = args.dictionary {
        config.dictionary.path = Some(path);
    }
    if let Some(path) = args.vocabulary {
        config.vocabulary.storage_path = path;
    }

    let state = Arc::new(AppState::new(config));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
    };

    run(state, shutdown).await;
    Ok(())
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
