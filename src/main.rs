use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use poll_chat::config::{self, AppConfig};
use poll_chat::network::{ApiClient, SyncWorker};
use poll_chat::server::{self, ServerState};
use poll_chat::storage::MessageStore;
use poll_chat::ui::ChatApp;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

const UI_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "poll_chat", version, about = "Polling chat client and server")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the chat API (overrides the config file)
    #[arg(long, env = "CHAT_API_URL", value_name = "URL")]
    api_url: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Run the HTTP message service instead of the UI
    Server {
        /// Address to bind (overrides the config file)
        #[arg(long, env = "CHAT_LISTEN_ADDR", value_name = "ADDR")]
        listen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(url) = cli.api_url {
        app_config.api_base_url = url;
    }

    match cli.mode {
        Some(Mode::Server { listen }) => {
            if let Some(addr) = listen {
                app_config.listen_addr = addr;
            }
            run_server(&app_config).await
        }
        None => run_full_client(app_config, cli.config).await,
    }
}

async fn run_server(app_config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let listener = TcpListener::bind(&app_config.listen_addr).await?;
    let state = ServerState::new(Arc::new(MessageStore::new()));

    server::serve(listener, state, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Received shutdown signal, stopping chat server...");
        }
    })
    .await?;
    Ok(())
}

async fn run_full_client(app_config: AppConfig, config_path: String) -> Result<(), Box<dyn Error>> {
    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let api = ApiClient::new(&app_config.api_base_url, app_config.request_timeout())?;
    log::info!("Client polling {} every {:?}", api.base_url(), app_config.poll_interval());

    let worker = SyncWorker::new(api, event_tx, cmd_rx, app_config.poll_interval());
    tokio::spawn(worker.run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let display_name = app_config.display_name.clone();

    eframe::run_native(
        "Poll Chat",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                display_name.clone(),
                config_path.clone(),
                UI_REPAINT_INTERVAL,
            )))
        }),
    )?;
    Ok(())
}
