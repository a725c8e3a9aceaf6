mod node;

use clap::Parser;
use dotenvy::dotenv;
use node::ChatNode;
use poll_chat::config;
use tokio::signal;

#[derive(Parser)]
#[command(name = "chat-server", version, about = "Headless chat message service")]
struct Args {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Address to bind (overrides the config file)
    #[arg(long, env = "CHAT_LISTEN_ADDR", value_name = "ADDR")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let app_config = config::load_config(&args.config);
    let listen_addr = args.listen.unwrap_or(app_config.listen_addr);

    log::info!("Starting chat server on {listen_addr}...");

    let node = ChatNode::new(listen_addr);

    tokio::select! {
        result = node.run() => {
            if let Err(err) = result {
                log::error!("Chat server error: {}", err);
            }
        }
        _ = signal::ctrl_c() => {
            log::info!("Received shutdown signal, stopping chat server...");
        }
    }

    log::info!("Final statistics: {} stored messages", node.message_count());

    Ok(())
}
