mod config;
mod error;
mod gemini;
mod gemini_client;
mod logging;
mod models;
mod request_id;
mod router;

use clap::Parser;
use config::Config;
use gemini_client::GeminiClient;
use router::AppState;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, error, info};

#[derive(Parser, Debug)]
#[command(name = "gemini-image-analyzer")]
#[command(about = "Analyzes images with a text prompt via the Gemini API")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Gemini model used for every request
    #[arg(short, long, default_value = config::DEFAULT_MODEL)]
    model: String,

    #[arg(long, default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Append logs to this file in addition to stdout
    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    // Create a shared reqwest client
    let client_builder = reqwest::Client::builder();
    let client_builder = if let Some(proxy) = &args.proxy {
        let proxy = reqwest::Proxy::all(proxy).expect("Failed to create proxy");
        client_builder.proxy(proxy)
    } else {
        client_builder
    };
    let http_client = Arc::new(client_builder.build().expect("Failed to build HTTP client"));

    // The credential is checked once here. Without it the server still
    // answers, but every analyze request gets a configuration error and
    // Gemini is never called.
    let gemini = match Config::from_env(&args.model, &args.api_base) {
        Ok(cfg) => {
            info!("Gemini client configured for model: {}", cfg.model);
            Some(Arc::new(GeminiClient::new(http_client, cfg)))
        }
        Err(e) => {
            error!("Gemini client not configured: {}", e);
            None
        }
    };

    let app = router::build_router(AppState { gemini });

    let bind_address = format!("{}:{}", args.ip, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
