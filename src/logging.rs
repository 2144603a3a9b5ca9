use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stdout logging, plus an append-only file layer when a log path is given.
pub fn init_logging(log_level: Level, log_file: Option<&str>) {
    let level_filter = LevelFilter::from_level(log_level);
    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    if let Some(path) = log_file {
        let path = Path::new(path).to_path_buf();
        let file_layer = tracing_subscriber::fmt::layer().with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .expect("Failed to open log file")
        });
        tracing_subscriber::registry()
            .with(stdout_layer.with_filter(level_filter))
            .with(file_layer.with_filter(level_filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(stdout_layer.with_filter(level_filter))
            .init();
    }
}
