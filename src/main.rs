// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update, is_round_command};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_round_command,
    handle_view_command,
};
use golf_teletext::error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    if is_round_command(&args) {
        return handle_round_command(&args).await;
    }

    handle_view_command(&args).await
}
