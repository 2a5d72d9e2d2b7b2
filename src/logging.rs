use crate::cli::Args;
use golf_teletext::config::Config;
use golf_teletext::constants::env_vars;
use golf_teletext::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "golf_teletext.log";
const LOG_DIRECTIVE: &str = "golf_teletext=info";

fn build_filter() -> Result<EnvFilter, AppError> {
    let directive = LOG_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Reads the log file path from the config file or `GOLF_LOG_FILE` without
/// prompting for anything, so logging can start before the config is complete.
async fn configured_log_path() -> Option<String> {
    match Config::load_from_path(&Config::get_config_path()).await {
        Ok(mut config) => {
            config.apply_env_overrides();
            config.log_file_path
        }
        Err(_) => std::env::var(env_vars::LOG_FILE).ok(),
    }
}

/// Sets up logging configuration for the application.
///
/// - Logs always go to a daily rolling file
/// - Debug mode also logs to stdout
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = configured_log_path().await;

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the program's logging or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(build_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(build_filter()?),
            )
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    } else {
        registry
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
