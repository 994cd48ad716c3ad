use crate::cli::Args;
use osu_mod_filter::config::Config;
use osu_mod_filter::error::AppError;
use osu_mod_filter::report::OutputFormat;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "osu_mod_filter.log";

/// Sets up logging configuration for the application.
///
/// - Config commands: logs only to file
/// - Crawl with text output: logs to both stdout and file
/// - Crawl with json output: logs to stderr and file, keeping stdout parseable
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// `--log-file` takes precedence over `config_log_path`.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config_log_path: Option<&str>,
) -> Result<(String, WorkerGuard), AppError> {
    let custom_log_path = args.log_file.as_deref().or(config_log_path);
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
    // The guard flushes buffered lines when dropped
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(crate_filter(args.debug)?);

    if crate::cli::is_config_command(args) {
        tracing_subscriber::registry().with(file_layer).init();
    } else {
        let (console_writer, ansi) = match args.format {
            OutputFormat::Text => (BoxMakeWriter::new(std::io::stdout), true),
            OutputFormat::Json => (BoxMakeWriter::new(std::io::stderr), false),
        };
        tracing_subscriber::registry()
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(console_writer)
                    .with_ansi(ansi)
                    .with_filter(crate_filter(args.debug)?),
            )
            .init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

/// `RUST_LOG` plus this crate at info, or debug with `--debug`
fn crate_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive = format!("osu_mod_filter={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
