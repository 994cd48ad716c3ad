// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use osu_mod_filter::config::Config;
use osu_mod_filter::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    commands::validate_args(&args)?;

    // Only the log location is needed here; credential prompting happens later
    let config_log_path = Config::load_from_path(&Config::get_config_path())
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    // Keep the guard alive for the duration of the program
    let (log_file_path, _guard) =
        logging::setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.configure {
        return commands::handle_configure_command().await;
    }

    let config = Config::load().await?;
    if let Err(e) = app::run_crawl_command(&args, &config).await {
        tracing::error!("Crawl failed: {e}");
        return Err(e);
    }

    Ok(())
}
