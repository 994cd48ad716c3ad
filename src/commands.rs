use crate::cli::Args;
use osu_mod_filter::config::Config;
use osu_mod_filter::error::AppError;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible or out-of-range arguments are used.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.configure && args.list_config {
        return Err(AppError::config_error(
            "Cannot use --configure and --list-config together",
        ));
    }
    if args.top == Some(0) {
        return Err(AppError::config_error("--top must be at least 1"));
    }
    if args.batch_size == Some(0) {
        return Err(AppError::config_error("--batch-size must be at least 1"));
    }
    if args.requests_per_minute == Some(0) {
        return Err(AppError::config_error("--rpm must be greater than zero"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    println!("osu! mod filter {}", env!("CARGO_PKG_VERSION"));
    Config::display().await
}

/// Handles the --configure command.
///
/// Prompts for OAuth client credentials and stores them next to the
/// existing settings.
pub async fn handle_configure_command() -> Result<(), AppError> {
    Config::configure().await?;
    println!(
        "Credentials saved to {}",
        Config::get_config_path()
    );
    Ok(())
}
