//! osu! mod filter library
//!
//! Finds the top ranked osu! players whose best plays never use any mod
//! from an exclusion set (DT and NC by default).
//!
//! The crawl exchanges OAuth client credentials for a bearer token, walks the
//! global performance ranking page by page and then checks every player's
//! best plays in concurrent batches, spacing requests to stay within the
//! configured request budget.
//!
//! # Examples
//!
//! ```rust,no_run
//! use osu_mod_filter::config::Config;
//! use osu_mod_filter::crawler::{CrawlSettings, run_crawl};
//! use osu_mod_filter::error::AppError;
//! use osu_mod_filter::report::{OutputFormat, Report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let mut settings = CrawlSettings::from_config(&config)?;
//!     settings.top_users = 100;
//!
//!     let outcome = run_crawl(&config, &settings).await?;
//!
//!     let report = Report::from_outcome(&outcome, &settings.exclusions);
//!     report.write(OutputFormat::Text, &mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod crawler;
pub mod data_fetcher;
pub mod error;
pub mod mods;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use crawler::{BatchCoordinator, CrawlOutcome, CrawlSettings, FailedUser, run_crawl};
pub use data_fetcher::{GameMode, RankedUser, RateLimiter, ThrottleMode};
pub use error::AppError;
pub use mods::ModExclusionSet;
pub use report::{OutputFormat, Report, ReportEntry};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
