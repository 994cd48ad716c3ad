pub mod auth;
pub mod best_scores;
pub mod http_client;
pub mod rankings;
pub mod session;
pub mod urls;
mod fetch_utils;

pub use auth::get_token;
pub use best_scores::{ExcludedModCheck, PlayModsChecker, ScoreScanOptions};
pub use http_client::{create_authorized_client, create_http_client_with_timeout};
pub use rankings::{RankingOptions, fetch_top_users};
pub use session::ApiSession;
pub use urls::*;
