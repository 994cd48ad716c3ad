pub mod api;
pub mod models;
pub mod rate_limiter;

pub use api::{ApiSession, ExcludedModCheck, PlayModsChecker, fetch_top_users, get_token};
pub use models::{GameMode, RankedUser};
pub use rate_limiter::{RateLimiter, ThrottleMode};
