//! Application-wide constants and configuration defaults
//!
//! This module centralizes the magic numbers of the crawler so that the
//! API page sizes, budgets and environment variable names live in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default API host. The v2 API lives under `/api/v2`, the token endpoint under `/oauth/token`.
pub const DEFAULT_API_BASE_URL: &str = "https://osu.ppy.sh";

/// Default osu! API requests-per-minute budget.
/// The API terms of use ask clients to stay well below 1200 requests per minute.
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 240;

/// Crawl defaults used when neither the config file nor the command line set a value
pub mod crawl {
    /// Number of top ranked users to inspect
    pub const DEFAULT_TOP_USERS: u32 = 1000;

    /// Number of users checked concurrently in one batch
    pub const DEFAULT_BATCH_SIZE: usize = 20;

    /// Modifiers a qualifying user must never have used in a best play
    pub const DEFAULT_EXCLUDED_MODS: &[&str] = &["DT", "NC"];
}

/// Pagination limits for the paged endpoints
pub mod pagination {
    /// Entries per page of the performance ranking (fixed by the API)
    pub const RANKING_PAGE_SIZE: u32 = 50;

    /// Plays requested per page of a user's best scores (API maximum)
    pub const SCORES_PAGE_SIZE: u32 = 100;

    /// Hard cap on ranking pages. The API serves at most 200 pages (10 000 users).
    pub const MAX_RANKING_PAGES: u32 = 200;

    /// Hard cap on best-score pages per user. The API keeps at most 200 best plays.
    pub const MAX_SCORE_PAGES: u32 = 10;
}

/// Environment variable names
pub mod env_vars {
    /// OAuth client id
    pub const CLIENT_ID: &str = "OSU_CLIENT_ID";

    /// OAuth client secret
    pub const CLIENT_SECRET: &str = "OSU_CLIENT_SECRET";

    /// Override for the API host
    pub const API_BASE_URL: &str = "OSU_API_BASE_URL";

    /// Log file path override
    pub const LOG_FILE: &str = "OSU_MOD_FILTER_LOG_FILE";

    /// HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "OSU_HTTP_TIMEOUT";

    /// Requests-per-minute budget
    pub const REQUESTS_PER_MINUTE: &str = "OSU_REQUESTS_PER_MINUTE";
}
