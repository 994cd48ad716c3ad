//! URL building utilities for API endpoints

use crate::data_fetcher::models::GameMode;

/// Builds the OAuth token endpoint URL.
///
/// # Example
/// ```
/// use osu_mod_filter::data_fetcher::api::build_token_url;
///
/// let url = build_token_url("https://osu.ppy.sh");
/// assert_eq!(url, "https://osu.ppy.sh/oauth/token");
/// ```
pub fn build_token_url(base_url: &str) -> String {
    format!("{base_url}/oauth/token")
}

/// Builds a performance ranking page URL.
///
/// # Arguments
/// * `base_url` - The API host, without trailing slash
/// * `mode` - Ruleset of the ranking
/// * `limit` - Requested page size
/// * `page` - 1-based page number
///
/// # Example
/// ```
/// use osu_mod_filter::data_fetcher::api::build_ranking_url;
/// use osu_mod_filter::data_fetcher::models::GameMode;
///
/// let url = build_ranking_url("https://osu.ppy.sh", GameMode::Osu, 50, 3);
/// assert_eq!(url, "https://osu.ppy.sh/api/v2/rankings/osu/performance?limit=50&page=3");
/// ```
pub fn build_ranking_url(base_url: &str, mode: GameMode, limit: u32, page: u32) -> String {
    format!("{base_url}/api/v2/rankings/{mode}/performance?limit={limit}&page={page}")
}

/// Builds a best-scores page URL for one user.
///
/// # Example
/// ```
/// use osu_mod_filter::data_fetcher::api::build_best_scores_url;
/// use osu_mod_filter::data_fetcher::models::GameMode;
///
/// let url = build_best_scores_url("https://osu.ppy.sh", 7562902, 100, 200, GameMode::Osu);
/// assert_eq!(
///     url,
///     "https://osu.ppy.sh/api/v2/users/7562902/scores/best?limit=100&offset=200&mode=osu"
/// );
/// ```
pub fn build_best_scores_url(
    base_url: &str,
    user_id: u64,
    limit: u32,
    offset: u32,
    mode: GameMode,
) -> String {
    format!("{base_url}/api/v2/users/{user_id}/scores/best?limit={limit}&offset={offset}&mode={mode}")
}
