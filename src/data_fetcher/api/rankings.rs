//! Top-N user list from the performance ranking

use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::session::ApiSession;
use super::urls::build_ranking_url;
use crate::constants::pagination;
use crate::data_fetcher::models::{GameMode, RankedUser, RankingResponse};
use crate::error::AppError;

/// Paging parameters of the ranking endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub page_size: u32,
    pub max_pages: u32,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            page_size: pagination::RANKING_PAGE_SIZE,
            max_pages: pagination::MAX_RANKING_PAGES,
        }
    }
}

/// Fetches the `count` best ranked users of `mode`, assigning ranks 1..=N in fetch order.
///
/// Paging starts at page 1 and ends when `count` users are collected, or when a
/// page is missing its `ranking` array, is empty, or is shorter than the page
/// size (end of data). Entries without a user object are skipped and do not
/// consume a rank. The rate limiter is awaited before every page request.
///
/// # Errors
/// * `AppError::RankingFetch` - Any page request or decode failed; the run cannot continue
/// * `AppError::PaginationLimitExceeded` - The page after `options.max_pages` still holds entries
#[instrument(skip(session, options))]
pub async fn fetch_top_users(
    session: &ApiSession,
    mode: GameMode,
    count: u32,
    options: &RankingOptions,
) -> Result<Vec<RankedUser>, AppError> {
    let mut users: Vec<RankedUser> = Vec::new();
    let mut page = 1u32;

    while (users.len() as u32) < count {
        session.limiter.wait().await;
        let url = build_ranking_url(&session.base_url, mode, options.page_size, page);
        let response: RankingResponse = fetch(&session.client, &url)
            .await
            .map_err(|e| AppError::ranking_fetch(page, e))?;

        let Some(entries) = response.ranking else {
            info!("Ranking page {page} has no ranking data, assuming end of ranking");
            break;
        };
        if entries.is_empty() {
            info!("Ranking page {page} is empty, assuming end of ranking");
            break;
        }
        // Page past the cap only confirms the end of data
        if page > options.max_pages {
            return Err(AppError::pagination_limit_exceeded(
                format!("{mode} performance ranking"),
                options.max_pages,
            ));
        }

        let page_len = entries.len() as u32;
        for entry in entries {
            let Some(user) = entry.user else {
                debug!("Skipping ranking entry without user on page {page}");
                continue;
            };

            let rank = users.len() as u32 + 1;
            info!("Fetched user: {} (Rank {rank})", user.display_name());
            users.push(RankedUser::new(user.id, user.display_name(), rank));

            if users.len() as u32 >= count {
                break;
            }
        }

        if page_len < options.page_size {
            debug!("Ranking page {page} was short ({page_len} entries), end of ranking");
            break;
        }
        page += 1;
    }

    info!("Fetched {} ranked users", users.len());
    Ok(users)
}
