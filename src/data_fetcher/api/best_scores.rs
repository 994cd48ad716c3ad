//! Excluded-mod detection over a user's best plays

use std::future::Future;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::session::ApiSession;
use super::urls::build_best_scores_url;
use crate::constants::pagination;
use crate::data_fetcher::models::{GameMode, Play, RankedUser};
use crate::data_fetcher::rate_limiter::ThrottleMode;
use crate::error::AppError;
use crate::mods::ModExclusionSet;

/// Decides whether a user has at least one best play with an excluded mod.
///
/// This is the seam between the batch coordinator and the API, so the
/// coordinator can be driven by fixtures in tests.
pub trait ExcludedModCheck {
    fn has_excluded_mod_play(
        &self,
        user: &RankedUser,
    ) -> impl Future<Output = Result<bool, AppError>>;
}

/// Paging parameters of the best-scores endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreScanOptions {
    pub page_size: u32,
    pub max_pages: u32,
}

impl Default for ScoreScanOptions {
    fn default() -> Self {
        Self {
            page_size: pagination::SCORES_PAGE_SIZE,
            max_pages: pagination::MAX_SCORE_PAGES,
        }
    }
}

/// Pages through `GET /users/{id}/scores/best` looking for excluded mods.
#[derive(Debug, Clone)]
pub struct PlayModsChecker {
    session: ApiSession,
    mode: GameMode,
    exclusions: ModExclusionSet,
    options: ScoreScanOptions,
    throttle: ThrottleMode,
}

impl PlayModsChecker {
    pub fn new(
        session: ApiSession,
        mode: GameMode,
        exclusions: ModExclusionSet,
        options: ScoreScanOptions,
        throttle: ThrottleMode,
    ) -> Self {
        Self {
            session,
            mode,
            exclusions,
            options,
            throttle,
        }
    }

    pub fn exclusions(&self) -> &ModExclusionSet {
        &self.exclusions
    }
}

impl ExcludedModCheck for PlayModsChecker {
    /// Returns `true` as soon as one page holds a play with an excluded mod; no
    /// later page is requested. Returns `false` once an empty or short page shows
    /// the plays are exhausted. The offset advances by the number of plays received.
    ///
    /// With [`ThrottleMode::PerRequest`] the rate limiter is awaited before every
    /// page; with [`ThrottleMode::PerBatch`] throttling is left to the coordinator.
    ///
    /// # Errors
    /// * `AppError::PlayFetch` - A page failed to load or decode, or the page cap was hit
    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn has_excluded_mod_play(&self, user: &RankedUser) -> Result<bool, AppError> {
        let mut offset = 0u32;
        let mut scanned = 0usize;

        for _ in 0..self.options.max_pages {
            if self.throttle == ThrottleMode::PerRequest {
                self.session.limiter.wait().await;
            }

            info!(
                "Fetching top plays for {} (#{}) | offset {offset}...",
                user.username, user.rank
            );
            let url = build_best_scores_url(
                &self.session.base_url,
                user.id,
                self.options.page_size,
                offset,
                self.mode,
            );
            let plays: Vec<Play> = fetch(&self.session.client, &url)
                .await
                .map_err(|e| AppError::play_fetch(user.id, offset, e))?;

            if let Some(play) = plays.iter().find(|play| self.exclusions.matches(play)) {
                debug!(
                    "{} has a play with mods [{}]",
                    user.username,
                    play.acronyms().collect::<Vec<_>>().join(", ")
                );
                return Ok(true);
            }

            scanned += plays.len();
            if (plays.len() as u32) < self.options.page_size {
                info!("Finished checking {scanned} plays for {user}.");
                return Ok(false);
            }
            offset += plays.len() as u32;
        }

        Err(AppError::play_fetch(
            user.id,
            offset,
            AppError::pagination_limit_exceeded(
                format!("best plays of user {}", user.id),
                self.options.max_pages,
            ),
        ))
    }
}
