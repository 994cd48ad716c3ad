//! Batched crawl over the ranked users

use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::constants::crawl;
use crate::data_fetcher::api::{
    ApiSession, ExcludedModCheck, PlayModsChecker, RankingOptions, ScoreScanOptions,
    create_authorized_client, create_http_client_with_timeout, fetch_top_users, get_token,
};
use crate::data_fetcher::models::{GameMode, RankedUser};
use crate::data_fetcher::rate_limiter::{RateLimiter, ThrottleMode};
use crate::error::AppError;
use crate::mods::ModExclusionSet;

/// A user whose check failed and who is therefore left out of the result.
#[derive(Debug, Clone)]
pub struct FailedUser {
    pub user: RankedUser,
    pub reason: String,
}

/// Aggregated result of a crawl.
///
/// `qualified` holds the users without any excluded-mod play in batch
/// completion order; sort it by rank before presenting it.
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub qualified: Vec<RankedUser>,
    pub excluded: usize,
    pub failed: Vec<FailedUser>,
}

impl CrawlOutcome {
    pub fn checked(&self) -> usize {
        self.qualified.len() + self.excluded + self.failed.len()
    }
}

/// Runs excluded-mod checks in fixed-size batches.
///
/// Each batch runs one check per user concurrently and waits for all of them
/// before the next batch starts, so at most `batch_size` checks are in flight.
/// Results are merged after the barrier. A failing check only drops its user.
pub struct BatchCoordinator<'a, C> {
    checker: &'a C,
    batch_size: usize,
    batch_limiter: Option<Arc<RateLimiter>>,
}

impl<'a, C: ExcludedModCheck> BatchCoordinator<'a, C> {
    pub fn new(checker: &'a C, batch_size: usize) -> Result<Self, AppError> {
        if batch_size == 0 {
            return Err(AppError::config_error("Batch size must be at least 1"));
        }
        Ok(Self {
            checker,
            batch_size,
            batch_limiter: None,
        })
    }

    /// Awaits `limiter` before each batch, spacing batch starts by its interval.
    pub fn with_batch_throttle(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.batch_limiter = Some(limiter);
        self
    }

    #[instrument(skip(self, users), fields(users = users.len(), batch_size = self.batch_size))]
    pub async fn run(&self, users: &[RankedUser]) -> CrawlOutcome {
        let mut outcome = CrawlOutcome::default();
        let batch_count = users.len().div_ceil(self.batch_size);

        for (index, batch) in users.chunks(self.batch_size).enumerate() {
            if let Some(limiter) = &self.batch_limiter {
                limiter.wait().await;
            }

            info!(
                "Checking batch {}/{} ({} users)",
                index + 1,
                batch_count,
                batch.len()
            );

            let checks = batch.iter().map(|user| async move {
                let result = self.checker.has_excluded_mod_play(user).await;
                (user, result)
            });
            let results = futures::future::join_all(checks).await;

            for (user, result) in results {
                match result {
                    Ok(false) => {
                        info!("User {user} has no plays with excluded mods");
                        outcome.qualified.push(user.clone());
                    }
                    Ok(true) => {
                        outcome.excluded += 1;
                    }
                    Err(e) => {
                        if e.is_timeout() {
                            warn!("Timed out checking {}: {e}", user.username);
                        } else {
                            error!("Error fetching {}: {e}", user.username);
                        }
                        outcome.failed.push(FailedUser {
                            user: user.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "Crawl finished: {} qualified, {} excluded, {} failed",
            outcome.qualified.len(),
            outcome.excluded,
            outcome.failed.len()
        );
        outcome
    }
}

/// Parameters of one crawl, assembled from defaults, config and command line.
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    pub top_users: u32,
    pub batch_size: usize,
    pub mode: GameMode,
    pub exclusions: ModExclusionSet,
    pub requests_per_minute: u32,
    pub throttle: ThrottleMode,
    pub ranking: RankingOptions,
    pub scores: ScoreScanOptions,
}

impl CrawlSettings {
    /// Settings with the built-in defaults and the config's budget and exclusions.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            top_users: crawl::DEFAULT_TOP_USERS,
            batch_size: crawl::DEFAULT_BATCH_SIZE,
            mode: GameMode::default(),
            exclusions: ModExclusionSet::new(&config.excluded_mods)?,
            requests_per_minute: config.requests_per_minute,
            throttle: ThrottleMode::default(),
            ranking: RankingOptions::default(),
            scores: ScoreScanOptions::default(),
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.batch_size == 0 {
            return Err(AppError::config_error("Batch size must be at least 1"));
        }
        if self.requests_per_minute == 0 {
            return Err(AppError::config_error(
                "Requests per minute must be greater than zero",
            ));
        }
        if self.ranking.page_size == 0 || self.scores.page_size == 0 {
            return Err(AppError::config_error("Page sizes must be at least 1"));
        }
        Ok(())
    }
}

/// Runs the whole crawl: token exchange, ranking fetch and batched mod checks.
///
/// Authentication and ranking failures abort the run. Failures while checking
/// a single user are recorded in [`CrawlOutcome::failed`].
pub async fn run_crawl(config: &Config, settings: &CrawlSettings) -> Result<CrawlOutcome, AppError> {
    settings.validate()?;
    let (client_id, client_secret) = config.credentials()?;

    let auth_client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let token = get_token(&auth_client, &config.api_base_url, client_id, client_secret).await?;

    let client = create_authorized_client(config.http_timeout_seconds, &token)?;
    let limiter = Arc::new(RateLimiter::from_requests_per_minute(
        settings.requests_per_minute,
    )?);
    info!(
        "Request spacing {:?} ({} requests per minute, throttle {:?})",
        limiter.interval(),
        settings.requests_per_minute,
        settings.throttle
    );
    let session = ApiSession::new(client, config.api_base_url.as_str(), Arc::clone(&limiter));

    let users = fetch_top_users(&session, settings.mode, settings.top_users, &settings.ranking).await?;

    let checker = PlayModsChecker::new(
        session,
        settings.mode,
        settings.exclusions.clone(),
        settings.scores,
        settings.throttle,
    );
    let mut coordinator = BatchCoordinator::new(&checker, settings.batch_size)?;
    if settings.throttle == ThrottleMode::PerBatch {
        coordinator = coordinator.with_batch_throttle(limiter);
    }

    info!(
        "Checking {} users for plays with {}",
        users.len(),
        checker.exclusions()
    );
    Ok(coordinator.run(&users).await)
}
