use crate::cli::Args;
use osu_mod_filter::config::Config;
use osu_mod_filter::crawler::{CrawlSettings, run_crawl};
use osu_mod_filter::error::AppError;
use osu_mod_filter::mods::ModExclusionSet;
use osu_mod_filter::report::Report;
use std::io::{Write, stdout};
use tracing::info;

/// Combines the config with command line overrides.
pub fn build_settings(args: &Args, config: &Config) -> Result<CrawlSettings, AppError> {
    let mut settings = CrawlSettings::from_config(config)?;

    if let Some(top) = args.top {
        settings.top_users = top;
    }
    if let Some(batch_size) = args.batch_size {
        settings.batch_size = batch_size;
    }
    if let Some(exclude) = &args.exclude {
        settings.exclusions = ModExclusionSet::new(exclude)?;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(rpm) = args.requests_per_minute {
        settings.requests_per_minute = rpm;
    }
    if let Some(throttle) = args.throttle {
        settings.throttle = throttle;
    }

    settings.validate()?;
    Ok(settings)
}

/// Runs a crawl and writes the report to stdout.
pub async fn run_crawl_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let settings = build_settings(args, config)?;
    info!(
        "Looking for the top {} {} players without {} plays",
        settings.top_users, settings.mode, settings.exclusions
    );

    let outcome = run_crawl(config, &settings).await?;
    let report = Report::from_outcome(&outcome, &settings.exclusions);

    let mut out = stdout().lock();
    report.write(args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use osu_mod_filter::data_fetcher::{GameMode, ThrottleMode};

    #[test]
    fn test_settings_follow_config_without_flags() {
        let config = Config {
            requests_per_minute: 100,
            excluded_mods: vec!["HT".to_string()],
            ..Config::default()
        };
        let args = Args::try_parse_from(["osu_mod_filter"]).unwrap();

        let settings = build_settings(&args, &config).unwrap();

        assert_eq!(settings.top_users, 1000);
        assert_eq!(settings.batch_size, 20);
        assert_eq!(settings.mode, GameMode::Osu);
        assert_eq!(settings.requests_per_minute, 100);
        assert_eq!(settings.exclusions.to_string(), "HT");
        assert_eq!(settings.throttle, ThrottleMode::PerRequest);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "osu_mod_filter",
            "-n",
            "30",
            "-b",
            "7",
            "-x",
            "hr,dt",
            "-m",
            "taiko",
            "--rpm",
            "30",
            "--throttle",
            "per-batch",
        ])
        .unwrap();

        let settings = build_settings(&args, &Config::default()).unwrap();

        assert_eq!(settings.top_users, 30);
        assert_eq!(settings.batch_size, 7);
        assert_eq!(settings.mode, GameMode::Taiko);
        assert_eq!(settings.requests_per_minute, 30);
        assert_eq!(settings.exclusions.to_string(), "DT/HR");
        assert_eq!(settings.throttle, ThrottleMode::PerBatch);
    }

    #[test]
    fn test_invalid_exclusion_flag() {
        let args = Args::try_parse_from(["osu_mod_filter", "-x", "D-T"]).unwrap();
        assert!(build_settings(&args, &Config::default()).is_err());
    }
}
