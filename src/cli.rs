use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use osu_mod_filter::data_fetcher::{GameMode, ThrottleMode};
use osu_mod_filter::report::OutputFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the run only touches the local configuration
pub fn is_config_command(args: &Args) -> bool {
    args.configure || args.list_config
}

/// osu! mod filter
///
/// Walks the global performance ranking and lists the top players whose
/// best plays never use any of the excluded mods (DT and NC by default).
///
/// Requires OAuth client credentials of a registered osu! application,
/// either in the config file or in OSU_CLIENT_ID / OSU_CLIENT_SECRET.
#[derive(Parser, Debug, Default)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Number of top ranked players to check
    #[arg(short = 'n', long = "top", value_name = "COUNT", help_heading = "Crawl")]
    pub top: Option<u32>,

    /// Number of players checked concurrently in one batch
    #[arg(short = 'b', long = "batch-size", value_name = "SIZE", help_heading = "Crawl")]
    pub batch_size: Option<usize>,

    /// Comma separated mod acronyms that disqualify a player, e.g. "DT,NC,HT".
    /// Overrides the excluded_mods setting in the config file.
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "MODS",
        value_delimiter = ',',
        help_heading = "Crawl"
    )]
    pub exclude: Option<Vec<String>>,

    /// Ruleset whose ranking and best plays are checked
    #[arg(short = 'm', long = "mode", value_enum, help_heading = "Crawl")]
    pub mode: Option<GameMode>,

    /// Request budget per minute. Requests are spaced evenly, no bursts.
    #[arg(long = "rpm", value_name = "REQUESTS", help_heading = "Rate Limiting")]
    pub requests_per_minute: Option<u32>,

    /// Where the request budget is enforced while checking plays
    #[arg(long = "throttle", value_enum, help_heading = "Rate Limiting")]
    pub throttle: Option<ThrottleMode>,

    /// Output format of the final report
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text, help_heading = "Output")]
    pub format: OutputFormat,

    /// Prompt for OAuth client credentials and store them in the config file
    #[arg(long = "configure", help_heading = "Configuration")]
    pub configure: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["osu_mod_filter"]).unwrap();

        assert_eq!(args.top, None);
        assert_eq!(args.batch_size, None);
        assert_eq!(args.exclude, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!is_config_command(&args));
    }

    #[test]
    fn test_crawl_flags() {
        let args = Args::try_parse_from([
            "osu_mod_filter",
            "-n",
            "200",
            "-b",
            "10",
            "--exclude",
            "dt,nc,ht",
            "--mode",
            "mania",
            "--rpm",
            "60",
            "--throttle",
            "per-batch",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.top, Some(200));
        assert_eq!(args.batch_size, Some(10));
        assert_eq!(
            args.exclude,
            Some(vec!["dt".to_string(), "nc".to_string(), "ht".to_string()])
        );
        assert_eq!(args.mode, Some(GameMode::Mania));
        assert_eq!(args.requests_per_minute, Some(60));
        assert_eq!(args.throttle, Some(ThrottleMode::PerBatch));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_commands() {
        let args = Args::try_parse_from(["osu_mod_filter", "-l"]).unwrap();
        assert!(is_config_command(&args));

        let args = Args::try_parse_from(["osu_mod_filter", "--configure"]).unwrap();
        assert!(is_config_command(&args));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["osu_mod_filter", "--mode", "catch"]).is_err());
    }
}
