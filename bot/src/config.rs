use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const TWEET_AT_VAR: &str = "TWEET_AT";
const FIRE_TIME_FORMAT: &str = "%H:%M:%S";
const STATUS_INTERVAL: Duration = Duration::from_secs(3600);
const LOG_PATH: &str = "tweet_log.txt";

/// Runtime configuration, read once at startup and passed by reference
/// from then on.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Local time of day at which the daily tweet fires.
    pub fire_time: NaiveTime,
    /// How long the wait loop sleeps between status reports.
    pub status_interval: Duration,
    /// Append-only status log in the working directory.
    pub log_path: PathBuf,
}

impl BotConfig {
    /// The fire time is configuration, not a constant: `TWEET_AT` in
    /// `HH:MM:SS` overrides the 23:00:00 default.
    pub fn from_env() -> Result<Self> {
        let fire_time = match env::var(TWEET_AT_VAR) {
            Ok(value) => parse_fire_time(&value)
                .with_context(|| format!("Invalid {TWEET_AT_VAR} value: {value}"))?,
            Err(_) => default_fire_time(),
        };

        Ok(Self {
            fire_time,
            status_interval: STATUS_INTERVAL,
            log_path: PathBuf::from(LOG_PATH),
        })
    }
}

fn default_fire_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).unwrap()
}

fn parse_fire_time(value: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(value, FIRE_TIME_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fire_time() {
        assert_eq!(
            parse_fire_time("05:00:00").unwrap(),
            NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
        );
        assert_eq!(
            parse_fire_time("23:30:15").unwrap(),
            NaiveTime::from_hms_opt(23, 30, 15).unwrap(),
        );
    }

    #[test]
    fn rejects_malformed_fire_time() {
        assert!(parse_fire_time("25:00:00").is_err());
        assert!(parse_fire_time("five in the morning").is_err());
    }
}
