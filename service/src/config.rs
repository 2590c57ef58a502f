use std::env;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

const DEFAULT_LOG_FILTER: &str = "info,airport_service=debug";

#[derive(Clone, Debug)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// JSON schedule to seed the stores with on start
    pub schedule_path: Option<PathBuf>,
    /// Instant the board snapshot is taken at (defaults to now)
    pub board_at: Option<DateTime<Utc>>,
}

impl Config {
    /// Load from the environment (and `.env`); fails on an unparsable `AIRPORT_BOARD_AT`
    pub fn from_env() -> Result<Self, chrono::ParseError> {
        dotenvy::dotenv().ok();

        let board_at = match env::var("AIRPORT_BOARD_AT") {
            Ok(raw) => Some(parse_instant(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            log_filter: env::var("AIRPORT_LOG_FILTER")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            schedule_path: env::var("AIRPORT_SCHEDULE_PATH").ok().map(PathBuf::from),
            board_at,
        })
    }

    /// Board instant, falling back to the current time
    pub fn board_instant(&self) -> DateTime<Utc> {
        self.board_at.unwrap_or_else(Utc::now)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            schedule_path: None,
            board_at: None,
        }
    }
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(raw.trim())?.with_timezone(&Utc))
}
