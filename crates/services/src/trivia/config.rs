use std::env;
use std::time::Duration;

/// Public Open Trivia Database endpoint.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TriviaConfig {
    /// Defaults overridden by `TRIVIA_BASE_URL` and `TRIVIA_TIMEOUT_SECS`.
    ///
    /// Blank or unparsable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let base_url = lookup("TRIVIA_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .map_or(default.base_url, |value| value.trim().to_string());
        let timeout = lookup("TRIVIA_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(default.timeout, Duration::from_secs);
        Self { base_url, timeout }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
