use serde::{Deserialize, Serialize};

use crate::domain::logging::LogLevel;

/// Tunables for the landing page. Everything has a default; nothing is read
/// from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Time each snapshot stays on screen.
    pub rotation_interval_ms: u32,
    pub clock_interval_ms: u32,
    /// BCP 47 tag handed to `Intl.DateTimeFormat`.
    pub locale: String,
    /// Copies of the ticker item list laid end to end for a seamless loop.
    pub ticker_repeat: usize,
    pub min_log_level: LogLevel,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 5_200,
            clock_interval_ms: 1_000,
            locale: "en-US".to_string(),
            ticker_repeat: 2,
            min_log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"rotation_interval_ms": 800}"#).unwrap();
        assert_eq!(config.rotation_interval_ms, 800);
        assert_eq!(config.clock_interval_ms, 1_000);
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.ticker_repeat, 2);
    }
}
