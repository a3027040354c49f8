//! Command-line configuration

use std::time::Duration;

use clap::Parser;

/// Five-in-a-row against the computer on a 15x15 board
#[derive(Debug, Clone, Parser)]
#[command(name = "gomoku", version)]
pub struct AppConfig {
    /// Seed for the computer's tie-breaks (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl AppConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ai_delay_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli() {
        let parsed = AppConfig::parse_from(["gomoku"]);
        let default = AppConfig::default();
        assert_eq!(parsed.seed, default.seed);
        assert_eq!(parsed.ai_delay_ms, default.ai_delay_ms);
        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(default.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_flags() {
        let config = AppConfig::parse_from(["gomoku", "--seed", "42", "--ai-delay-ms", "0", "--log-level", "debug"]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ai_delay(), Duration::ZERO);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(AppConfig::try_parse_from(["gomoku", "--seed", "abc"]).is_err());
    }
}
