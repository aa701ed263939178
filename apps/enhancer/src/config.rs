use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on each individual generation call.
    pub generation_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_timeout: parse_generation_timeout(
                &std::env::var("GENERATION_TIMEOUT_SECS").unwrap_or_else(|_| "60".to_string()),
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Whole seconds, at least 1.
fn parse_generation_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("GENERATION_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_timeout_parses_seconds() {
        assert_eq!(
            parse_generation_timeout("45").unwrap(),
            Duration::from_secs(45)
        );
    }

    #[test]
    fn test_generation_timeout_rejects_zero() {
        let err = parse_generation_timeout("0").unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_generation_timeout_rejects_non_numeric() {
        assert!(parse_generation_timeout("soon").is_err());
        assert!(parse_generation_timeout("-5").is_err());
    }
}
