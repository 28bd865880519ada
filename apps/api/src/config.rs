use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Reset a session's buffer to an empty record after each successful commit.
    pub reset_on_commit: bool,
    /// Upper bound on concurrently held form sessions.
    pub max_sessions: usize,
    /// Seconds a session may sit untouched before it can be evicted.
    pub session_idle_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            reset_on_commit: parse_bool(&env_or("RESET_ON_COMMIT", "false"))
                .context("RESET_ON_COMMIT must be true or false")?,
            max_sessions: parse_positive(&env_or("MAX_SESSIONS", "1024"))
                .context("MAX_SESSIONS must be a positive integer")?,
            session_idle_secs: parse_positive(&env_or("SESSION_IDLE_SECS", "3600"))
                .context("SESSION_IDLE_SECS must be a positive number of seconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            reset_on_commit: false,
            max_sessions: 1024,
            session_idle_secs: 3600,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("unrecognised boolean '{other}'"),
    }
}

fn parse_positive<T>(raw: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = raw.trim().parse::<T>()?;
    if value <= T::default() {
        anyhow::bail!("'{raw}' is not greater than zero");
    }
    Ok(value)
}
