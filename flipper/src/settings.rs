use anyhow::{bail, Context, Result};
use hypixel::DEFAULT_BASE_URL;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const API_KEY_VAR: &str = "API_KEY";

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
const DEFAULT_TOP_N: usize = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Settings {
    pub refresh_interval: Duration,
    pub top_n: usize,
    pub request_timeout: Duration,
    pub base_url: String,
    pub env_file: PathBuf,
}

impl Settings {
    pub fn from_env(env_file: PathBuf) -> Result<Self> {
        Self::from_lookup(env_file, |name| env::var(name).ok())
    }

    fn from_lookup<F>(env_file: PathBuf, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let refresh_secs = parse_or(&lookup, "REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL_SECS)?;
        if refresh_secs == 0 {
            bail!("REFRESH_INTERVAL_SECS must be greater than 0");
        }

        Ok(Self {
            refresh_interval: Duration::from_secs(refresh_secs),
            top_n: parse_or(&lookup, "TOP_N", DEFAULT_TOP_N)?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            base_url: lookup("HYPIXEL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            env_file,
        })
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {name}: {value:?}")),
        None => Ok(default),
    }
}

/// The configured key, if any and not blank.
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_VAR)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(PathBuf::from(".env"), |name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.refresh_interval, Duration::from_secs(60));
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.base_url, "https://api.hypixel.net");
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let settings = settings(&[
            ("REFRESH_INTERVAL_SECS", "120"),
            ("TOP_N", " 25 "),
            ("HYPIXEL_BASE_URL", "http://localhost:8080"),
        ])
        .unwrap();
        assert_eq!(settings.refresh_interval, Duration::from_secs(120));
        assert_eq!(settings.top_n, 25);
        assert_eq!(settings.base_url, "http://localhost:8080");
    }

    #[test]
    fn invalid_numbers_name_the_variable() {
        let err = settings(&[("TOP_N", "ten")]).unwrap_err();
        assert!(err.to_string().contains("TOP_N"));
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        assert!(settings(&[("REFRESH_INTERVAL_SECS", "0")]).is_err());
    }
}
