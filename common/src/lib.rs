use env_logger::{Builder, Env};
use log::debug;
use std::env;
use std::path::PathBuf;

const DEFAULT_ENV_FILE: &str = ".env";

/// Path of the dotenv file holding local settings, `FLIPPER_ENV_FILE` or `.env`.
pub fn env_file() -> PathBuf {
    env::var("FLIPPER_ENV_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Loads variables from the env file, if present, and initializes the logger
/// with a default filter of "info".
pub fn setup_env() -> PathBuf {
    let path = env_file();
    let loaded = dotenvy::from_path(&path).is_ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
    debug!("Env file {} loaded: {loaded}", path.display());
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_defaults_to_dotenv() {
        if env::var("FLIPPER_ENV_FILE").is_err() {
            assert_eq!(env_file(), PathBuf::from(".env"));
        }
    }
}
