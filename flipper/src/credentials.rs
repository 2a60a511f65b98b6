use crate::settings::{api_key_from_env, API_KEY_VAR};
use anyhow::{bail, Context, Result};
use hypixel::HttpClient;
use log::{error, info};
use std::fs;
use std::future::Future;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tokio::task;

const PROMPT: &str = "Please enter your api key: ";

/// Returns the configured key, or asks for one, verifies it and saves it to
/// `env_file`.
pub async fn ensure_api_key(client: &HttpClient, env_file: &Path) -> Result<String> {
    if let Some(key) = api_key_from_env() {
        return Ok(key);
    }

    info!("No settings could be loaded");
    let key = request_key(BufReader::new(io::stdin()), io::stdout(), |key| {
        let client = client.clone();
        async move { client.verify_key(&key).await }
    })
    .await?;

    persist_key(env_file, &key)?;
    info!("Successfully setup API key");
    Ok(key)
}

/// Prompts until `verify` accepts a key. Blank lines are asked again.
pub(crate) async fn request_key<R, W, F, Fut>(mut input: R, mut output: W, verify: F) -> Result<String>
where
    R: BufRead + Send + 'static,
    W: Write,
    F: Fn(String) -> Fut,
    Fut: Future<Output = hypixel::Result<()>>,
{
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let (returned, line) = read_line(input).await?;
        input = returned;
        let Some(line) = line else {
            bail!("Input closed before an API key was verified");
        };

        let key = line.trim();
        if key.is_empty() {
            continue;
        }

        match verify(key.to_string()).await {
            Ok(()) => return Ok(key.to_string()),
            Err(e) => error!("Key verification failed ({}): {e}", e.kind()),
        }
    }
}

/// Reads one line off the runtime's worker threads. `None` at end of input.
async fn read_line<R: BufRead + Send + 'static>(mut input: R) -> Result<(R, Option<String>)> {
    let read = task::spawn_blocking(move || {
        let mut line = String::new();
        let count = input.read_line(&mut line)?;
        Ok::<_, io::Error>((input, (count > 0).then_some(line)))
    })
    .await?;
    Ok(read?)
}

/// Writes `API_KEY=<key>` to the env file, creating it if needed and replacing
/// an existing `API_KEY` line.
pub(crate) fn persist_key(env_file: &Path, key: &str) -> Result<()> {
    let entry = format!("{API_KEY_VAR}={key}");
    let contents = if env_file.exists() {
        let existing = fs::read_to_string(env_file)
            .with_context(|| format!("Failed to read {}", env_file.display()))?;
        let mut lines: Vec<String> = existing
            .lines()
            .filter(|line| !line.trim_start().starts_with(&format!("{API_KEY_VAR}=")))
            .map(str::to_string)
            .collect();
        lines.push(entry);
        lines.join("\n") + "\n"
    } else {
        entry
    };

    fs::write(env_file, contents)
        .with_context(|| format!("Failed to write {}", env_file.display()))
}
