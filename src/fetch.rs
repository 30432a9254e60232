use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::LicenceError;

/// Reads source documents, either over HTTP(S) or from the local filesystem.
pub struct Fetcher {
    client: Client,
    show_progress: bool,
}

impl Fetcher {
    pub fn new(config: &Config, show_progress: bool) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            show_progress,
        })
    }

    /// Fetch the raw bytes at `location`. Anything that is not an
    /// `http://` or `https://` URL is treated as a local path.
    pub async fn fetch(&self, location: &str) -> Result<Vec<u8>, LicenceError> {
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            debug!(path = location, "reading local source");
            tokio::fs::read(location)
                .await
                .map_err(|e| LicenceError::fetch(location, e))
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, LicenceError> {
        let spinner = self.show_progress.then(|| spinner(url));

        debug!(url, "fetching remote source");
        let result = async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.bytes().await
        }
        .await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        result
            .map(|bytes| bytes.to_vec())
            .map_err(|e| LicenceError::fetch(url, e))
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("https://") || location.starts_with("http://")
}

fn spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
