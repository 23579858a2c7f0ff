//! OpenWeatherMap icon client
//!
//! Downloads icon images over HTTP into a destination directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};

use crate::config::IconFetcherConfig;
use crate::error::IconError;
use crate::prefetch::{PrefetchReport, prefetch_icons};

/// Trait for fetching icon files into a local directory
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IconFetcher: Send + Sync {
    /// Ensure `destination/icon_file` exists, downloading it when absent
    ///
    /// Returns the number of bytes written. An existing entry at the target
    /// path yields [`IconError::AlreadyExists`] without any network request.
    async fn retrieve_icon(&self, destination: &Path, icon_file: &str) -> Result<u64, IconError>;
}

/// HTTP icon fetcher for the OpenWeatherMap image endpoint
#[derive(Debug)]
pub struct HttpIconFetcher {
    client: Client,
    config: IconFetcherConfig,
}

impl HttpIconFetcher {
    /// Create a new icon fetcher with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: IconFetcherConfig) -> Result<Self, IconError> {
        config.validate().map_err(IconError::Configuration)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| IconError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new fetcher with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, IconError> {
        Self::new(IconFetcherConfig::default())
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &IconFetcherConfig {
        &self.config
    }

    /// Download every day/night icon from the catalog into `destination`
    pub async fn prefetch_all(&self, destination: &Path) -> PrefetchReport {
        let icon_files = domain::icon_files();
        prefetch_icons(
            self,
            destination,
            &icon_files,
            self.config.max_concurrent_downloads,
        )
        .await
    }

    /// Reject names that would escape the destination directory
    fn validate_icon_name(icon_file: &str) -> Result<(), IconError> {
        let is_plain = !icon_file.is_empty()
            && icon_file != "."
            && icon_file != ".."
            && !icon_file.contains(['/', '\\', '\0']);

        if is_plain {
            Ok(())
        } else {
            Err(IconError::InvalidIconName(icon_file.to_string()))
        }
    }

    /// Create the target file, failing if anything already exists there
    async fn create_target(path: &Path) -> Result<File, IconError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    IconError::AlreadyExists {
                        path: path.to_path_buf(),
                    }
                } else {
                    IconError::FileCreate {
                        path: path.to_path_buf(),
                        source: e,
                    }
                }
            })
    }

    /// Map a transport error, distinguishing timeouts
    fn map_request_error(&self, e: &reqwest::Error) -> IconError {
        match self.config.timeout_secs {
            Some(timeout_secs) if e.is_timeout() => IconError::Timeout { timeout_secs },
            _ => IconError::Network(e.to_string()),
        }
    }

    /// GET the icon and stream the body into `file`
    async fn download(
        &self,
        file: &mut File,
        path: &Path,
        icon_file: &str,
    ) -> Result<u64, IconError> {
        let url = self.config.icon_url(icon_file);
        debug!(url = %url, "Requesting icon");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let copy_error = |reason: String| IconError::Copy {
            path: path.to_path_buf(),
            reason,
        };

        let mut written: u64 = 0;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| match self.map_request_error(&e) {
                timeout @ IconError::Timeout { .. } => timeout,
                _ => copy_error(e.to_string()),
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| copy_error(e.to_string()))?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| copy_error(e.to_string()))?;
        Ok(written)
    }
}

/// Target file of an in-flight download
///
/// Removes the file when dropped unless the download completed, so a failed
/// or cancelled fetch never leaves a stub that later reads as a cached icon.
#[derive(Debug)]
struct PartialFileGuard {
    path: PathBuf,
    keep: bool,
    completed: bool,
}

impl PartialFileGuard {
    fn new(path: &Path, keep_partial_files: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            keep: keep_partial_files,
            completed: false,
        }
    }

    /// Mark the download as finished; the file stays on disk
    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if self.keep {
            debug!(path = %self.path.display(), "Keeping partial icon file");
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to remove partial icon file");
        }
    }
}

#[async_trait]
impl IconFetcher for HttpIconFetcher {
    #[instrument(skip(self, destination), fields(destination = %destination.display()))]
    async fn retrieve_icon(&self, destination: &Path, icon_file: &str) -> Result<u64, IconError> {
        Self::validate_icon_name(icon_file)?;

        let path: PathBuf = destination.join(icon_file);
        let mut file = match Self::create_target(&path).await {
            Ok(file) => file,
            Err(e) => {
                if e.is_already_exists() {
                    debug!(path = %path.display(), "Icon already present, skipping download");
                }
                return Err(e);
            },
        };

        let guard = PartialFileGuard::new(&path, self.config.keep_partial_files);

        let result = self.download(&mut file, &path, icon_file).await;
        drop(file);

        match result {
            Ok(bytes) => {
                guard.complete();
                info!(path = %path.display(), bytes, "Downloaded icon");
                Ok(bytes)
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Icon download failed");
                Err(e)
            },
        }
    }
}
