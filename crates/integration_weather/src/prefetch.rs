//! Bulk icon prefetching

use std::path::Path;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::client::IconFetcher;

/// Outcome of a prefetch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrefetchReport {
    /// Icons downloaded, with the number of bytes written
    pub downloaded: Vec<(String, u64)>,
    /// Icons already present in the destination
    pub skipped: Vec<String>,
    /// Icons that failed, with the error message
    pub failed: Vec<(String, String)>,
}

impl PrefetchReport {
    /// Total bytes written across all downloads
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.downloaded.iter().map(|(_, bytes)| bytes).sum()
    }

    /// True when no icon failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Retrieve every listed icon into `destination`
///
/// Duplicate names are fetched once, so no two concurrent downloads target
/// the same file. Results are reported in input order.
#[instrument(skip(fetcher, destination, icon_files), fields(count = icon_files.len()))]
pub async fn prefetch_icons<F>(
    fetcher: &F,
    destination: &Path,
    icon_files: &[&str],
    max_concurrent: usize,
) -> PrefetchReport
where
    F: IconFetcher + ?Sized,
{
    let mut names: Vec<&str> = Vec::with_capacity(icon_files.len());
    for &name in icon_files {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let results: Vec<_> = stream::iter(names)
        .map(|name| async move { (name, fetcher.retrieve_icon(destination, name).await) })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let mut report = PrefetchReport::default();
    for (name, result) in results {
        match result {
            Ok(bytes) => report.downloaded.push((name.to_string(), bytes)),
            Err(e) if e.is_already_exists() => {
                debug!(icon = name, "Icon already cached");
                report.skipped.push(name.to_string());
            },
            Err(e) => report.failed.push((name.to_string(), e.to_string())),
        }
    }

    info!(
        downloaded = report.downloaded.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Icon prefetch finished"
    );
    report
}
