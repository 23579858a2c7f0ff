//! OpenWeatherMap icon integration
//!
//! Downloads weather condition icons (e.g. `01d.png`) from the
//! OpenWeatherMap image endpoint into a local directory, skipping any icon
//! whose file is already present.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_weather::{HttpIconFetcher, IconFetcher, IconFetcherConfig};
//!
//! let fetcher = HttpIconFetcher::new(IconFetcherConfig::default())?;
//! match fetcher.retrieve_icon(Path::new("icons"), "01d.png").await {
//!     Ok(bytes) => println!("downloaded {bytes} bytes"),
//!     Err(e) if e.is_already_exists() => println!("using cached icon"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod client;
mod config;
mod error;
mod prefetch;

pub use client::{HttpIconFetcher, IconFetcher};
pub use config::IconFetcherConfig;
pub use error::IconError;
pub use prefetch::{PrefetchReport, prefetch_icons};
