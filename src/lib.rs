//! Latest stable browser versions, scraped from Wikipedia and cached per day.
//!
//! ```no_run
//! # async fn run() -> Result<(), browse_happy::tracker::TrackerError> {
//! use browse_happy::config::Config;
//! use browse_happy::tracker::BrowserTracker;
//!
//! let tracker = BrowserTracker::from_config(&Config::default())?;
//! tracker.init().await?;
//! println!("{:?}", tracker.latest_version("firefox")?);
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod logging;
pub mod tracker;
pub mod version;
