//! Retailer product-search links.
//!
//! Links are fire-and-forget: the URL is handed to the platform opener and
//! nothing is read back.

use std::process::{Command, Stdio};

use crate::error::{Result, RigError};

/// Default retailer host for search links
pub const DEFAULT_RETAILER: &str = "www.amazon.in";

/// Build `https://<retailer>/s?k=<url-encoded part name>`.
pub fn search_url(retailer: &str, part_name: &str) -> String {
    let host = retailer
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("https://{}/s?k={}", host, urlencoding::encode(part_name))
}

/// Platform command that opens a URL in the default browser.
fn opener() -> (&'static str, Vec<&'static str>) {
    if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", ""])
    } else {
        ("xdg-open", Vec::new())
    }
}

/// Open `url` in a new browser window or tab.
///
/// Returns once the opener has been spawned; its outcome is not awaited.
pub fn open_in_browser(url: &str) -> Result<()> {
    let (cmd, args) = opener();
    tracing::info!("Opening {} via {}", url, cmd);
    Command::new(cmd)
        .args(&args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| RigError::general(format!("Failed to launch {}: {}", cmd, e)))?;
    Ok(())
}
