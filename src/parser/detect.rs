use tracing::debug;

use crate::error::SaveError;
use crate::record::Platform;

/// Address markers, checked in this order. First match wins.
const MARKERS: &[(&str, Platform)] = &[
    ("linkedin.com/jobs", Platform::LinkedIn),
    ("greenhouse.io", Platform::Greenhouse),
    ("lever.co", Platform::Lever),
];

pub fn detect(url: &str) -> Result<Platform, SaveError> {
    let platform = MARKERS
        .iter()
        .find(|(marker, _)| url.contains(marker))
        .map(|(_, platform)| *platform)
        .ok_or_else(|| SaveError::UnsupportedPlatform {
            url: url.to_string(),
        })?;

    debug!("Detected {} page: {}", platform, url);
    Ok(platform)
}
