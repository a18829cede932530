pub mod greenhouse;
pub mod lever;
pub mod linkedin;

use super::page::Page;
use crate::record::{ExtractedFields, Platform};

/// Platform-specific extraction rules.
pub trait Strategy: Sync {
    fn platform(&self) -> Platform;

    /// Every field comes back default-filled; missing elements never fail.
    fn extract(&self, page: &Page, url: &str) -> ExtractedFields;
}

pub fn strategy_for(platform: Platform) -> &'static dyn Strategy {
    match platform {
        Platform::LinkedIn => &linkedin::LinkedIn,
        Platform::Greenhouse => &greenhouse::Greenhouse,
        Platform::Lever => &lever::Lever,
    }
}

/// Path segment right after `marker` in `url`, e.g. the board slug in
/// `https://boards.greenhouse.io/acme/jobs/123`.
pub fn segment_after(url: &str, marker: &str) -> Option<String> {
    let start = url.find(marker)? + marker.len();
    let segment = url[start..]
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}
