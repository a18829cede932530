use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const NO_DESCRIPTION: &str = "No description found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    LinkedIn,
    Greenhouse,
    Lever,
}

impl Platform {
    #[cfg(test)]
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Greenhouse, Platform::Lever];

    pub fn name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Greenhouse => "Greenhouse",
            Platform::Lever => "Lever",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields a platform strategy pulls out of a page, already default-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// `" | "`-joined insight tags; empty when the platform has none.
    pub metadata: String,
}

/// Canonical job posting captured from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    pub url: String,
    pub platform: Platform,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub metadata: String,
    pub captured_at: DateTime<FixedOffset>,
}

impl JobRecord {
    pub fn new(
        url: &str,
        platform: Platform,
        fields: ExtractedFields,
        captured_at: DateTime<FixedOffset>,
    ) -> Self {
        JobRecord {
            url: url.to_string(),
            platform,
            title: fields.title,
            company: fields.company,
            location: fields.location,
            description: fields.description,
            metadata: fields.metadata,
            captured_at,
        }
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}
