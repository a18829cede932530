use thiserror::Error;

pub const UNSUPPORTED_NOTICE: &str =
    "Unsupported platform. Currently supports: LinkedIn, Greenhouse, Lever";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("unsupported platform: {url}")]
    UnsupportedPlatform { url: String },

    #[error("could not read page: {0}")]
    ExtractionFault(String),

    #[error("could not deliver file: {0}")]
    Delivery(String),
}

impl SaveError {
    /// The one notice shown to the user when a save aborts.
    pub fn user_message(&self) -> String {
        match self {
            SaveError::UnsupportedPlatform { .. } => UNSUPPORTED_NOTICE.to_string(),
            other => format!(
                "Error saving job:\n\n{}\n\nPlease try again or manually copy the job description.",
                other
            ),
        }
    }
}
