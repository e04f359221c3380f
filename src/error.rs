//! Error types for the image slider.

use thiserror::Error;

/// Failure of a page fetch. Every variant is surfaced to the user as its
/// message only; the variants exist for logging and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Empty response body")]
    EmptyBody,
}

impl FetchError {
    /// The text shown inside the error placeholder.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// All other errors that can occur in the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Failed to start UI: {0}")]
    Ui(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_message_is_passed_through() {
        let err = FetchError::Network("Network Error".to_string());
        assert_eq!(err.message(), "Network Error");
    }

    #[test]
    fn status_error_names_code_and_url() {
        let err = FetchError::Status {
            status: 404,
            url: "https://api.example/images?page=1&limit=5".to_string(),
        };
        let msg = err.message();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://api.example/images"));
    }
}
