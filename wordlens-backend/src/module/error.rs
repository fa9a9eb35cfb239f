use thiserror::Error;

/// Failures raised by the external-API pipeline.
///
/// Everything here surfaces to the caller as a structured error message;
/// nothing is retried and nothing crashes the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch API keys")]
    CredentialsUnavailable,

    #[error("Language detection failed with status {status}")]
    DetectionFailed { status: u16 },

    #[error("Translation failed with status {status}")]
    TranslationFailed { status: u16 },

    #[error("Translation response contained no candidates")]
    EmptyTranslation,

    #[error("API rate limit exceeded")]
    ImageRateLimited,

    #[error("Image fetch failed with status {status}")]
    ImageSearchFailed { status: u16 },

    /// Transport-level failure on any of the outbound calls
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}
