use thiserror::Error;

/// Terminal failure kinds for the activity fetch. The `Display` text is the
/// exact diagnostic shown to the user; the caller decides whether to exit.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error: Username '{0}' not found.")]
    UserNotFound(String),
    #[error("Error: API rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("HTTP Error {code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Error: Unable to parse GitHub API response.")]
    MalformedResponse,
}
