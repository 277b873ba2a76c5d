#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // the credential is no longer valid, callers should drop it and log in again
    #[error("Unauthorized: token missing, expired or revoked")]
    Unauthorized,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("API request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
