use thiserror::Error;

/// Failure surface of [`ApiClient`](super::ApiClient) calls.
///
/// Non-success responses carry the numeric status and the raw body text in
/// the display message, with no attempt to parse the body as structured
/// error JSON. Transport failures pass through reqwest's error unwrapped.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
