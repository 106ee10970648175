//! Error handling for the foods API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable body
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A created record came back without an id
    #[error("Created food has no id")]
    MissingId,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}
