use thiserror::Error;

/// Message shown to the user for any failed lookup. The underlying cause is
/// only logged.
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching data";

/// Failure of a single lookup request.
///
/// A city the provider does not know is not an error; see
/// [`Lookup::NotFound`](crate::model::Lookup::NotFound).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// User-facing message. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(300);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("Internal error"), "Internal error");
    }

    #[test]
    fn user_message_hides_details() {
        let err = FetchError::Status { status: 401, body: "Invalid API key".into() };
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        assert!(err.to_string().contains("401"));
    }
}
