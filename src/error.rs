//! Error types shared across the crate.

use thiserror::Error;

use crate::models::Feed;

/// Everything that can abort startup or a refresh cycle
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The location handed to us has no `/course/<id>/` segment
    #[error("no course id found in location: {0}")]
    CourseIdNotFound(String),

    #[error("invalid base url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured cookie cannot be sent as an HTTP header
    #[error("cookie is not a valid header value: {0}")]
    InvalidCookie(#[source] reqwest::header::InvalidHeaderValue),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network failure or non-2xx status while fetching a feed
    #[error("failed to fetch {feed} feed: {source}")]
    Transport {
        feed: Feed,
        #[source]
        source: reqwest::Error,
    },

    /// The feed body did not match the expected shape
    #[error("malformed {feed} feed: {source}")]
    Decode {
        feed: Feed,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_feed() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ScoreError::Decode {
            feed: Feed::Exams,
            source,
        };
        assert!(err.to_string().starts_with("malformed exams feed"));
    }

    #[test]
    fn test_course_id_not_found_message() {
        let err = ScoreError::CourseIdNotFound("/user/index".to_string());
        assert_eq!(err.to_string(), "no course id found in location: /user/index");
    }
}
