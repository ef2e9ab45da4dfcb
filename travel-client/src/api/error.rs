//! API client error types.

use std::fmt;

/// Errors from the travel backend HTTP client.
///
/// An empty-but-successful response is not an error anywhere in this crate;
/// it simply decodes to an empty collection.
#[derive(Debug)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Credential missing or rejected (401/403)
    Unauthorized,

    /// A paginated endpoint never reported a final page
    PageLimit { pages: u32 },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {e}"),
            ApiError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ApiError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ApiError::Unauthorized => write!(f, "unauthorized (missing or rejected credential)"),
            ApiError::PageLimit { pages } => {
                write!(f, "pagination exceeded {pages} pages without a final page")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl ApiError {
    /// Whether this failure means the session credential was missing or
    /// rejected. The surrounding application reacts to this by forcing
    /// re-authentication; the client itself never clears the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ApiError::Unauthorized;
        assert_eq!(
            err.to_string(),
            "unauthorized (missing or rejected credential)"
        );

        let err = ApiError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ApiError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));

        let err = ApiError::PageLimit { pages: 1000 };
        assert!(err.to_string().contains("1000 pages"));
    }

    #[test]
    fn unauthorized_is_flagged() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(
            !ApiError::Api {
                status: 404,
                message: String::new()
            }
            .is_unauthorized()
        );
    }
}
