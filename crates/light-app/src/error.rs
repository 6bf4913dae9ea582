//! Page-level error types.

use light_client::ApiError;
use light_core::ValidationError;

/// Why a page collapsed to not-found.
#[derive(Debug, Clone, PartialEq)]
pub enum NotFoundCause {
    /// A route parameter failed its guard; nothing was fetched.
    Validation(ValidationError),
    /// One or more fetches failed.
    Fetch(Vec<ApiError>),
}

impl std::fmt::Display for NotFoundCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::Fetch(errors) => {
                write!(f, "{} failed fetch(es)", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e)?;
                }
                Ok(())
            }
        }
    }
}

/// Terminal page signal: render the standard not-found page.
///
/// Callers treat every cause the same way; the cause is kept for logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Not found: {cause}")]
pub struct NotFound {
    pub cause: NotFoundCause,
}

impl From<ValidationError> for NotFound {
    fn from(e: ValidationError) -> Self {
        Self {
            cause: NotFoundCause::Validation(e),
        }
    }
}

impl From<Vec<ApiError>> for NotFound {
    fn from(errors: Vec<ApiError>) -> Self {
        Self {
            cause: NotFoundCause::Fetch(errors),
        }
    }
}
