//! Error type shared by requests, responses and views

use hyper::StatusCode;

/// Errors raised while resolving and serializing a view's content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The requested object or list does not exist
	#[error("{0}")]
	NotFound(String),
	/// The view does not handle the request method
	#[error("{0}")]
	MethodNotAllowed(String),
	/// The view was wired up incorrectly (e.g. no lookup kwargs in the route)
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),
	/// The context could not be converted into a response body
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// The request itself was malformed
	#[error("{0}")]
	Http(String),
	#[error("Internal error: {0}")]
	Internal(String),
}

impl Error {
	/// HTTP status code this error is reported with
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Error;
	///
	/// assert_eq!(Error::NotFound("gone".into()).status_code(), 404);
	/// assert_eq!(Error::MethodNotAllowed("POST".into()).status_code(), 405);
	/// assert_eq!(Error::Http("bad uri".into()).status_code(), 400);
	/// ```
	pub fn status_code(&self) -> u16 {
		self.status().as_u16()
	}

	/// Typed variant of [`Error::status_code`]
	pub fn status(&self) -> StatusCode {
		match self {
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
			Error::Http(_) => StatusCode::BAD_REQUEST,
			Error::ImproperlyConfigured(_) | Error::Serialization(_) | Error::Internal(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Returns true for the not-found condition
	pub fn is_not_found(&self) -> bool {
		matches!(self, Error::NotFound(_))
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Error::Serialization(error.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Error::NotFound("x".into()), StatusCode::NOT_FOUND)]
	#[case(Error::MethodNotAllowed("x".into()), StatusCode::METHOD_NOT_ALLOWED)]
	#[case(Error::ImproperlyConfigured("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
	#[case(Error::Serialization("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
	#[case(Error::Http("x".into()), StatusCode::BAD_REQUEST)]
	#[case(Error::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_error_status(#[case] error: Error, #[case] expected: StatusCode) {
		assert_eq!(error.status(), expected);
		assert_eq!(error.status_code(), expected.as_u16());
	}

	#[test]
	fn test_not_found_displays_bare_message() {
		let error = Error::NotFound("No article found matching the query".to_string());
		assert_eq!(error.to_string(), "No article found matching the query");
		assert!(error.is_not_found());
	}

	#[test]
	fn test_serde_json_error_converts_to_serialization() {
		let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let error: Error = parse_error.into();
		assert!(matches!(error, Error::Serialization(_)));
	}
}
