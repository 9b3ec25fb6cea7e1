//! Response status constants understood by the serialization entry point
//!
//! Each constant pairs a symbolic code, reported to API clients in the
//! `X-Response-Status` header, with the HTTP status the response is sent with.

use hyper::StatusCode;
use std::fmt;

/// Symbolic response status passed to a serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseStatus {
	code: &'static str,
	http_status: StatusCode,
}

impl ResponseStatus {
	pub const OK: Self = Self::new("OK", StatusCode::OK);
	pub const INVALID_DATA: Self = Self::new("INVALID", StatusCode::PAYMENT_REQUIRED);
	pub const NOT_FOUND: Self = Self::new("NOT_FOUND", StatusCode::NOT_FOUND);
	pub const CONFIRM: Self = Self::new("CONFIRM", StatusCode::METHOD_NOT_ALLOWED);
	pub const DELETED: Self = Self::new("DELETED", StatusCode::NO_CONTENT);
	pub const REQUIRES_UPGRADE: Self = Self::new("REQUIRES_UPGRADE", StatusCode::NOT_ACCEPTABLE);

	/// Define a custom status
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::ResponseStatus;
	/// use hyper::StatusCode;
	///
	/// const ACCEPTED: ResponseStatus = ResponseStatus::new("ACCEPTED", StatusCode::ACCEPTED);
	/// assert_eq!(ACCEPTED.code(), "ACCEPTED");
	/// assert_eq!(ACCEPTED.http_status(), StatusCode::ACCEPTED);
	/// ```
	pub const fn new(code: &'static str, http_status: StatusCode) -> Self {
		Self { code, http_status }
	}

	pub fn code(&self) -> &'static str {
		self.code
	}

	pub fn http_status(&self) -> StatusCode {
		self.http_status
	}
}

impl Default for ResponseStatus {
	fn default() -> Self {
		Self::OK
	}
}

impl fmt::Display for ResponseStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.code, self.http_status.as_u16())
	}
}
