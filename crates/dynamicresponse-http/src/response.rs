use bytes::Bytes;
use hyper::header::{self, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::Error;

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the status code
	pub fn with_status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}

	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello, World!");
	/// assert_eq!(response.body, Bytes::from("Hello, World!"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	///
	/// Invalid header names or values are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Response;
	///
	/// let response = Response::ok().with_header("X-Custom-Header", "custom-value");
	/// assert_eq!(
	///     response.headers.get("X-Custom-Header").unwrap().to_str().unwrap(),
	///     "custom-value"
	/// );
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Set the response body to JSON and add the JSON Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"title": "Hello"})).unwrap();
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json; charset=utf-8"
	/// );
	/// assert_eq!(&response.body[..], br#"{"title":"Hello"}"#);
	/// ```
	pub fn with_json<T: Serialize + ?Sized>(self, data: &T) -> crate::Result<Self> {
		let json = serde_json::to_vec(data).map_err(|e| Error::Serialization(e.to_string()))?;
		Ok(self.with_json_bytes(json))
	}

	/// Same as [`Response::with_json`] with indented output
	pub fn with_pretty_json<T: Serialize + ?Sized>(self, data: &T) -> crate::Result<Self> {
		let json =
			serde_json::to_vec_pretty(data).map_err(|e| Error::Serialization(e.to_string()))?;
		Ok(self.with_json_bytes(json))
	}

	fn with_json_bytes(mut self, json: Vec<u8>) -> Self {
		self.body = Bytes::from(json);
		self.headers.insert(
			header::CONTENT_TYPE,
			HeaderValue::from_static("application/json; charset=utf-8"),
		);
		self
	}

	/// Parse the body back into JSON
	pub fn json(&self) -> crate::Result<serde_json::Value> {
		Ok(serde_json::from_slice(&self.body)?)
	}
}

impl From<Error> for Response {
	fn from(error: Error) -> Self {
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		Response::new(error.status())
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_into_response_carries_message() {
		let response: Response =
			Error::NotFound("Empty list and 'ArticleList.allow_empty' is False.".into()).into();

		assert_eq!(response.status, StatusCode::NOT_FOUND);
		let body = response.json().unwrap();
		assert_eq!(
			body["error"],
			"Empty list and 'ArticleList.allow_empty' is False."
		);
	}

	#[test]
	fn test_invalid_header_is_ignored() {
		let response = Response::ok().with_header("bad header", "value");
		assert!(response.headers.is_empty());
	}

	#[test]
	fn test_pretty_json_is_indented() {
		let response = Response::ok()
			.with_pretty_json(&serde_json::json!({"a": 1}))
			.unwrap();
		let text = std::str::from_utf8(&response.body).unwrap();
		assert!(text.contains('\n'));
		assert_eq!(response.json().unwrap()["a"], 1);
	}
}
