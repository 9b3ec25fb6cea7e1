//! Serialization entry point
//!
//! Views finish by handing the request and the resolved context to a
//! [`ResponseSerializer`], which owns the whole response: body, content type
//! and status.

use dynamicresponse_http::{Request, Response, ResponseStatus, Result};
use hyper::StatusCode;
use serde_json::Value;

/// Header carrying the symbolic [`ResponseStatus`] code
pub const RESPONSE_STATUS_HEADER: &str = "X-Response-Status";

/// Converts a view's context into a response
pub trait ResponseSerializer: Send + Sync {
	fn serialize(
		&self,
		request: &Request,
		context: &Value,
		status: ResponseStatus,
	) -> Result<Response>;
}

/// Serializes the context as a JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
	pretty: bool,
}

impl JsonSerializer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Indent the JSON output
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

impl ResponseSerializer for JsonSerializer {
	fn serialize(
		&self,
		_request: &Request,
		context: &Value,
		status: ResponseStatus,
	) -> Result<Response> {
		let response = Response::new(status.http_status())
			.with_header(RESPONSE_STATUS_HEADER, status.code());

		// 204 responses carry no body
		if status.http_status() == StatusCode::NO_CONTENT {
			return Ok(response);
		}

		if self.pretty {
			response.with_pretty_json(context)
		} else {
			response.with_json(context)
		}
	}
}

/// Serialize `context` as JSON with [`ResponseStatus::OK`]
///
/// # Examples
///
/// ```
/// use dynamicresponse_http::Request;
/// use dynamicresponse_views::serialize_object;
/// use serde_json::json;
///
/// let request = Request::builder().uri("/articles/1/").build().unwrap();
/// let response = serialize_object(&request, &json!({"id": 1})).unwrap();
///
/// assert_eq!(response.status, 200);
/// assert_eq!(response.json().unwrap()["id"], 1);
/// assert_eq!(response.headers.get("x-response-status").unwrap(), "OK");
/// ```
pub fn serialize_object(request: &Request, context: &Value) -> Result<Response> {
	JsonSerializer::new().serialize(request, context, ResponseStatus::OK)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn request() -> Request {
		Request::builder().uri("/").build().unwrap()
	}

	#[test]
	fn test_status_drives_http_status() {
		let response = JsonSerializer::new()
			.serialize(&request(), &json!([]), ResponseStatus::NOT_FOUND)
			.unwrap();

		assert_eq!(response.status, StatusCode::NOT_FOUND);
		assert_eq!(
			response.headers.get("x-response-status").unwrap(),
			"NOT_FOUND"
		);
		assert_eq!(response.json().unwrap(), json!([]));
	}

	#[test]
	fn test_deleted_has_empty_body() {
		let response = JsonSerializer::new()
			.serialize(&request(), &json!({"id": 3}), ResponseStatus::DELETED)
			.unwrap();

		assert_eq!(response.status, StatusCode::NO_CONTENT);
		assert!(response.body.is_empty());
		assert!(response.headers.get("content-type").is_none());
	}

	#[test]
	fn test_pretty_output_round_trips() {
		let context = json!({"title": "Hello", "tags": ["a", "b"]});
		let response = JsonSerializer::new()
			.pretty(true)
			.serialize(&request(), &context, ResponseStatus::OK)
			.unwrap();

		assert!(std::str::from_utf8(&response.body).unwrap().contains("\n  "));
		assert_eq!(response.json().unwrap(), context);
	}
}
