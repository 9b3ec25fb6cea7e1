//! Base view trait and dispatch helpers

use async_trait::async_trait;
use bytes::Bytes;
use dynamicresponse_http::{Error, Request, Response, Result};
use hyper::Method;

/// Base trait for all views
#[async_trait]
pub trait View: Send + Sync {
	async fn dispatch(&self, request: Request) -> Result<Response>;

	/// Returns the list of HTTP methods allowed by this view
	fn allowed_methods(&self) -> Vec<&'static str> {
		vec!["GET", "HEAD", "OPTIONS"]
	}
}

/// Answer an OPTIONS request with the view's `Allow` header
pub(crate) fn options_response(allowed: &[&str]) -> Response {
	Response::ok().with_header("Allow", &allowed.join(", "))
}

/// HEAD shares GET's headers and status but never a body
pub(crate) fn head_response(mut response: Response) -> Response {
	response.body = Bytes::new();
	response
}

pub(crate) fn method_not_allowed(view_name: &str, method: &Method) -> Error {
	tracing::warn!(view = view_name, %method, "method not allowed");
	Error::MethodNotAllowed(format!("Method \"{}\" not allowed", method))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_options_lists_methods() {
		let response = options_response(&["GET", "HEAD", "OPTIONS"]);
		assert_eq!(response.headers.get("allow").unwrap(), "GET, HEAD, OPTIONS");
	}

	#[test]
	fn test_head_keeps_headers() {
		let response = Response::ok()
			.with_header("X-Response-Status", "OK")
			.with_body("payload");
		let head = head_response(response);

		assert!(head.body.is_empty());
		assert_eq!(head.headers.get("x-response-status").unwrap(), "OK");
	}

	#[test]
	fn test_method_not_allowed_message() {
		let error = method_not_allowed("ArticleDetail", &Method::POST);
		assert_eq!(
			error,
			Error::MethodNotAllowed("Method \"POST\" not allowed".to_string())
		);
		assert_eq!(error.status_code(), 405);
	}
}
