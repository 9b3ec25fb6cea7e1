use super::Request;
use hyper::Uri;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

impl Request {
	/// Parse query parameters from URI
	pub(super) fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter(|pair| !pair.is_empty())
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values
						let mut parts = pair.splitn(2, '=');
						Some((
							decode(parts.next()?),
							decode(parts.next().unwrap_or("")),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the request path
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Request;
	///
	/// let request = Request::builder().uri("/api/articles?page=1").build().unwrap();
	/// assert_eq!(request.path(), "/api/articles");
	/// ```
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Look up a URL-derived keyword argument
	pub fn path_param(&self, key: &str) -> Option<&str> {
		self.path_params.get(key).map(String::as_str)
	}

	/// Set a path parameter (used by routers for path variable extraction)
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Request;
	///
	/// let mut request = Request::builder().uri("/users/123").build().unwrap();
	/// request.set_path_param("pk", "123");
	/// assert_eq!(request.path_params.get("pk"), Some(&"123".to_string()));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}
}

fn decode(raw: &str) -> String {
	let spaced = raw.replace('+', " ");
	percent_decode_str(&spaced).decode_utf8_lossy().to_string()
}
