//! Incoming request representation

mod params;

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;

use crate::{Error, Result};

/// HTTP request as seen by a view
///
/// `path_params` holds the keyword arguments extracted from the URL by the
/// routing layer (e.g. `pk` or `slug`); `query_params` is parsed from the URI
/// when the request is constructed.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub path_params: HashMap<String, String>,
	pub query_params: HashMap<String, String>,
}

impl Request {
	/// Create a request from its raw parts
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Request;
	/// use hyper::{HeaderMap, Method, Version};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     "/articles/?page=2".parse().unwrap(),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.query_params.get("page"), Some(&"2".to_string()));
	/// ```
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
		}
	}

	/// Start building a request
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}
}

/// Builder for [`Request`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	body: Bytes,
	path_params: HashMap<String, String>,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a URL-derived lookup parameter
	pub fn path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(key.into(), value.into());
		self
	}

	/// Finish the request
	///
	/// Defaults to `GET /` over HTTP/1.1 when method or URI are not set.
	///
	/// # Errors
	///
	/// Returns [`Error::Http`] when the URI cannot be parsed.
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .uri("/articles/hello-world/")
	///     .path_param("slug", "hello-world")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.method, Method::GET);
	/// assert_eq!(request.path_param("slug"), Some("hello-world"));
	///
	/// assert!(Request::builder().uri("not a uri").build().is_err());
	/// ```
	pub fn build(self) -> Result<Request> {
		let uri = self
			.uri
			.as_deref()
			.unwrap_or("/")
			.parse::<Uri>()
			.map_err(|e| Error::Http(format!("Invalid URI: {}", e)))?;

		let mut request = Request::new(
			self.method.unwrap_or(Method::GET),
			uri,
			self.version.unwrap_or(Version::HTTP_11),
			self.headers,
			self.body,
		);
		request.path_params = self.path_params;
		Ok(request)
	}
}
