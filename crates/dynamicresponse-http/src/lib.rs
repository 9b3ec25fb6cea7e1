//! # dynamicresponse-http
//!
//! HTTP primitives used by the serializing views: a [`Request`] carrying
//! URL-derived lookup parameters, a [`Response`] with a JSON helper, the
//! crate-wide [`Error`] type and the [`ResponseStatus`] constants understood
//! by the serialization entry point.
//!
//! ## Examples
//!
//! ```
//! use dynamicresponse_http::{Error, Request, Response};
//! use hyper::{Method, StatusCode};
//!
//! let mut request = Request::builder()
//!     .method(Method::GET)
//!     .uri("/articles/42/")
//!     .build()
//!     .unwrap();
//! request.set_path_param("pk", "42");
//! assert_eq!(request.path_param("pk"), Some("42"));
//!
//! let response: Response = Error::NotFound("No article found matching the query".into()).into();
//! assert_eq!(response.status, StatusCode::NOT_FOUND);
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod status;

pub use error::{Error, Result};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use status::ResponseStatus;
