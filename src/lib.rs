//! # dynamicresponse
//!
//! Generic detail and list views that serialize their resolved object or
//! collection into the response instead of rendering a template.
//!
//! Views are composed rather than inherited: a view owns an
//! [`ObjectSource`](views::ObjectSource) that resolves content and a
//! [`ResponseSerializer`](views::ResponseSerializer) that turns it into a
//! response. Lookup and `allow_empty` behaviour comes from the
//! [`SingleObjectMixin`](views::SingleObjectMixin) and
//! [`MultipleObjectMixin`](views::MultipleObjectMixin) traits.
//!
//! ## Quick Example
//!
//! ```rust
//! use dynamicresponse::prelude::*;
//! use serde::Serialize;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, Serialize)]
//! struct Article {
//!     id: Option<i64>,
//!     slug: String,
//! }
//!
//! impl Model for Article {
//!     type PrimaryKey = i64;
//!     fn table_name() -> &'static str { "articles" }
//!     fn verbose_name() -> &'static str { "article" }
//!     fn primary_key(&self) -> Option<&i64> { self.id.as_ref() }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let articles = Arc::new(InMemorySource::new(vec![Article { id: Some(1), slug: "hello".into() }]));
//! let list = SerializeListView::new(articles.clone()).with_name("ArticleList");
//! let detail = SerializeDetailView::new(articles).with_name("ArticleDetail");
//!
//! let response = list.dispatch(Request::builder().uri("/articles/").build().unwrap()).await.unwrap();
//! assert_eq!(response.json().unwrap()[0]["slug"], "hello");
//!
//! let request = Request::builder().uri("/articles/1/").path_param("pk", "1").build().unwrap();
//! let response = detail.dispatch(request).await.unwrap();
//! assert_eq!(response.json().unwrap()["id"], 1);
//! # });
//! ```

pub mod http;
#[cfg(feature = "views")]
pub mod views;

pub mod prelude {
	pub use crate::http::{Error, Request, Response, ResponseStatus, Result};
	#[cfg(feature = "views")]
	pub use crate::views::{
		InMemorySource, JsonSerializer, Lookup, Model, MultipleObjectMixin, ObjectSource,
		ResponseSerializer, SerializeDetailView, SerializeListView, SingleObjectMixin, View,
		ViewSettings, serialize_object,
	};
}
