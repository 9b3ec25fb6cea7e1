//! SerializeListView: resolve a collection and serialize it

use async_trait::async_trait;
use dynamicresponse_http::{Error, Request, Response, ResponseStatus, Result};
use hyper::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{self, View};
use crate::i18n::MessageCatalog;
use crate::mixins::MultipleObjectMixin;
use crate::serializer::{JsonSerializer, ResponseSerializer};
use crate::settings::ViewSettings;
use crate::source::{Model, ObjectSource};

/// List view that hands its collection to a serializer instead of a template
///
/// The serializer receives the full collection, in the order the source
/// produced it. When the collection is empty and `allow_empty` is off, the
/// view fails with [`Error::NotFound`] naming the view and the serializer is
/// never called.
///
/// `allow_empty` comes from [`SerializeListView::with_allow_empty`] when set,
/// otherwise from the view's [`ViewSettings`].
///
/// # Examples
///
/// ```
/// use dynamicresponse_http::Request;
/// use dynamicresponse_views::{InMemorySource, Model, SerializeListView, View};
/// use serde::Serialize;
/// use std::sync::Arc;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Article { id: Option<i64>, title: String }
///
/// impl Model for Article {
///     type PrimaryKey = i64;
///     fn table_name() -> &'static str { "articles" }
///     fn primary_key(&self) -> Option<&i64> { self.id.as_ref() }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let view = SerializeListView::new(Arc::new(InMemorySource::<Article>::empty()))
///     .with_name("ArticleList")
///     .with_allow_empty(false);
///
/// let request = Request::builder().uri("/articles/").build().unwrap();
/// let error = view.dispatch(request).await.unwrap_err();
/// assert_eq!(error.to_string(), "Empty list and 'ArticleList.allow_empty' is False.");
/// # });
/// ```
pub struct SerializeListView<M: Model> {
	name: String,
	source: Arc<dyn ObjectSource<M>>,
	serializer: Option<Arc<dyn ResponseSerializer>>,
	catalog: Option<Arc<MessageCatalog>>,
	settings: ViewSettings,
	allow_empty: Option<bool>,
}

impl<M: Model> SerializeListView<M> {
	pub fn new<S>(source: Arc<S>) -> Self
	where
		S: ObjectSource<M> + 'static,
	{
		Self::from_source(source)
	}

	/// Same as [`SerializeListView::new`] for an already type-erased source
	pub fn from_source(source: Arc<dyn ObjectSource<M>>) -> Self {
		Self {
			name: "SerializeListView".to_string(),
			source,
			serializer: None,
			catalog: None,
			settings: ViewSettings::default(),
			allow_empty: None,
		}
	}

	/// Name reported in error messages
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Replace the default [`JsonSerializer`]
	pub fn with_serializer(mut self, serializer: Arc<dyn ResponseSerializer>) -> Self {
		self.serializer = Some(serializer);
		self
	}

	pub fn with_message_catalog(mut self, catalog: Arc<MessageCatalog>) -> Self {
		self.catalog = Some(catalog);
		self
	}

	pub fn with_settings(mut self, settings: ViewSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Override the configured `allow_empty` policy for this view
	pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
		self.allow_empty = Some(allow_empty);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	fn serializer(&self) -> Arc<dyn ResponseSerializer> {
		match &self.serializer {
			Some(serializer) => Arc::clone(serializer),
			None => Arc::new(JsonSerializer::new().pretty(self.settings.pretty_json)),
		}
	}

	/// Resolve the collection and serialize it
	pub async fn get(&self, request: &Request) -> Result<Response> {
		let object_list = self.get_queryset().await?;

		if object_list.is_empty() && !self.allow_empty() {
			let message = self.empty_list_message();
			tracing::warn!(view = %self.name, "{}", message);
			return Err(Error::NotFound(message));
		}

		let context = object_list
			.iter()
			.map(serde_json::to_value)
			.collect::<std::result::Result<Vec<_>, _>>()?;
		tracing::debug!(view = %self.name, count = context.len(), "serializing object list");

		self.serializer()
			.serialize(request, &Value::Array(context), ResponseStatus::OK)
	}
}

impl<M: Model> MultipleObjectMixin<M> for SerializeListView<M> {
	fn view_name(&self) -> &str {
		&self.name
	}

	fn source(&self) -> &dyn ObjectSource<M> {
		self.source.as_ref()
	}

	fn allow_empty(&self) -> bool {
		self.allow_empty.unwrap_or(self.settings.allow_empty)
	}

	fn message_catalog(&self) -> Option<&MessageCatalog> {
		self.catalog.as_deref()
	}
}

#[async_trait]
impl<M: Model> View for SerializeListView<M> {
	async fn dispatch(&self, request: Request) -> Result<Response> {
		tracing::debug!(view = %self.name, method = %request.method, path = request.path(), "dispatching list view");

		match request.method {
			Method::GET => self.get(&request).await,
			Method::HEAD => self.get(&request).await.map(core::head_response),
			Method::OPTIONS => Ok(core::options_response(&self.allowed_methods())),
			_ => Err(core::method_not_allowed(&self.name, &request.method)),
		}
	}
}
