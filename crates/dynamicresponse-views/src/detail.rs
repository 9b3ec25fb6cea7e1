//! SerializeDetailView: resolve one object and serialize it

use async_trait::async_trait;
use dynamicresponse_http::{Request, Response, ResponseStatus, Result};
use hyper::Method;
use std::sync::Arc;

use crate::core::{self, View};
use crate::i18n::MessageCatalog;
use crate::mixins::SingleObjectMixin;
use crate::serializer::{JsonSerializer, ResponseSerializer};
use crate::settings::ViewSettings;
use crate::source::{Model, ObjectSource};

/// Detail view that hands its object to a serializer instead of a template
///
/// The object is resolved by primary key or slug from the request's path
/// parameters (see [`SingleObjectMixin::get_lookup`]) and passed, exactly
/// once, to the configured [`ResponseSerializer`].
///
/// # Examples
///
/// ```
/// use dynamicresponse_http::Request;
/// use dynamicresponse_views::{InMemorySource, Model, SerializeDetailView, View};
/// use serde::Serialize;
/// use std::sync::Arc;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Article { id: Option<i64>, slug: String, title: String }
///
/// impl Model for Article {
///     type PrimaryKey = i64;
///     fn table_name() -> &'static str { "articles" }
///     fn verbose_name() -> &'static str { "article" }
///     fn primary_key(&self) -> Option<&i64> { self.id.as_ref() }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let source = Arc::new(InMemorySource::new(vec![Article {
///     id: Some(1),
///     slug: "hello-world".into(),
///     title: "Hello, World".into(),
/// }]));
/// let view = SerializeDetailView::new(source).with_name("ArticleDetail");
///
/// let request = Request::builder()
///     .uri("/articles/hello-world/")
///     .path_param("slug", "hello-world")
///     .build()
///     .unwrap();
/// let response = view.dispatch(request).await.unwrap();
/// assert_eq!(response.json().unwrap()["title"], "Hello, World");
/// # });
/// ```
pub struct SerializeDetailView<M: Model> {
	name: String,
	source: Arc<dyn ObjectSource<M>>,
	serializer: Option<Arc<dyn ResponseSerializer>>,
	catalog: Option<Arc<MessageCatalog>>,
	settings: ViewSettings,
	object: Option<M>,
}

impl<M: Model> SerializeDetailView<M> {
	pub fn new<S>(source: Arc<S>) -> Self
	where
		S: ObjectSource<M> + 'static,
	{
		Self::from_source(source)
	}

	/// Same as [`SerializeDetailView::new`] for an already type-erased source
	pub fn from_source(source: Arc<dyn ObjectSource<M>>) -> Self {
		Self {
			name: "SerializeDetailView".to_string(),
			source,
			serializer: None,
			catalog: None,
			settings: ViewSettings::default(),
			object: None,
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

	/// Take lookup kwargs and JSON formatting from `settings`
	pub fn with_settings(mut self, settings: ViewSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Serve a fixed object instead of looking one up
	pub fn with_object(mut self, object: M) -> Self {
		self.object = Some(object);
		self
	}

	pub fn with_pk_url_kwarg(mut self, kwarg: impl Into<String>) -> Self {
		self.settings.pk_url_kwarg = kwarg.into();
		self
	}

	pub fn with_slug_url_kwarg(mut self, kwarg: impl Into<String>) -> Self {
		self.settings.slug_url_kwarg = kwarg.into();
		self
	}

	pub fn with_slug_field(mut self, field: impl Into<String>) -> Self {
		self.settings.slug_field = field.into();
		self
	}

	pub fn with_query_pk_and_slug(mut self, enabled: bool) -> Self {
		self.settings.query_pk_and_slug = enabled;
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

	/// Resolve the object and serialize it
	pub async fn get(&self, request: &Request) -> Result<Response> {
		let object = self.get_object(request).await?;
		let context = serde_json::to_value(&object)?;
		self.serializer()
			.serialize(request, &context, ResponseStatus::OK)
	}
}

impl<M: Model> SingleObjectMixin<M> for SerializeDetailView<M> {
	fn view_name(&self) -> &str {
		&self.name
	}

	fn source(&self) -> &dyn ObjectSource<M> {
		self.source.as_ref()
	}

	fn object(&self) -> Option<&M> {
		self.object.as_ref()
	}

	fn get_slug_field(&self) -> &str {
		&self.settings.slug_field
	}

	fn pk_url_kwarg(&self) -> &str {
		&self.settings.pk_url_kwarg
	}

	fn slug_url_kwarg(&self) -> &str {
		&self.settings.slug_url_kwarg
	}

	fn query_pk_and_slug(&self) -> bool {
		self.settings.query_pk_and_slug
	}

	fn message_catalog(&self) -> Option<&MessageCatalog> {
		self.catalog.as_deref()
	}
}

#[async_trait]
impl<M: Model> View for SerializeDetailView<M> {
	async fn dispatch(&self, request: Request) -> Result<Response> {
		tracing::debug!(view = %self.name, method = %request.method, path = request.path(), "dispatching detail view");

		match request.method {
			Method::GET => self.get(&request).await,
			Method::HEAD => self.get(&request).await.map(core::head_response),
			Method::OPTIONS => Ok(core::options_response(&self.allowed_methods())),
			_ => Err(core::method_not_allowed(&self.name, &request.method)),
		}
	}
}
