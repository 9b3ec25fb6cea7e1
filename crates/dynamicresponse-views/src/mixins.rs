//! Mixins for common view patterns.

use async_trait::async_trait;
use dynamicresponse_http::{Error, Request, Result};

use crate::i18n::{self, MessageCatalog};
use crate::source::{Lookup, Model, ObjectSource};

/// Trait for views that work with a single object
#[async_trait]
pub trait SingleObjectMixin<M: Model>: Send + Sync {
	/// Name reported in error messages
	fn view_name(&self) -> &str;

	/// Source the object is resolved from
	fn source(&self) -> &dyn ObjectSource<M>;

	/// Object supplied up front, bypassing the lookup
	fn object(&self) -> Option<&M> {
		None
	}

	/// Get the slug field name
	fn get_slug_field(&self) -> &str {
		"slug"
	}

	/// Get the primary key URL parameter name
	fn pk_url_kwarg(&self) -> &str {
		"pk"
	}

	/// Get the slug URL parameter name
	fn slug_url_kwarg(&self) -> &str {
		"slug"
	}

	/// Whether the slug is also matched when a pk is present
	fn query_pk_and_slug(&self) -> bool {
		false
	}

	fn message_catalog(&self) -> Option<&MessageCatalog> {
		None
	}

	/// Build the lookup from the request's URL keyword arguments
	///
	/// The pk always filters when present. The slug filters when there is
	/// no pk, or when [`SingleObjectMixin::query_pk_and_slug`] is set.
	fn get_lookup(&self, request: &Request) -> Result<Lookup> {
		let pk = request.path_param(self.pk_url_kwarg());
		let slug = request.path_param(self.slug_url_kwarg());

		let mut lookup = Lookup::new();
		if let Some(pk) = pk {
			lookup = lookup.with_pk(pk);
		}
		if let Some(slug) = slug
			&& (pk.is_none() || self.query_pk_and_slug())
		{
			lookup = lookup.with_slug(self.get_slug_field(), slug);
		}

		if lookup.is_empty() {
			return Err(Error::ImproperlyConfigured(i18n::format_message(
				self.message_catalog(),
				i18n::MISSING_LOOKUP_KWARGS,
				&[("class_name", self.view_name())],
			)));
		}
		Ok(lookup)
	}

	/// Get a single object
	async fn get_object(&self, request: &Request) -> Result<M> {
		if let Some(object) = self.object() {
			return Ok(object.clone());
		}

		let lookup = self.get_lookup(request)?;
		match self.source().get(&lookup).await? {
			Some(object) => Ok(object),
			None => {
				tracing::debug!(view = self.view_name(), ?lookup, "no object matched lookup");
				Err(Error::NotFound(i18n::format_message(
					self.message_catalog(),
					i18n::NO_OBJECT_FOUND,
					&[("verbose_name", M::verbose_name())],
				)))
			}
		}
	}
}

/// Trait for views that work with multiple objects
#[async_trait]
pub trait MultipleObjectMixin<M: Model>: Send + Sync {
	/// Name reported in error messages
	fn view_name(&self) -> &str;

	/// Source the collection is resolved from
	fn source(&self) -> &dyn ObjectSource<M>;

	/// Whether to allow empty result sets
	fn allow_empty(&self) -> bool {
		true
	}

	fn message_catalog(&self) -> Option<&MessageCatalog> {
		None
	}

	/// Get objects for this view, in query order
	async fn get_queryset(&self) -> Result<Vec<M>> {
		self.source().all().await
	}

	/// Message carried by the not-found error for a rejected empty list
	fn empty_list_message(&self) -> String {
		i18n::format_message(
			self.message_catalog(),
			i18n::EMPTY_LIST,
			&[("class_name", self.view_name())],
		)
	}
}
