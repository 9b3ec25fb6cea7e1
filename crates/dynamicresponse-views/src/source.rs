//! Object resolution for views
//!
//! Views never query storage directly. They build a [`Lookup`] from the
//! request's URL keyword arguments and ask an [`ObjectSource`] for the
//! matching object, or ask it for the whole collection in query order.

use async_trait::async_trait;
use dynamicresponse_http::{Error, Result};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// An object a view can resolve and serialize
///
/// # Examples
///
/// ```
/// use dynamicresponse_views::Model;
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Article {
///     id: Option<i64>,
///     slug: String,
/// }
///
/// impl Model for Article {
///     type PrimaryKey = i64;
///     fn table_name() -> &'static str { "articles" }
///     fn verbose_name() -> &'static str { "article" }
///     fn primary_key(&self) -> Option<&Self::PrimaryKey> { self.id.as_ref() }
/// }
///
/// let article = Article { id: Some(1), slug: "hello".into() };
/// assert_eq!(article.primary_key(), Some(&1));
/// ```
pub trait Model: Serialize + Clone + Send + Sync + 'static {
	type PrimaryKey: Display + Send + Sync;

	fn table_name() -> &'static str;

	/// Human-readable name used in not-found messages
	fn verbose_name() -> &'static str {
		Self::table_name()
	}

	fn primary_key(&self) -> Option<&Self::PrimaryKey>;
}

/// Slug part of a [`Lookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugLookup {
	pub field: String,
	pub value: String,
}

/// Criteria for resolving a single object
///
/// Values arrive as strings from the URL; a primary key matches when its
/// `Display` form equals the lookup value, a slug matches when the named
/// field of the object's serde representation renders to the lookup value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
	pub pk: Option<String>,
	pub slug: Option<SlugLookup>,
}

impl Lookup {
	pub fn new() -> Self {
		Self::default()
	}

	/// Filter on primary key
	pub fn by_pk(pk: impl Into<String>) -> Self {
		Self::new().with_pk(pk)
	}

	/// Filter on a slug field
	pub fn by_slug(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new().with_slug(field, value)
	}

	pub fn with_pk(mut self, pk: impl Into<String>) -> Self {
		self.pk = Some(pk.into());
		self
	}

	pub fn with_slug(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
		self.slug = Some(SlugLookup {
			field: field.into(),
			value: value.into(),
		});
		self
	}

	pub fn is_empty(&self) -> bool {
		self.pk.is_none() && self.slug.is_none()
	}

	/// Whether `object` satisfies every criterion of this lookup
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_views::{Lookup, Model};
	/// use serde::Serialize;
	///
	/// #[derive(Clone, Serialize)]
	/// struct Tag { id: Option<u32>, slug: String }
	///
	/// impl Model for Tag {
	///     type PrimaryKey = u32;
	///     fn table_name() -> &'static str { "tags" }
	///     fn primary_key(&self) -> Option<&u32> { self.id.as_ref() }
	/// }
	///
	/// let tag = Tag { id: Some(7), slug: "rust".into() };
	/// assert!(Lookup::by_pk("7").matches(&tag));
	/// assert!(Lookup::by_slug("slug", "rust").matches(&tag));
	/// assert!(!Lookup::by_pk("7").with_slug("slug", "go").matches(&tag));
	/// ```
	pub fn matches<M: Model>(&self, object: &M) -> bool {
		if let Some(pk) = &self.pk {
			match object.primary_key() {
				Some(key) if key.to_string() == *pk => {}
				_ => return false,
			}
		}

		if let Some(slug) = &self.slug {
			let value = serde_json::to_value(object)
				.ok()
				.and_then(|v| v.get(&slug.field).and_then(scalar_to_string));
			if value.as_deref() != Some(slug.value.as_str()) {
				return false;
			}
		}

		true
	}
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// Capability for resolving objects on behalf of a view
#[async_trait]
pub trait ObjectSource<M: Model>: Send + Sync {
	/// Resolve the single object matching `lookup`, `None` when nothing matches
	async fn get(&self, lookup: &Lookup) -> Result<Option<M>>;

	/// Resolve the full collection in query order
	async fn all(&self) -> Result<Vec<M>>;
}

/// [`ObjectSource`] over an in-process vector
///
/// Objects are returned in insertion order.
///
/// # Examples
///
/// ```
/// use dynamicresponse_views::{InMemorySource, Lookup, Model, ObjectSource};
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, PartialEq, Serialize)]
/// struct Note { id: Option<i64>, text: String }
///
/// impl Model for Note {
///     type PrimaryKey = i64;
///     fn table_name() -> &'static str { "notes" }
///     fn primary_key(&self) -> Option<&i64> { self.id.as_ref() }
/// }
///
/// # tokio_test_block(async {
/// let source = InMemorySource::new(vec![
///     Note { id: Some(1), text: "first".into() },
///     Note { id: Some(2), text: "second".into() },
/// ]);
/// let note = source.get(&Lookup::by_pk("2")).await.unwrap().unwrap();
/// assert_eq!(note.text, "second");
/// assert_eq!(source.all().await.unwrap().len(), 2);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource<M> {
	objects: RwLock<Vec<M>>,
}

impl<M: Model> InMemorySource<M> {
	pub fn new(objects: Vec<M>) -> Self {
		Self {
			objects: RwLock::new(objects),
		}
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	pub fn push(&self, object: M) {
		self.objects.write().push(object);
	}

	/// Replace the whole collection
	pub fn replace(&self, objects: Vec<M>) {
		*self.objects.write() = objects;
	}

	pub fn clear(&self) {
		self.objects.write().clear();
	}

	pub fn len(&self) -> usize {
		self.objects.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.read().is_empty()
	}
}

#[async_trait]
impl<M: Model> ObjectSource<M> for InMemorySource<M> {
	async fn get(&self, lookup: &Lookup) -> Result<Option<M>> {
		let objects = self.objects.read();
		let mut matches = objects.iter().filter(|object| lookup.matches(*object));

		let first = matches.next().cloned();
		let extra = matches.count();
		if extra > 0 {
			return Err(Error::Internal(format!(
				"get() returned more than one {} -- it returned {}!",
				M::verbose_name(),
				extra + 1
			)));
		}
		Ok(first)
	}

	async fn all(&self) -> Result<Vec<M>> {
		Ok(self.objects.read().clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone, PartialEq, Serialize)]
	struct Page {
		id: Option<i64>,
		slug: String,
		position: u32,
	}

	impl Model for Page {
		type PrimaryKey = i64;

		fn table_name() -> &'static str {
			"pages"
		}

		fn verbose_name() -> &'static str {
			"page"
		}

		fn primary_key(&self) -> Option<&Self::PrimaryKey> {
			self.id.as_ref()
		}
	}

	fn page(id: i64, slug: &str) -> Page {
		Page {
			id: Some(id),
			slug: slug.to_string(),
			position: id as u32 * 10,
		}
	}

	#[test]
	fn test_lookup_matches_numeric_field() {
		let lookup = Lookup::by_slug("position", "20");
		assert!(lookup.matches(&page(2, "about")));
		assert!(!lookup.matches(&page(3, "contact")));
	}

	#[test]
	fn test_lookup_unknown_field_never_matches() {
		assert!(!Lookup::by_slug("missing", "x").matches(&page(1, "home")));
	}

	#[test]
	fn test_unsaved_object_never_matches_pk() {
		let unsaved = Page {
			id: None,
			slug: "draft".to_string(),
			position: 0,
		};
		assert!(!Lookup::by_pk("1").matches(&unsaved));
		assert!(Lookup::by_slug("slug", "draft").matches(&unsaved));
	}

	#[test]
	fn test_empty_lookup() {
		assert!(Lookup::new().is_empty());
		assert!(!Lookup::by_pk("1").is_empty());
	}

	#[tokio::test]
	async fn test_get_returns_none_when_missing() {
		let source = InMemorySource::new(vec![page(1, "home")]);
		let found = source.get(&Lookup::by_pk("99")).await.unwrap();
		assert!(found.is_none());
	}

	#[tokio::test]
	async fn test_get_rejects_multiple_matches() {
		let source = InMemorySource::new(vec![page(1, "dup"), page(2, "dup")]);
		let error = source
			.get(&Lookup::by_slug("slug", "dup"))
			.await
			.unwrap_err();
		assert_eq!(
			error,
			Error::Internal("get() returned more than one page -- it returned 2!".to_string())
		);
	}

	#[tokio::test]
	async fn test_all_preserves_insertion_order() {
		let source = InMemorySource::empty();
		source.push(page(3, "c"));
		source.push(page(1, "a"));
		source.push(page(2, "b"));

		let ids: Vec<_> = source
			.all()
			.await
			.unwrap()
			.into_iter()
			.filter_map(|p| p.id)
			.collect();
		assert_eq!(ids, vec![3, 1, 2]);

		source.clear();
		assert!(source.is_empty());
	}
}
