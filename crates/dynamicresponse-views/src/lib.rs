//! # dynamicresponse-views
//!
//! Generic detail and list views whose response is produced by a serializer
//! rather than a template.
//!
//! Both views follow the same shape: resolve content through an
//! [`ObjectSource`] (by pk/slug for [`SerializeDetailView`], the whole
//! collection for [`SerializeListView`]), then call a [`ResponseSerializer`]
//! with the request and the resolved context. The list view adds one rule:
//! an empty collection is reported as not found when `allow_empty` is off.
//!
//! Resolution behaviour lives in the [`SingleObjectMixin`] and
//! [`MultipleObjectMixin`] traits, so custom views can reuse it by
//! implementing the accessor methods and keeping the provided defaults.

pub mod core;
pub mod detail;
pub mod i18n;
pub mod list;
pub mod mixins;
pub mod serializer;
pub mod settings;
pub mod source;

pub use crate::core::View;
pub use detail::SerializeDetailView;
pub use i18n::MessageCatalog;
pub use list::SerializeListView;
pub use mixins::{MultipleObjectMixin, SingleObjectMixin};
pub use serializer::{JsonSerializer, RESPONSE_STATUS_HEADER, ResponseSerializer, serialize_object};
pub use settings::{SettingsError, ViewSettings};
pub use source::{InMemorySource, Lookup, Model, ObjectSource, SlugLookup};
