//! Translatable messages raised by the views

use std::collections::HashMap;

/// Raised by a list view when the collection is empty and empty lists are disallowed
pub const EMPTY_LIST: &str = "Empty list and '%(class_name)s.allow_empty' is False.";

/// Raised by a detail view when the lookup matches nothing
pub const NO_OBJECT_FOUND: &str = "No %(verbose_name)s found matching the query";

/// Raised by a detail view routed without a pk or slug keyword argument
pub const MISSING_LOOKUP_KWARGS: &str = "Generic detail view %(class_name)s must be called with either an object pk or a slug in the URLconf.";

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use dynamicresponse_views::i18n::{EMPTY_LIST, MessageCatalog};
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation(EMPTY_LIST, "Liste vide et '%(class_name)s.allow_empty' vaut False.");
///
/// assert_eq!(catalog.locale(), "fr");
/// assert!(catalog.translate(EMPTY_LIST).starts_with("Liste vide"));
/// assert_eq!(catalog.translate("untranslated"), "untranslated");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Translation for `message`, or `message` itself when untranslated
	pub fn translate<'a>(&'a self, message: &'a str) -> &'a str {
		self.get(message).map(String::as_str).unwrap_or(message)
	}
}

/// Translate through an optional catalog
pub fn gettext<'a>(catalog: Option<&'a MessageCatalog>, message: &'a str) -> &'a str {
	match catalog {
		Some(catalog) => catalog.translate(message),
		None => message,
	}
}

/// Substitute `%(name)s` placeholders
///
/// Unknown placeholders are left untouched.
///
/// # Example
/// ```
/// use dynamicresponse_views::i18n::{EMPTY_LIST, interpolate};
///
/// assert_eq!(
///     interpolate(EMPTY_LIST, &[("class_name", "ArticleList")]),
///     "Empty list and 'ArticleList.allow_empty' is False."
/// );
/// ```
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
	params
		.iter()
		.fold(template.to_string(), |message, (name, value)| {
			message.replace(&format!("%({})s", name), value)
		})
}

/// Translate `message` and substitute its placeholders
pub fn format_message(
	catalog: Option<&MessageCatalog>,
	message: &str,
	params: &[(&str, &str)],
) -> String {
	interpolate(gettext(catalog, message), params)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_message_without_catalog() {
		let message = format_message(None, NO_OBJECT_FOUND, &[("verbose_name", "article")]);
		assert_eq!(message, "No article found matching the query");
	}

	#[test]
	fn test_format_message_uses_translation() {
		let mut catalog = MessageCatalog::new("de");
		catalog.add_translation(
			NO_OBJECT_FOUND,
			"Kein %(verbose_name)s zur Abfrage gefunden",
		);

		let message = format_message(
			Some(&catalog),
			NO_OBJECT_FOUND,
			&[("verbose_name", "Artikel")],
		);
		assert_eq!(message, "Kein Artikel zur Abfrage gefunden");
	}

	#[test]
	fn test_unknown_placeholder_left_alone() {
		assert_eq!(
			interpolate("%(missing)s and %(name)s", &[("name", "x")]),
			"%(missing)s and x"
		);
	}
}
