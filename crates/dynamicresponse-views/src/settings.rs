//! View settings
//!
//! Settings load from TOML (either top-level keys or a `[views]` table)
//! or from `DYNAMICRESPONSE_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Prefix for environment variable lookups
pub const ENV_PREFIX: &str = "DYNAMICRESPONSE_";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
	#[error("Failed to parse settings: {0}")]
	Parse(String),
	#[error("Invalid value for {key}: {value}")]
	InvalidValue { key: String, value: String },
}

/// Configuration shared by the detail and list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
	/// Whether a list view may answer with zero items
	pub allow_empty: bool,
	/// Path parameter carrying the primary key
	pub pk_url_kwarg: String,
	/// Path parameter carrying the slug
	pub slug_url_kwarg: String,
	/// Object field the slug is matched against
	pub slug_field: String,
	/// Filter on the slug even when a pk is supplied
	pub query_pk_and_slug: bool,
	/// Indent serialized JSON
	pub pretty_json: bool,
}

impl Default for ViewSettings {
	fn default() -> Self {
		Self {
			allow_empty: true,
			pk_url_kwarg: "pk".to_string(),
			slug_url_kwarg: "slug".to_string(),
			slug_field: "slug".to_string(),
			query_pk_and_slug: false,
			pretty_json: false,
		}
	}
}

#[derive(Deserialize)]
struct SettingsFile {
	views: ViewSettings,
}

impl ViewSettings {
	/// Parse settings from TOML text
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_views::ViewSettings;
	///
	/// let settings = ViewSettings::from_toml_str(r#"
	///     [views]
	///     allow_empty = false
	///     slug_field = "handle"
	/// "#).unwrap();
	///
	/// assert!(!settings.allow_empty);
	/// assert_eq!(settings.slug_field, "handle");
	/// assert_eq!(settings.pk_url_kwarg, "pk");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let table: toml::Table =
			toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;

		let result = if table.contains_key("views") {
			toml::Value::Table(table)
				.try_into::<SettingsFile>()
				.map(|file| file.views)
		} else {
			toml::Value::Table(table).try_into::<ViewSettings>()
		};
		result.map_err(|e| SettingsError::Parse(e.to_string()))
	}

	/// Read settings from `DYNAMICRESPONSE_*` environment variables
	///
	/// Unset variables keep their defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_lookup(|key| env::var(format!("{}{}", ENV_PREFIX, key)).ok())
	}

	/// Read settings through an arbitrary key lookup (keys without prefix)
	///
	/// # Examples
	///
	/// ```
	/// use dynamicresponse_views::ViewSettings;
	///
	/// let settings = ViewSettings::from_lookup(|key| match key {
	///     "ALLOW_EMPTY" => Some("off".to_string()),
	///     "PK_URL_KWARG" => Some("id".to_string()),
	///     _ => None,
	/// })
	/// .unwrap();
	///
	/// assert!(!settings.allow_empty);
	/// assert_eq!(settings.pk_url_kwarg, "id");
	/// ```
	pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut settings = Self::default();

		if let Some(value) = lookup("ALLOW_EMPTY") {
			settings.allow_empty = parse_bool("ALLOW_EMPTY", &value)?;
		}
		if let Some(value) = lookup("QUERY_PK_AND_SLUG") {
			settings.query_pk_and_slug = parse_bool("QUERY_PK_AND_SLUG", &value)?;
		}
		if let Some(value) = lookup("PRETTY_JSON") {
			settings.pretty_json = parse_bool("PRETTY_JSON", &value)?;
		}
		if let Some(value) = lookup("PK_URL_KWARG") {
			settings.pk_url_kwarg = non_empty("PK_URL_KWARG", value)?;
		}
		if let Some(value) = lookup("SLUG_URL_KWARG") {
			settings.slug_url_kwarg = non_empty("SLUG_URL_KWARG", value)?;
		}
		if let Some(value) = lookup("SLUG_FIELD") {
			settings.slug_field = non_empty("SLUG_FIELD", value)?;
		}

		Ok(settings)
	}
}

/// Parse a boolean the way django-environ does
pub fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "yes" | "on" | "1" | "y" | "t" => Ok(true),
		"false" | "no" | "off" | "0" | "n" | "f" | "" => Ok(false),
		_ => Err(SettingsError::InvalidValue {
			key: format!("{}{}", ENV_PREFIX, key),
			value: value.to_string(),
		}),
	}
}

fn non_empty(key: &str, value: String) -> Result<String, SettingsError> {
	if value.trim().is_empty() {
		return Err(SettingsError::InvalidValue {
			key: format!("{}{}", ENV_PREFIX, key),
			value,
		});
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[test]
	fn test_defaults() {
		let settings = ViewSettings::default();
		assert!(settings.allow_empty);
		assert!(!settings.query_pk_and_slug);
		assert_eq!(settings.slug_url_kwarg, "slug");
	}

	#[test]
	fn test_top_level_toml_keys() {
		let settings = ViewSettings::from_toml_str("allow_empty = false\npretty_json = true").unwrap();
		assert!(!settings.allow_empty);
		assert!(settings.pretty_json);
		assert_eq!(settings.slug_field, "slug");
	}

	#[test]
	fn test_empty_toml_is_default() {
		assert_eq!(ViewSettings::from_toml_str("").unwrap(), ViewSettings::default());
	}

	#[test]
	fn test_toml_type_mismatch() {
		let error = ViewSettings::from_toml_str("allow_empty = \"nope\"").unwrap_err();
		assert!(matches!(error, SettingsError::Parse(_)));
	}

	#[rstest]
	#[case("True", true)]
	#[case("on", true)]
	#[case("1", true)]
	#[case("no", false)]
	#[case("0", false)]
	#[case(" FALSE ", false)]
	fn test_parse_bool(#[case] raw: &str, #[case] expected: bool) {
		assert_eq!(parse_bool("ALLOW_EMPTY", raw).unwrap(), expected);
	}

	#[test]
	fn test_parse_bool_rejects_garbage() {
		let error = parse_bool("ALLOW_EMPTY", "maybe").unwrap_err();
		assert_eq!(
			error,
			SettingsError::InvalidValue {
				key: "DYNAMICRESPONSE_ALLOW_EMPTY".to_string(),
				value: "maybe".to_string(),
			}
		);
	}

	#[test]
	fn test_lookup_rejects_blank_kwarg() {
		let error = ViewSettings::from_lookup(|key| (key == "SLUG_FIELD").then(|| "  ".to_string()))
			.unwrap_err();
		assert!(matches!(error, SettingsError::InvalidValue { .. }));
	}

	#[test]
	#[serial]
	fn test_from_env() {
		// SAFETY: serialized with every other env-mutating test
		unsafe {
			env::set_var("DYNAMICRESPONSE_ALLOW_EMPTY", "false");
			env::set_var("DYNAMICRESPONSE_SLUG_URL_KWARG", "handle");
		}

		let settings = ViewSettings::from_env().unwrap();

		unsafe {
			env::remove_var("DYNAMICRESPONSE_ALLOW_EMPTY");
			env::remove_var("DYNAMICRESPONSE_SLUG_URL_KWARG");
		}

		assert!(!settings.allow_empty);
		assert_eq!(settings.slug_url_kwarg, "handle");
		assert_eq!(settings.pk_url_kwarg, "pk");
	}
}
