//! Shared fixtures for the view integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use dynamicresponse_http::{Error, Request, Response, ResponseStatus, Result};
use dynamicresponse_views::{
	InMemorySource, JsonSerializer, Lookup, Model, ObjectSource, ResponseSerializer,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
	pub id: Option<i64>,
	pub title: String,
	pub slug: String,
	pub author: String,
}

impl Model for Article {
	type PrimaryKey = i64;

	fn table_name() -> &'static str {
		"articles"
	}

	fn verbose_name() -> &'static str {
		"article"
	}

	fn primary_key(&self) -> Option<&Self::PrimaryKey> {
		self.id.as_ref()
	}
}

pub fn article(id: i64, slug: &str) -> Article {
	Article {
		id: Some(id),
		title: format!("Article {}", id),
		slug: slug.to_string(),
		author: "John Doe".to_string(),
	}
}

pub fn articles() -> Vec<Article> {
	vec![
		article(3, "third"),
		article(1, "first"),
		article(2, "second"),
	]
}

pub fn article_source() -> Arc<InMemorySource<Article>> {
	Arc::new(InMemorySource::new(articles()))
}

/// Records every context it is asked to serialize, then delegates to JSON
#[derive(Default)]
pub struct RecordingSerializer {
	calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingSerializer {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	pub fn contexts(&self) -> Vec<Value> {
		self.calls.lock().iter().map(|(_, c)| c.clone()).collect()
	}

	/// Request paths seen by the serializer
	pub fn paths(&self) -> Vec<String> {
		self.calls.lock().iter().map(|(p, _)| p.clone()).collect()
	}
}

impl ResponseSerializer for RecordingSerializer {
	fn serialize(&self, request: &Request, context: &Value, status: ResponseStatus) -> Result<Response> {
		self.calls
			.lock()
			.push((request.path().to_string(), context.clone()));
		JsonSerializer::new().serialize(request, context, status)
	}
}

/// Source that fails every call
pub struct FailingSource;

#[async_trait]
impl ObjectSource<Article> for FailingSource {
	async fn get(&self, _lookup: &Lookup) -> Result<Option<Article>> {
		Err(Error::Internal("connection refused".to_string()))
	}

	async fn all(&self) -> Result<Vec<Article>> {
		Err(Error::Internal("connection refused".to_string()))
	}
}

pub fn get(path: &str, params: &[(&str, &str)]) -> Request {
	let mut request = Request::builder().uri(path).build().unwrap();
	for (key, value) in params {
		request.set_path_param(*key, *value);
	}
	request
}
