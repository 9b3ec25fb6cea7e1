//! Views module.
//!
//! Serializing detail and list views, their mixins, object sources and the
//! serialization entry point.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dynamicresponse::views::{InMemorySource, Model, SerializeDetailView, SerializeListView};
//! use std::sync::Arc;
//!
//! # #[derive(Clone, serde::Serialize)]
//! # struct User { id: Option<i64> }
//! # impl Model for User {
//! #     type PrimaryKey = i64;
//! #     fn table_name() -> &'static str { "users" }
//! #     fn primary_key(&self) -> Option<&i64> { self.id.as_ref() }
//! # }
//! let users = Arc::new(InMemorySource::<User>::empty());
//! let _list_view = SerializeListView::new(users.clone()).with_name("UserList");
//! let _detail_view = SerializeDetailView::new(users).with_name("UserDetail");
//! ```

pub use dynamicresponse_views::*;
