//! HTTP module.
//!
//! Request, response and error types shared by every view.

pub use dynamicresponse_http::*;
