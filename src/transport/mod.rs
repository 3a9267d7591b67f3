//! HTTP transport seam used by the integration client.
//!
//! This module provides:
//! - Plain request/response values ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport backed by reqwest ([`ReqwestClient`])
//! - Transport-level failures ([`HttpError`])
//!
//! Nothing here knows about integrations, validation or status
//! classification; it moves bytes and reports network failures.

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
