//! Translation provider module
//!
//! Wraps the two text-translation operations (language detection and
//! translate-to-English) of the Google Cloud Translation v2 REST API.

pub mod client;
pub mod types;

pub use client::{TARGET_LANGUAGE, TranslateClient};
