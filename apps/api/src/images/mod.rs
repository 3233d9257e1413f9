//! Image resolution — photo search with a placeholder fallback.
//!
//! Callers never handle failure: a missing key, a provider error, or an
//! empty result all resolve to a placeholder URL.

pub mod handlers;
pub mod provider;
pub mod service;

pub use service::ImageService;
