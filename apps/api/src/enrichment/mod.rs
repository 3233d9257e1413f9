//! Hotel enrichment — best-effort ratings, photos, and review phrases from
//! the TripAdvisor content API, with synthesized fallback data on any
//! upstream failure. Callers never see a provider error.

pub mod client;
pub mod handlers;
pub mod phrases;
pub mod policy;
pub mod service;

pub use service::HotelDataService;
