//! Itinerary persistence — per-user CRUD over Postgres.
//!
//! Every query is scoped by the caller's user id; a row owned by someone
//! else is indistinguishable from an absent one (404). Updates are
//! last-write-wins.

pub mod handlers;
pub mod store;
