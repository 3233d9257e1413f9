//! PDF export — renders the itinerary template to static HTML, loads it in
//! headless Chrome at a fixed mobile viewport width, measures the rendered
//! content height, and captures a single continuous page of exactly that
//! height. No pagination.

pub mod browser;
pub mod handlers;
pub mod render;
