pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrichment;
use crate::extraction;
use crate::images;
use crate::itineraries;
use crate::pdf;
use crate::state::AppState;
use crate::summary;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction & summary
        .route("/api/extract", post(extraction::handlers::handle_extract))
        .route(
            "/api/generate-summary",
            post(summary::handlers::handle_generate_summary),
        )
        // Image resolution
        .route(
            "/api/images",
            get(images::handlers::handle_get_images).post(images::handlers::handle_post_images),
        )
        // Hotel enrichment
        .route(
            "/api/tripadvisor",
            post(enrichment::handlers::handle_tripadvisor),
        )
        // Itinerary persistence
        .route(
            "/api/itineraries",
            get(itineraries::handlers::handle_list).post(itineraries::handlers::handle_create),
        )
        .route(
            "/api/itineraries/:id",
            get(itineraries::handlers::handle_get)
                .put(itineraries::handlers::handle_update)
                .delete(itineraries::handlers::handle_delete),
        )
        .route(
            "/api/itineraries/:id/export",
            post(itineraries::handlers::handle_mark_exported),
        )
        // PDF export
        .route("/api/pdf", post(pdf::handlers::handle_export_pdf))
        .with_state(state)
}
