use std::path::PathBuf;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::future::join_all;

use crate::errors::AppError;
use crate::images::ImageService;
use crate::models::itinerary::ItineraryFormData;
use crate::pdf::browser::capture_pdf;
use crate::pdf::render::{render_itinerary_html, ResolvedImages};
use crate::state::AppState;

/// POST /api/pdf
///
/// Body: the itinerary form data. Response: `application/pdf` bytes as an
/// attachment. Image slots resolve concurrently before rendering; a failed
/// slot falls back to a placeholder and never fails the export.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(form): Json<ItineraryFormData>,
) -> Result<Response, AppError> {
    let images = resolve_images(&state.images, &form).await;
    let html = render_itinerary_html(&form, &images);

    let chrome_path = state.config.chrome_path.clone().map(PathBuf::from);
    let pdf = tokio::task::spawn_blocking(move || capture_pdf(&html, chrome_path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF capture task failed: {e}")))?
        .map_err(map_capture_error)?;

    let filename = export_filename(&form);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Resolves every image slot through the image service, mirroring the live
/// preview's lookup queries so the export matches the on-screen result.
pub async fn resolve_images(images: &ImageService, form: &ItineraryFormData) -> ResolvedImages {
    let destination = form.destination.trim();

    let main = resolve_slot(
        images,
        &form.main_image,
        format!("{destination} travel scenery"),
    );

    let hotels = join_all(form.hotels.iter().map(|h| {
        resolve_slot(images, &h.image, format!("{} hotel {}", h.name, h.city))
    }));

    let experiences = join_all(
        form.experiences
            .iter()
            .map(|e| resolve_slot(images, &e.image, format!("{destination} {}", e.name))),
    );

    let days = join_all(
        form.day_wise_itinerary
            .iter()
            .map(|d| resolve_slot(images, &d.image, format!("{destination} {}", d.title))),
    );

    let gallery = join_all(
        form.gallery_images
            .iter()
            .map(|url| resolve_slot(images, url, format!("{destination} highlights"))),
    );

    let (main, hotels, experiences, days, gallery) =
        tokio::join!(main, hotels, experiences, days, gallery);

    ResolvedImages {
        main,
        hotels,
        experiences,
        days,
        gallery,
    }
}

/// An already-populated slot is kept as-is; empty slots go through a lookup.
async fn resolve_slot(images: &ImageService, existing: &str, query: String) -> String {
    let existing = existing.trim();
    if !existing.is_empty() {
        return existing.to_string();
    }
    images.resolve_one(&query).await
}

/// The capture error chain carries local detail (Chrome launch paths); it is
/// logged here and the client gets a fixed message.
fn map_capture_error(e: anyhow::Error) -> AppError {
    tracing::warn!("PDF capture failed: {e:#}");
    AppError::Upstream("PDF renderer is unavailable".to_string())
}

fn export_filename(form: &ItineraryFormData) -> String {
    let base = if form.title.trim().is_empty() {
        form.destination.trim()
    } else {
        form.title.trim()
    };
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let sanitized = sanitized.trim_matches('-');
    if sanitized.is_empty() {
        "itinerary.pdf".to_string()
    } else {
        format!("{sanitized}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_sanitizes() {
        let form = ItineraryFormData {
            title: "Leh & Nubra: 5 days!".to_string(),
            ..Default::default()
        };
        assert_eq!(export_filename(&form), "Leh---Nubra--5-days.pdf");
    }

    #[test]
    fn test_export_filename_default() {
        assert_eq!(export_filename(&ItineraryFormData::default()), "itinerary.pdf");
    }

    #[test]
    fn test_capture_error_detail_stays_server_side() {
        let err = anyhow::anyhow!("no usable Chrome at /opt/secret/chrome")
            .context("failed to launch headless browser");
        match map_capture_error(err) {
            AppError::Upstream(msg) => {
                assert_eq!(msg, "PDF renderer is unavailable");
                assert!(!msg.contains("/opt/secret/chrome"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_images_fills_every_slot() {
        use crate::models::itinerary::{DayEntry, Hotel};

        let service = ImageService::new(None);
        let form = ItineraryFormData {
            destination: "Leh".to_string(),
            main_image: "https://img.example/main.jpg".to_string(),
            hotels: vec![Hotel::default(), Hotel::default()],
            day_wise_itinerary: vec![DayEntry::default()],
            gallery_images: vec![String::new()],
            ..Default::default()
        };

        let resolved = resolve_images(&service, &form).await;
        // Pre-populated slot is passed through untouched.
        assert_eq!(resolved.main, "https://img.example/main.jpg");
        assert_eq!(resolved.hotels.len(), 2);
        assert_eq!(resolved.days.len(), 1);
        assert_eq!(resolved.gallery.len(), 1);
        assert!(resolved.hotels.iter().all(|u| !u.is_empty()));
        assert!(resolved.gallery[0].starts_with("https://picsum.photos/"));
    }
}
