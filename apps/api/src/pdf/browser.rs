//! Headless-Chrome capture at measured content height.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use base64::prelude::*;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::debug;

/// The template is laid out for this width; it matches the live preview.
pub const VIEWPORT_WIDTH_PX: u32 = 420;
/// Chrome's CSS pixel density for print sizing.
pub const PX_PER_INCH: f64 = 96.0;

const IMAGE_SETTLE_POLLS: u32 = 20;
const IMAGE_SETTLE_INTERVAL_MS: u64 = 250;

pub fn px_to_inches(px: f64) -> f64 {
    px / PX_PER_INCH
}

/// Loads the HTML document, waits for image load to settle, measures the
/// rendered height, and re-requests the capture with the paper height set to
/// exactly that measurement. Blocking; run on the blocking pool.
pub fn capture_pdf(html: &str, chrome_path: Option<PathBuf>) -> Result<Vec<u8>> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .path(chrome_path)
        .window_size(Some((VIEWPORT_WIDTH_PX, 800)))
        .build()
        .map_err(|e| anyhow!("failed to build browser launch options: {e}"))?;

    let browser = Browser::new(options).context("failed to launch headless browser")?;
    let tab = browser.new_tab().context("failed to open browser tab")?;

    let data_url = format!("data:text/html;base64,{}", BASE64_STANDARD.encode(html));
    tab.navigate_to(&data_url)
        .context("failed to load itinerary document")?;
    tab.wait_until_navigated()
        .context("itinerary document did not finish loading")?;

    wait_for_images(&tab);

    let height_px = tab
        .evaluate("document.body.scrollHeight", false)
        .context("failed to measure content height")?
        .value
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow!("content height measurement returned no value"))?;

    debug!("Rendered itinerary height: {height_px}px");

    let pdf = tab
        .print_to_pdf(Some(pdf_options(height_px)))
        .context("PDF capture failed")?;
    Ok(pdf)
}

/// Polls until every `<img>` has finished loading (success or failure), up
/// to a bounded number of attempts. Slots that never settle render as their
/// CSS fallback box; a slow image must not fail the export.
fn wait_for_images(tab: &Tab) {
    const SETTLED_EXPR: &str =
        "Array.from(document.images).every(function (img) { return img.complete; })";
    for _ in 0..IMAGE_SETTLE_POLLS {
        let settled = tab
            .evaluate(SETTLED_EXPR, false)
            .ok()
            .and_then(|r| r.value)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if settled {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(IMAGE_SETTLE_INTERVAL_MS));
    }
}

/// Single continuous page sized to the measured content: fixed template
/// width, exact measured height, zero margins, no page ranges.
pub fn pdf_options(content_height_px: f64) -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(false),
        print_background: Some(true),
        scale: Some(1.0),
        paper_width: Some(px_to_inches(VIEWPORT_WIDTH_PX as f64)),
        paper_height: Some(px_to_inches(content_height_px.max(1.0))),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        prefer_css_page_size: Some(false),
        ..Default::default()
    }
}
