//! Input normalization: free text, URL, or PDF bytes → capped plain text.

use tracing::debug;

use crate::errors::AppError;

/// Extracted PDF and page text is truncated to this many characters to bound
/// LLM token usage.
pub const MAX_INPUT_CHARS: usize = 8000;
/// Inputs shorter than this cannot describe an itinerary; reject them up
/// front instead of returning a partially-populated document. A single
/// day line ("Day 1: Arrive in Paris. Visit the Eiffel Tower.") must pass.
pub const MIN_INPUT_CHARS: usize = 30;
const URL_FETCH_TIMEOUT_SECS: u64 = 15;

/// Collapses whitespace and truncates to [`MAX_INPUT_CHARS`] on a char
/// boundary.
pub fn normalize_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_INPUT_CHARS).collect()
}

/// Rejects input below the minimum content threshold.
pub fn check_min_length(text: &str) -> Result<(), AppError> {
    if text.chars().count() < MIN_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "Input text is too short to extract an itinerary (minimum {MIN_INPUT_CHARS} characters)"
        )));
    }
    Ok(())
}

/// Extracts plain text from uploaded PDF bytes. `pdf-extract` parses on the
/// CPU, so this runs on the blocking pool.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    debug!("Extracted {} chars from PDF", text.len());
    Ok(normalize_text(&text))
}

/// Fetches a URL and reduces the response to plain text. HTML is stripped;
/// a PDF response body goes through PDF text extraction instead.
pub async fn fetch_url_text(url: &str) -> Result<String, AppError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::Validation(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(URL_FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Validation(format!("Could not fetch URL: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Validation(format!(
            "URL returned status {}",
            response.status()
        )));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read URL body: {e}")))?;

    if is_pdf(&content_type, &bytes) {
        return extract_pdf_text(bytes.to_vec()).await;
    }

    let body = String::from_utf8_lossy(&bytes);
    Ok(normalize_text(&strip_html(&body)))
}

/// True if the content-type or leading magic bytes indicate a PDF.
fn is_pdf(content_type: &str, head: &[u8]) -> bool {
    content_type.contains("application/pdf") || head.starts_with(b"%PDF-")
}

/// Reduces an HTML document to its visible text: drops script/style/head
/// subtrees, strips tags, decodes the common entities.
pub fn strip_html(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len() / 2);
    let mut chars = html.char_indices();
    let mut skip_until: Option<usize> = None;

    while let Some((i, c)) = chars.next() {
        if let Some(end) = skip_until {
            if i < end {
                continue;
            }
            skip_until = None;
        }

        if c == '<' {
            for (open, close) in [
                (b"<script".as_slice(), b"</script>".as_slice()),
                (b"<style".as_slice(), b"</style>".as_slice()),
                (b"<head".as_slice(), b"</head>".as_slice()),
            ] {
                if starts_with_ci(&bytes[i..], open) {
                    if let Some(rel) = find_ci(&bytes[i..], close) {
                        // Both indices sit after an ASCII '>', so they stay
                        // on char boundaries.
                        skip_until = Some(i + rel + close.len());
                    }
                }
            }
            if skip_until.is_some() {
                continue;
            }
            // Skip to the end of this tag; emit a space so words don't fuse.
            for (_, tc) in chars.by_ref() {
                if tc == '>' {
                    break;
                }
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn starts_with_ci(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}

fn find_ci(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_drops_tags_and_scripts() {
        let html = "<html><head><title>x</title></head><body>\
            <script>var a = 1;</script><h1>Paris</h1><p>Day 1: arrive &amp; explore</p></body></html>";
        assert_eq!(strip_html(html), "Paris Day 1: arrive & explore");
    }

    #[test]
    fn test_strip_html_keeps_word_boundaries() {
        assert_eq!(strip_html("<b>Leh</b><i>Ladakh</i>"), "Leh Ladakh");
    }

    #[test]
    fn test_normalize_truncates_at_cap() {
        let long = "word ".repeat(4000);
        let normalized = normalize_text(&long);
        assert_eq!(normalized.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_normalize_is_char_boundary_safe() {
        let long = "日本語テキスト ".repeat(2000);
        let normalized = normalize_text(&long);
        assert!(normalized.chars().count() <= MAX_INPUT_CHARS);
    }

    #[test]
    fn test_min_length_rejects_short_input() {
        assert!(check_min_length("too short").is_err());
        assert!(check_min_length(&"x".repeat(MIN_INPUT_CHARS)).is_ok());
    }

    #[test]
    fn test_is_pdf_by_magic_bytes() {
        assert!(is_pdf("", b"%PDF-1.7 rest"));
        assert!(is_pdf("application/pdf; charset=binary", b"whatever"));
        assert!(!is_pdf("text/html", b"<html>"));
    }
}
