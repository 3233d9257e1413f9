//! Static HTML rendering of the itinerary template.
//!
//! The markup mirrors the live in-browser preview so the exported PDF
//! matches the on-screen result. All page-break boundaries are forced off;
//! the capture side sizes the page to the rendered height instead.

use crate::models::itinerary::ItineraryFormData;

/// Overflow-truncation display rule: only the first 4 hotels / experiences /
/// day entries render inline, the remainder is summarized as "+N more".
pub const MAX_INLINE_ENTRIES: usize = 4;

/// Image URLs resolved ahead of rendering, one per slot, aligned by index
/// with the form arrays. Every entry is a usable URL (placeholder at worst).
#[derive(Debug, Clone, Default)]
pub struct ResolvedImages {
    pub main: String,
    pub hotels: Vec<String>,
    pub experiences: Vec<String>,
    pub days: Vec<String>,
    pub gallery: Vec<String>,
}

const PAGE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; \
    page-break-before: avoid !important; \
    page-break-after: avoid !important; \
    page-break-inside: avoid !important; \
    break-inside: avoid !important; } \
body { width: 420px; font-family: 'Helvetica Neue', Arial, sans-serif; \
       color: #1f2933; background: #ffffff; } \
img { display: block; width: 100%; object-fit: cover; background: #e4e7eb; } \
.hero img { height: 220px; } \
.hero .overlay { padding: 16px; } \
h1 { font-size: 22px; margin-bottom: 4px; } \
h2 { font-size: 16px; margin: 20px 16px 8px; } \
.meta { font-size: 12px; color: #52606d; } \
.tags { margin-top: 6px; } \
.tag { display: inline-block; font-size: 10px; background: #e3f8ff; color: #0b69a3; \
       border-radius: 10px; padding: 2px 8px; margin-right: 4px; } \
.card { margin: 8px 16px; border: 1px solid #e4e7eb; border-radius: 8px; overflow: hidden; } \
.card img { height: 120px; } \
.card .body { padding: 10px; } \
.card .name { font-size: 14px; font-weight: 600; } \
.card .sub { font-size: 11px; color: #52606d; margin-top: 2px; } \
.rating { float: right; font-size: 11px; font-weight: 700; color: #f59f00; } \
.phrases { font-size: 11px; color: #3e4c59; margin-top: 6px; } \
.day-num { font-size: 11px; font-weight: 700; color: #0b69a3; } \
.desc { font-size: 12px; margin-top: 4px; line-height: 1.45; } \
.more { margin: 4px 16px 8px; font-size: 12px; color: #52606d; font-style: italic; } \
.info { margin: 8px 16px; font-size: 12px; line-height: 1.5; } \
.info b { color: #323f4b; } \
.block { margin: 8px 16px; font-size: 12px; line-height: 1.5; } \
.gallery { display: flex; flex-wrap: wrap; gap: 4px; margin: 8px 16px; } \
.gallery img { width: 122px; height: 90px; }";

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full standalone HTML document for one itinerary.
pub fn render_itinerary_html(form: &ItineraryFormData, images: &ResolvedImages) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");

    render_hero(&mut html, form, &images.main);
    render_days(&mut html, form, images);
    render_hotels(&mut html, form, images);
    render_experiences(&mut html, form, images);
    render_practical_info(&mut html, form);
    render_text_blocks(&mut html, form);
    render_gallery(&mut html, images);

    html.push_str("</body></html>");
    html
}

fn render_hero(html: &mut String, form: &ItineraryFormData, main_image: &str) {
    let title = if form.title.trim().is_empty() {
        form.destination.trim()
    } else {
        form.title.trim()
    };

    html.push_str("<div class=\"hero\">");
    html.push_str(&format!("<img src=\"{}\">", html_escape(main_image)));
    html.push_str("<div class=\"overlay\">");
    html.push_str(&format!("<h1>{}</h1>", html_escape(title)));

    let meta: Vec<String> = [
        form.destination.as_str(),
        form.duration.as_str(),
        form.trip_type.as_str(),
        form.routing.as_str(),
        form.cost.as_str(),
    ]
    .iter()
    .filter(|v| !v.trim().is_empty())
    .map(|v| html_escape(v.trim()))
    .collect();
    if !meta.is_empty() {
        html.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" &middot; ")));
    }

    if !form.tags.is_empty() {
        html.push_str("<div class=\"tags\">");
        for tag in &form.tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", html_escape(tag)));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></div>");
}

fn render_days(html: &mut String, form: &ItineraryFormData, images: &ResolvedImages) {
    if form.day_wise_itinerary.is_empty() {
        return;
    }
    html.push_str("<h2>Day-wise Itinerary</h2>");
    for (idx, day) in form
        .day_wise_itinerary
        .iter()
        .take(MAX_INLINE_ENTRIES)
        .enumerate()
    {
        html.push_str("<div class=\"card\">");
        if let Some(src) = images.days.get(idx) {
            html.push_str(&format!("<img src=\"{}\">", html_escape(src)));
        }
        html.push_str("<div class=\"body\">");
        html.push_str(&format!("<div class=\"day-num\">Day {}</div>", day.day));
        html.push_str(&format!(
            "<div class=\"name\">{}</div>",
            html_escape(&day.title)
        ));
        if !day.description.trim().is_empty() {
            html.push_str(&format!(
                "<div class=\"desc\">{}</div>",
                html_escape(&day.description)
            ));
        }
        html.push_str("</div></div>");
    }
    push_more_chip(html, form.day_wise_itinerary.len());
}

fn render_hotels(html: &mut String, form: &ItineraryFormData, images: &ResolvedImages) {
    if form.hotels.is_empty() {
        return;
    }
    html.push_str("<h2>Hotels</h2>");
    for (idx, hotel) in form.hotels.iter().take(MAX_INLINE_ENTRIES).enumerate() {
        html.push_str("<div class=\"card\">");
        if let Some(src) = images.hotels.get(idx) {
            html.push_str(&format!("<img src=\"{}\">", html_escape(src)));
        }
        html.push_str("<div class=\"body\">");
        if hotel.rating > 0.0 {
            html.push_str(&format!("<span class=\"rating\">★ {:.1}</span>", hotel.rating));
        }
        html.push_str(&format!(
            "<div class=\"name\">{}</div>",
            html_escape(&hotel.name)
        ));
        let mut sub = Vec::new();
        if !hotel.city.trim().is_empty() {
            sub.push(html_escape(&hotel.city));
        }
        if hotel.nights > 0 {
            sub.push(format!(
                "{} night{}",
                hotel.nights,
                if hotel.nights == 1 { "" } else { "s" }
            ));
        }
        if !sub.is_empty() {
            html.push_str(&format!("<div class=\"sub\">{}</div>", sub.join(" &middot; ")));
        }
        if !hotel.phrases.is_empty() {
            let phrases: Vec<String> = hotel.phrases.iter().map(|p| html_escape(p)).collect();
            html.push_str(&format!(
                "<div class=\"phrases\">{}</div>",
                phrases.join(" &middot; ")
            ));
        }
        html.push_str("</div></div>");
    }
    push_more_chip(html, form.hotels.len());
}

fn render_experiences(html: &mut String, form: &ItineraryFormData, images: &ResolvedImages) {
    if form.experiences.is_empty() {
        return;
    }
    html.push_str("<h2>Experiences</h2>");
    for (idx, exp) in form.experiences.iter().take(MAX_INLINE_ENTRIES).enumerate() {
        html.push_str("<div class=\"card\">");
        if let Some(src) = images.experiences.get(idx) {
            html.push_str(&format!("<img src=\"{}\">", html_escape(src)));
        }
        html.push_str("<div class=\"body\">");
        html.push_str(&format!(
            "<div class=\"name\">{}</div>",
            html_escape(&exp.name)
        ));
        if !exp.category.trim().is_empty() {
            html.push_str(&format!(
                "<div class=\"sub\">{}</div>",
                html_escape(&exp.category)
            ));
        }
        if !exp.description.trim().is_empty() {
            html.push_str(&format!(
                "<div class=\"desc\">{}</div>",
                html_escape(&exp.description)
            ));
        }
        html.push_str("</div></div>");
    }
    push_more_chip(html, form.experiences.len());
}

fn render_practical_info(html: &mut String, form: &ItineraryFormData) {
    let info = &form.practical_info;
    if info.visa.trim().is_empty() && info.currency.trim().is_empty() && info.tips.is_empty() {
        return;
    }
    html.push_str("<h2>Practical Info</h2><div class=\"info\">");
    if !info.visa.trim().is_empty() {
        html.push_str(&format!("<div><b>Visa:</b> {}</div>", html_escape(&info.visa)));
    }
    if !info.currency.trim().is_empty() {
        html.push_str(&format!(
            "<div><b>Currency:</b> {}</div>",
            html_escape(&info.currency)
        ));
    }
    for tip in &info.tips {
        html.push_str(&format!("<div>&bull; {}</div>", html_escape(tip)));
    }
    html.push_str("</div>");
}

fn render_text_blocks(html: &mut String, form: &ItineraryFormData) {
    for (label, text) in [
        ("With Kids", form.with_kids.as_str()),
        ("With Family", form.with_family.as_str()),
        ("Offbeat", form.offbeat.as_str()),
    ] {
        if !text.trim().is_empty() {
            html.push_str(&format!("<h2>{label}</h2>"));
            html.push_str(&format!("<div class=\"block\">{}</div>", html_escape(text)));
        }
    }
}

fn render_gallery(html: &mut String, images: &ResolvedImages) {
    if images.gallery.is_empty() {
        return;
    }
    html.push_str("<h2>Gallery</h2><div class=\"gallery\">");
    for src in &images.gallery {
        html.push_str(&format!("<img src=\"{}\">", html_escape(src)));
    }
    html.push_str("</div>");
}

fn push_more_chip(html: &mut String, total: usize) {
    if total > MAX_INLINE_ENTRIES {
        html.push_str(&format!(
            "<div class=\"more\">+{} more</div>",
            total - MAX_INLINE_ENTRIES
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{DayEntry, Hotel};

    fn form_with_days(n: u32) -> ItineraryFormData {
        ItineraryFormData {
            title: "Ladakh Adventure".to_string(),
            destination: "Leh".to_string(),
            day_wise_itinerary: (1..=n)
                .map(|d| DayEntry {
                    day: d,
                    title: format!("Day {d} plan"),
                    description: "Explore".to_string(),
                    image: String::new(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"A & B's"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_renders_all_entries_when_at_most_four() {
        let html = render_itinerary_html(&form_with_days(4), &ResolvedImages::default());
        assert!(html.contains("Day 4 plan"));
        assert!(!html.contains("more</div>"));
    }

    #[test]
    fn test_truncates_overflow_with_more_chip() {
        let html = render_itinerary_html(&form_with_days(7), &ResolvedImages::default());
        assert!(html.contains("Day 4 plan"));
        assert!(!html.contains("Day 5 plan"));
        assert!(html.contains("+3 more"));
    }

    #[test]
    fn test_hotels_overflow_chip() {
        let form = ItineraryFormData {
            hotels: (0..6)
                .map(|i| Hotel {
                    name: format!("Hotel {i}"),
                    rating: 4.0,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let html = render_itinerary_html(&form, &ResolvedImages::default());
        assert!(html.contains("Hotel 3"));
        assert!(!html.contains("Hotel 4</div>"));
        assert!(html.contains("+2 more"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut form = form_with_days(1);
        form.title = "<script>alert(1)</script>".to_string();
        let html = render_itinerary_html(&form, &ResolvedImages::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_page_breaks_forced_off() {
        let html = render_itinerary_html(&form_with_days(1), &ResolvedImages::default());
        assert!(html.contains("page-break-inside: avoid"));
        assert!(html.contains("page-break-before: avoid"));
    }

    #[test]
    fn test_minimal_itinerary_renders() {
        // One day entry and zero hotels is a valid export.
        let html = render_itinerary_html(&form_with_days(1), &ResolvedImages::default());
        assert!(html.contains("Day-wise Itinerary"));
        assert!(!html.contains("<h2>Hotels</h2>"));
    }
}
