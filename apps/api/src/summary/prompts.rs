// Summary LLM prompt templates.

pub const SUMMARY_SYSTEM: &str = "\
You are a travel copywriter. \
Write one short, warm, factual paragraph summarizing a trip. \
Use only the details provided — never invent places, prices, or dates. \
Respond with plain text only: no markdown, no headings, no quotes.";

pub const SUMMARY_PROMPT: &str = r#"Write a 2-3 sentence summary paragraph for this trip.

DESTINATION: {destination}
ROUTING: {routing}
HIGHLIGHTS: {highlights}
DAY PLAN:
{days}

Return only the paragraph."#;
