// Extraction LLM prompt templates.
// All prompts for the extraction module are defined here.

pub const EXTRACT_SYSTEM: &str = "\
You are a precise travel-itinerary extractor. \
Parse travel text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Fill a field ONLY when the source text states it. \
When the text does not state a value, leave it blank ('' for strings, [] for arrays, 0 for numbers) — NEVER infer or invent.";

pub const EXTRACT_PROMPT: &str = r#"Extract a travel itinerary from the following text into a compact JSON object.

INPUT TEXT:
{input_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "title": "string",
  "destination": "string",
  "duration": "string, e.g. '5 days'",
  "routing": "string, e.g. 'Delhi -> Leh -> Nubra'",
  "tripType": "string, e.g. 'adventure' | 'family' | 'honeymoon' | ''",
  "cost": "string, e.g. 'USD 1200 per person'",
  "tags": ["string"],
  "mainImage": "",
  "hotels": [{"name": "string", "city": "string", "nights": number, "rating": 0, "image": "", "phrases": [], "apiSourced": false}],
  "experiences": [{"name": "string", "category": "string", "description": "string", "image": ""}],
  "dayWiseItinerary": [{"day": number (1-based), "title": "string", "description": "string", "image": ""}],
  "galleryImages": [],
  "practicalInfo": {"visa": "string", "currency": "string", "tips": ["string"]},
  "withKids": "string",
  "withFamily": "string",
  "offbeat": "string"
}

RULES:
1. Day numbers start at 1 and follow the order the text describes.
2. Hotel ratings stay 0 unless the text states a rating; never guess one.
3. Image fields are always "" — images are resolved by a separate service.
4. Copy names and places as written; do not translate or expand them.
5. Return ONLY the JSON object — nothing else, no code fences."#;
