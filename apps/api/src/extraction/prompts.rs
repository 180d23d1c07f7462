/// Entity recognition prompt template. Replace `{json_only}` and `{text}` before sending.
pub const ENTITY_PROMPT_TEMPLATE: &str = r#"You are a named-entity recognizer for CVs and résumés.

List the named entities that appear in the document below, in the order they first appear.
Use these labels only: PERSON, ORG, GPE, DATE.

Return a JSON object with this EXACT schema:
{
  "entities": [
    {"text": "Jane Doe", "label": "PERSON"}
  ]
}

Copy each entity's text exactly as written in the document. Do not invent entities.
{json_only}

DOCUMENT:
{text}"#;
