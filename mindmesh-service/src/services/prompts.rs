//! Prompt templates for the generation capability.
//!
//! Caller data is embedded verbatim; the expected response shape is
//! asserted by instruction only, never enforced on the reply.

use serde_json::Value;

/// Instruction asking the model to organize free-form text into
/// categories and connections.
pub fn organize(text: &str) -> String {
    format!(
        concat!(
            "Organize these messy thoughts into clean bullet points and find relationships:\n",
            "{}\n",
            "Return JSON with:\n",
            "{{\n",
            "  \"categories\": [...],\n",
            "  \"connections\": [...]\n",
            "}}",
        ),
        text
    )
}

/// Instruction asking the model to turn structured data into a mind-map
/// node tree.
pub fn mindmap(structured: &Value) -> String {
    format!(
        concat!(
            "Convert this structured idea data into a mindmap node structure.\n",
            "{}\n",
            "Return JSON like:\n",
            "{{\n",
            "  \"root\": \"Main Idea\",\n",
            "  \"nodes\": [\n",
            "    {{ \"id\": 1, \"label\": \"...\", \"parent\": null }},\n",
            "    {{ \"id\": 2, \"label\": \"...\", \"parent\": 1 }}\n",
            "  ]\n",
            "}}",
        ),
        structured
    )
}
