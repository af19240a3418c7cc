use glossa_core::LookupResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonLookup<'a> {
    query: &'a str,
    #[serde(flatten)]
    result: &'a LookupResult,
}

#[derive(Serialize)]
struct JsonSuggestion<'a> {
    word: &'a str,
    ratio: f64,
}

#[derive(Serialize)]
struct JsonSuggestions<'a> {
    query: &'a str,
    suggestions: Vec<JsonSuggestion<'a>>,
}

/// User-facing text for a lookup result
pub fn render_text(result: &LookupResult) -> String {
    match result {
        LookupResult::Found { definition } => definition.clone(),
        LookupResult::Suggested { word, definition } => {
            format!("Word not found. Did you mean '{word}'? Definition: {definition}")
        }
        LookupResult::NotFound => "Word not found.".to_string(),
    }
}

pub fn render_lookup(
    query: &str,
    result: &LookupResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string(&JsonLookup { query, result })?,
    })
}

pub fn render_suggestions(
    query: &str,
    suggestions: &[(String, f64)],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            if suggestions.is_empty() {
                return Ok(format!("No suggestions for '{query}'."));
            }
            let mut out = format!("Suggestions for '{query}':");
            for (word, ratio) in suggestions {
                out.push_str(&format!("\n  {word} ({ratio:.3})"));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let suggestions = suggestions
                .iter()
                .map(|(word, ratio)| JsonSuggestion {
                    word,
                    ratio: *ratio,
                })
                .collect();
            Ok(serde_json::to_string(&JsonSuggestions { query, suggestions })?)
        }
    }
}
