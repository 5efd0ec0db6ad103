//! Turns a free-form model reply into a [`MenuResponse`].
//!
//! The reply is expected to hold one JSON object, possibly inside a markdown code
//! fence. The object is located by taking everything from the first `{` to the last
//! `}`, so stray text before or after it is tolerated, but a reply holding several
//! objects, or a trailing `}` after the real one, produces a span that fails to parse.

use crate::error::MenuError;
use crate::models::{MealKey, MenuResponse};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON span pattern compiles"));

pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// The widest `{ ... }` span in `text`, newlines included.
pub fn find_json_span(text: &str) -> Option<&str> {
    JSON_SPAN.find(text).map(|m| m.as_str())
}

pub fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrites string-valued meals as line lists. Lists and absent keys are left alone.
pub fn coerce_meal_fields(object: &mut Map<String, Value>) {
    for key in MealKey::ALL {
        if let Some(Value::String(text)) = object.get(key.as_str()) {
            let items = split_lines(text).into_iter().map(Value::String).collect();
            object.insert(key.as_str().to_string(), Value::Array(items));
        }
    }
}

pub fn normalize_completion(raw: &str) -> Result<MenuResponse, MenuError> {
    let cleaned = strip_code_fences(raw);
    let span = find_json_span(&cleaned).ok_or(MenuError::NoJsonSpan)?;

    let mut object: Map<String, Value> =
        serde_json::from_str(span).map_err(MenuError::MalformedJson)?;
    coerce_meal_fields(&mut object);

    serde_json::from_value(Value::Object(object)).map_err(MenuError::SchemaMismatch)
}
