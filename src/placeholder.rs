//! `{{param}}` placeholder scanning and rendering.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{
    Captures,
    Regex,
};
use serde_json::{
    Map,
    Value,
};

/// Parameter values substituted into a template, keyed by placeholder name.
pub type Params = Map<String, Value>;

/// Lazy `{{ ... }}` match up to the first closing `}}`.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

/// Returns the trimmed placeholder names of `text` from left to right.
///
/// `None` means the text has no placeholder syntax at all, which is distinct
/// from an empty list.
///
/// # Examples
/// ```
/// use t9n::placeholder::extract_params;
///
/// assert_eq!(extract_params("test this {{ param }}"), Some(vec!["param".to_string()]));
/// assert_eq!(extract_params("no params"), None);
/// ```
#[must_use]
pub fn extract_params(text: &str) -> Option<Vec<String>> {
    let params: Vec<String> = PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim().to_string())
        .collect();

    if params.is_empty() { None } else { Some(params) }
}

/// Number of placeholders in `text`, `0` when there are none.
#[must_use]
pub fn count_params(text: &str) -> usize {
    PLACEHOLDER.find_iter(text).count()
}

/// Replaces every placeholder with its value from `params`.
///
/// Strings are inserted verbatim, numbers and booleans as their text. A
/// placeholder without a value renders as an empty string.
#[must_use]
pub fn render_template<'a>(template: &'a str, params: &Params) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let name = caps.get(1).map_or("", |inner| inner.as_str().trim());
        params.get(name).map(display_value).unwrap_or_default()
    })
}

/// Text inserted for a parameter value.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
