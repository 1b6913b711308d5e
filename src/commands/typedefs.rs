//! `t9n typedefs`: TypeScript declarations of the translation keys

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Error;
use crate::input::folder::load_flat_file;
use crate::placeholder::extract_params;
use crate::types::FlatMap;

/// Banner at the top of generated declarations.
const HEADER: &str = "/*~ Type definitions for t9n\n *~ Definitions generated by: t9n typedefs */\n";

/// Renders the `TranslationArgs` union of every key in `reference`.
///
/// Keys without placeholders become `['key']`, keys with placeholders
/// `['key', { params: { name: string } }]`. Placeholder names repeated in
/// one text are listed once.
///
/// # Examples
/// ```
/// use t9n::commands::generate_types;
/// use t9n::types::FlatMap;
///
/// let mut reference = FlatMap::new();
/// reference.insert("title".to_string(), "Hello {{ name }}".to_string());
///
/// let types = generate_types(&reference);
/// assert!(types.contains("| ['title', { params: { name: string } }];"));
/// ```
#[must_use]
pub fn generate_types(reference: &FlatMap) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    if reference.is_empty() {
        out.push_str("export type TranslationArgs = never;\n");
        return out;
    }

    out.push_str("export type TranslationArgs =");
    for (key, text) in reference {
        let key = quote(key);
        let _ = match extract_params(text) {
            Some(params) => {
                let mut names: Vec<String> = Vec::with_capacity(params.len());
                for param in params {
                    if !names.contains(&param) {
                        names.push(param);
                    }
                }
                let fields = names
                    .iter()
                    .map(|name| format!("{}: string", property_name(name)))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(out, "\n  | [{key}, {{ params: {{ {fields} }} }}]")
            }
            None => write!(out, "\n  | [{key}]"),
        };
    }
    out.push_str(";\n");
    out
}

/// Reads a reference dictionary and renders its declarations.
///
/// # Errors
/// [`Error::Folder`] when the file cannot be read or parsed.
pub fn typedefs_from_file(input: &Path, separator: &str) -> Result<String, Error> {
    let reference = load_flat_file(input, separator)?;
    tracing::debug!(input = %input.display(), keys = reference.len(), "Generating typedefs");
    Ok(generate_types(&reference))
}

/// Single-quoted TypeScript string literal.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Bare identifier when valid, quoted otherwise.
fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier { name.to_string() } else { quote(name) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::flat_map;

    #[rstest]
    fn test_generate_types() {
        let reference = flat_map(&[
            ("pageOne.headline", "This is a headline"),
            ("pageTwo.description", "This is a description with {{ params }}!"),
            ("pageTwo.headline", "Another description {{ with }} {{two}} params!"),
        ]);

        let result = generate_types(&reference);

        assert_eq!(
            result,
            "/*~ Type definitions for t9n\n \
             *~ Definitions generated by: t9n typedefs */\n\
             \n\
             export type TranslationArgs =\n  \
             | ['pageOne.headline']\n  \
             | ['pageTwo.description', { params: { params: string } }]\n  \
             | ['pageTwo.headline', { params: { with: string, two: string } }];\n"
        );
    }

    #[rstest]
    fn test_generate_types_empty_reference() {
        let result = generate_types(&FlatMap::new());

        assert!(result.ends_with("\nexport type TranslationArgs = never;\n"));
    }

    #[rstest]
    fn test_generate_types_repeated_param() {
        let reference = flat_map(&[("a", "{{x}} and {{ x }} and {{y}}")]);

        let result = generate_types(&reference);

        assert!(result.contains("| ['a', { params: { x: string, y: string } }];"));
    }

    #[rstest]
    #[case("plain.key", "'plain.key'")]
    #[case("it's", r"'it\'s'")]
    #[case(r"back\slash", r"'back\\slash'")]
    fn test_quote(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(quote(text), expected);
    }

    #[rstest]
    #[case("name", "name")]
    #[case("$count_2", "$count_2")]
    #[case("first name", "'first name'")]
    #[case("2nd", "'2nd'")]
    #[case("", "''")]
    fn test_property_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(property_name(name), expected);
    }

    #[googletest::test]
    fn test_typedefs_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meta.json");
        fs::write(&path, r#"{"page": {"title": "Title"}}"#).unwrap();

        let result = typedefs_from_file(&path, ".");

        expect_that!(result, ok(contains_substring("| ['page.title'];")));
    }

    #[googletest::test]
    fn test_typedefs_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = typedefs_from_file(&temp_dir.path().join("meta.json"), ".");

        expect_that!(result.is_err(), eq(true));
    }
}
