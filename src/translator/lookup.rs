//! Dotted key lookup in nested dictionaries.

use serde_json::Value;

/// Resolves `path` in `dictionary` and returns the leaf text.
///
/// Every intermediate segment has to be an object (or an array indexed by
/// position) and the last segment has to hold a string. Touching a subtree
/// does not count as found.
#[must_use]
pub fn find_by_path<'a>(dictionary: &'a Value, path: &str, separator: &str) -> Option<&'a str> {
    path.split(separator)
        .try_fold(dictionary, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
            _ => None,
        })
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("meta.buttons.next", Some("Next"))]
    #[case("title", Some("Title"))]
    #[case("list.1", Some("second"))]
    #[case("meta.buttons", None)]
    #[case("meta.buttons.next.deeper", None)]
    #[case("meta.missing", None)]
    #[case("meta..buttons.next", None)]
    #[case("count", None)]
    #[case("", None)]
    fn test_find_by_path(#[case] path: &str, #[case] expected: Option<&str>) {
        let dictionary = json!({
            "title": "Title",
            "count": 3,
            "list": ["first", "second"],
            "meta": { "buttons": { "next": "Next", "back": "Back" } }
        });

        assert_eq!(find_by_path(&dictionary, path, "."), expected);
    }
}
