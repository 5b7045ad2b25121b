use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,;]\s*").expect("separator pattern is valid"));

/// Flattens `-i "eggs, milk" -i flour` into single entries. Blank pieces are dropped.
pub fn split_ingredients(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| SEPARATOR.split(arg))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
