//! Plain-text sort keys for markdown cells.

use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link pattern is valid"));

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_*`~]").expect("emphasis pattern is valid"));

/// Strips link and emphasis syntax from a cell for use as a sort key.
///
/// `[label](url)` becomes `label`, and every `_`, `*`, backtick and `~` is
/// removed whether or not it is part of a valid pair. The result is only a
/// comparison key and is never displayed.
pub fn strip(cell: &str) -> String {
    let unlinked = LINK.replace_all(cell, "$1");
    EMPHASIS.replace_all(&unlinked, "").into_owned()
}
