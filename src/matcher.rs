//! Transform file name classification
//!
//! A transform file is named `<prefix>.<label>.config`, where the prefix
//! identifies the destination family (`app.`, `web.`, ...). The bare
//! destination name (`web.config`) is two segments and never classifies
//! as a transform.

use regex::Regex;
use std::sync::LazyLock;

/// `<word-prefix>.` is captured (prefix plus its dot), the middle label
/// allows word characters, hyphens and spaces, and the literal `.config`
/// suffix closes the name. Case-insensitive, matched anywhere in the name.
#[allow(clippy::expect_used)]
static TRANSFORM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+\.)[\w\- ]+\.config").expect("transform name pattern is valid")
});

/// Classify a file name as a supported transform name.
///
/// Returns the destination prefix (including its trailing dot, in the
/// input's original casing) when the name follows the transform
/// convention, `None` otherwise.
///
/// # Examples
///
/// ```
/// assert_eq!(classify("app.Release.config"), Some("app."));
/// assert_eq!(classify("web.config"), None);
/// ```
pub fn classify(file_name: &str) -> Option<&str> {
    TRANSFORM_NAME
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|prefix| prefix.as_str())
}
