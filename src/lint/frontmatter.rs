//! Frontmatter extraction.
//!
//! A document may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "Setup"
//! status: active
//! ---
//!
//! [Home](/) > [Development](/Development/) > Setup
//! ```
//!
//! [`extract`] splits such a document into the block body and the rest.
//! A missing or unterminated block is a normal outcome, not an error.
//!
//! The block is never parsed as YAML. Field checks are line oriented, see
//! [`scalar`] and [`FieldTable`](super::fields::FieldTable).

/// The fence token on its own line.
pub const DELIMITER: &str = "---";

/// Result of splitting a document at its frontmatter fences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// Text strictly between the fences, or empty when there is no block.
    pub frontmatter: String,
    /// Everything after the closing fence, or the whole input when there is
    /// no block.
    pub remainder: String,
    /// 1-based line number of the closing fence, 0 when there is no block.
    pub end_line: usize,
}

impl Extracted {
    fn none(content: &str) -> Self {
        Self {
            frontmatter: String::new(),
            remainder: content.to_string(),
            end_line: 0,
        }
    }

    /// Whether a non-empty frontmatter block was found.
    pub fn has_frontmatter(&self) -> bool {
        !self.frontmatter.is_empty()
    }
}

/// Split `content` into frontmatter body and remainder.
///
/// # Example
///
/// ```
/// use wikilint::lint::frontmatter::extract;
///
/// let doc = "---\ntitle: Foo\n---\n# Foo";
/// let parts = extract(doc);
/// assert_eq!(parts.frontmatter, "title: Foo");
/// assert_eq!(parts.remainder, "# Foo");
/// assert_eq!(parts.end_line, 3);
/// ```
pub fn extract(content: &str) -> Extracted {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return Extracted::none(content);
    }

    match lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
    {
        Some((close, _)) => Extracted {
            frontmatter: lines[1..close].join("\n"),
            remainder: lines[close + 1..].join("\n"),
            end_line: close + 1,
        },
        None => Extracted::none(content),
    }
}

/// Raw text after `<key>:` on the first line that starts with it.
pub fn raw_value<'a>(frontmatter: &'a str, key: &str) -> Option<&'a str> {
    frontmatter
        .split('\n')
        .find_map(|line| line.strip_prefix(key)?.strip_prefix(':'))
}

/// Whether some line starts with `<key>:`, whatever follows.
pub fn has_key(frontmatter: &str, key: &str) -> bool {
    raw_value(frontmatter, key).is_some()
}

/// Scalar value of `key`: trimmed, with one layer of matching quotes removed.
///
/// Returns `None` when the key is absent or its value is empty.
pub fn scalar<'a>(frontmatter: &'a str, key: &str) -> Option<&'a str> {
    let value = raw_value(frontmatter, key)?.trim();
    let value = strip_quotes(value).trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
