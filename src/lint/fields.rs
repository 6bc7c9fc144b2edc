//! Declarative frontmatter field table.
//!
//! Each known field maps to a [`FieldRequirement`]. A field counts as present
//! when some frontmatter line matches `^<field>:\s*.+$`. The whitespace may
//! span line breaks, so a key followed by an indented block list counts as
//! present, while a key with nothing after it anywhere is missing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Root-level `tags:` with the list on following lines (legacy note format).
static BARE_TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^tags:\s*$").expect("BARE_TAGS_REGEX must compile"));

/// How a field is treated by the frontmatter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRequirement {
    /// Absence is an error.
    Required,
    /// Absence is a warning.
    Recommended,
    /// Presence is an error.
    Deprecated,
}

impl fmt::Display for FieldRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldRequirement::Required => "required",
            FieldRequirement::Recommended => "recommended",
            FieldRequirement::Deprecated => "deprecated",
        };
        f.write_str(label)
    }
}

/// One entry of the field table with its compiled presence pattern.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub requirement: FieldRequirement,
    pattern: Regex,
}

impl FieldSpec {
    /// Build a spec. Returns `None` only if the name yields an unusable
    /// pattern, which cannot happen for escaped input.
    pub fn new(name: impl Into<String>, requirement: FieldRequirement) -> Option<Self> {
        let name = name.into();
        let pattern = Regex::new(&format!(r"(?m)^{}:\s*.+$", regex::escape(&name))).ok()?;
        Some(Self {
            name,
            requirement,
            pattern,
        })
    }

    /// Whether the field appears with a value in `frontmatter`.
    pub fn is_present(&self, frontmatter: &str) -> bool {
        self.pattern.is_match(frontmatter)
    }
}

/// Ordered table of known frontmatter fields.
#[derive(Debug, Clone)]
pub struct FieldTable {
    fields: Vec<FieldSpec>,
}

pub const DEFAULT_REQUIRED: &[&str] = &["title", "description", "category", "audience", "status"];
pub const DEFAULT_RECOMMENDED: &[&str] = &["difficulty", "last_updated", "tags"];
pub const DEFAULT_DEPRECATED: &[&str] = &["created", "related"];

impl FieldTable {
    /// Build a table from the three field lists, in that order.
    pub fn from_lists<S: AsRef<str>>(required: &[S], recommended: &[S], deprecated: &[S]) -> Self {
        let groups = [
            (required, FieldRequirement::Required),
            (recommended, FieldRequirement::Recommended),
            (deprecated, FieldRequirement::Deprecated),
        ];
        let fields = groups
            .into_iter()
            .flat_map(|(names, requirement)| {
                names
                    .iter()
                    .filter_map(move |name| FieldSpec::new(name.as_ref(), requirement))
            })
            .collect();
        Self { fields }
    }

    /// The default migration schema.
    pub fn with_defaults() -> Self {
        Self::from_lists(DEFAULT_REQUIRED, DEFAULT_RECOMMENDED, DEFAULT_DEPRECATED)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Fields with the given requirement, in table order.
    pub fn with_requirement(
        &self,
        requirement: FieldRequirement,
    ) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(move |f| f.requirement == requirement)
    }

    /// Whether any deprecated field is present with a value.
    pub fn has_deprecated_field(&self, frontmatter: &str) -> bool {
        self.with_requirement(FieldRequirement::Deprecated)
            .any(|f| f.is_present(frontmatter))
    }

    /// Detect legacy (pre-migration) frontmatter markers.
    pub fn legacy_signals(&self, frontmatter: &str) -> LegacySignals {
        let deprecated_keys = self
            .with_requirement(FieldRequirement::Deprecated)
            .filter(|f| frontmatter.contains(&format!("{}:", f.name)))
            .map(|f| f.name.clone())
            .collect();

        LegacySignals {
            bare_tags: BARE_TAGS_REGEX.is_match(frontmatter),
            deprecated_keys,
            wikilinks: contains_wikilink(frontmatter),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Markers that identify frontmatter still in the old note-taking format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacySignals {
    /// `tags:` with no inline value.
    pub bare_tags: bool,
    /// Deprecated keys mentioned anywhere, even without a value.
    pub deprecated_keys: Vec<String>,
    /// `[[...]]` cross-reference syntax.
    pub wikilinks: bool,
}

impl LegacySignals {
    pub fn is_old_style(&self) -> bool {
        self.bare_tags || self.wikilinks || !self.deprecated_keys.is_empty()
    }
}

/// Whether `text` uses `[[...]]` cross-reference syntax.
pub fn contains_wikilink(text: &str) -> bool {
    text.contains("[[")
}
