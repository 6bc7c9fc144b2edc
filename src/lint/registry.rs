//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the lint rules in registration order and
//! provides methods for registering, retrieving, and iterating over them.
//! Issues are reported in that order, so a run over the same input always
//! produces the same output.

use super::fields::FieldTable;
use super::rule::{LintRule, RuleId};
use super::rules::{BreadcrumbRule, FrontmatterFieldsRule, HeadingStructureRule};
use crate::config::RuleSettings;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules at their default settings.
    ///
    /// Rules run frontmatter first, then breadcrumb, then heading structure.
    pub fn with_builtins() -> Self {
        Self::from_settings(&RuleSettings::default())
    }

    /// Create a registry with the built-in rules tuned by `settings`.
    pub fn from_settings(settings: &RuleSettings) -> Self {
        let fields = FieldTable::from_lists(
            &settings.required_fields,
            &settings.recommended_fields,
            &settings.deprecated_fields,
        );

        let mut registry = Self::new();
        registry.register(Box::new(FrontmatterFieldsRule::new(
            fields,
            settings.categories.clone(),
            settings.statuses.clone(),
        )));
        registry.register(Box::new(BreadcrumbRule::new(settings.breadcrumb_scan_lines)));
        registry.register(Box::new(HeadingStructureRule::new(
            settings.heading_scan_lines,
        )));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with an id that is already registered replaces the old one
    /// in its original position.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
