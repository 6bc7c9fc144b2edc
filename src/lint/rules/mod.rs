//! Built-in lint rules.
//!
//! This module contains the document rules that come with wikilint.

pub mod breadcrumb;
pub mod frontmatter_fields;
pub mod heading_structure;

pub use breadcrumb::BreadcrumbRule;
pub use frontmatter_fields::FrontmatterFieldsRule;
pub use heading_structure::HeadingStructureRule;
