//! The view of a document that rules check.

use std::path::Path;

use super::frontmatter::{self, Extracted};

/// A document split into frontmatter and body, plus its logical path.
///
/// The path is only used for comparisons (breadcrumb segments, report
/// listing); nothing here touches the file system.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub path: &'a Path,
    pub frontmatter: &'a str,
    pub remainder: &'a str,
    /// 1-based line of the closing fence, 0 without frontmatter.
    pub frontmatter_end_line: usize,
}

impl<'a> Document<'a> {
    pub fn new(path: &'a Path, extracted: &'a Extracted) -> Self {
        Self {
            path,
            frontmatter: &extracted.frontmatter,
            remainder: &extracted.remainder,
            frontmatter_end_line: extracted.end_line,
        }
    }

    /// The first `limit` lines of the body, paired with their 1-based line
    /// number in the original file.
    pub fn body_lines(&self, limit: usize) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        let offset = self.frontmatter_end_line;
        self.remainder
            .split('\n')
            .take(limit)
            .enumerate()
            .map(move |(i, line)| (offset + i + 1, line))
    }

    /// The frontmatter `title` scalar, if any.
    pub fn title(&self) -> Option<&'a str> {
        frontmatter::scalar(self.frontmatter, "title")
    }
}
