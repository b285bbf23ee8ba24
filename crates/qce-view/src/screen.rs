//! Query surface over a rendered tree.
//!
//! [`Screen`] answers the questions a user would ask of the page: is there a
//! top-level heading called X, is the text Y visible. Name and text matching
//! is case-insensitive.

use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::markup::Element;

/// A rendered tree ready to be queried.
#[derive(Debug, Clone)]
pub struct Screen {
    root: Element,
}

impl Screen {
    /// Render `root` into a queryable screen.
    pub fn render(root: Element) -> Self {
        Self { root }
    }

    /// The rendered root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All text on the screen in document order.
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    /// All headings of `level`, in document order.
    pub fn query_all_headings(&self, level: u8) -> Vec<&Element> {
        self.root
            .descendants()
            .into_iter()
            .filter(|el| el.tag.heading_level() == Some(level))
            .collect()
    }

    /// The single heading of `level` whose accessible name contains `name`.
    pub fn get_by_role_heading(&self, level: u8, name: &str) -> QueryResult<&Element> {
        if !(1..=6).contains(&level) {
            return Err(QueryError::InvalidHeadingLevel(level));
        }

        let wanted = normalize(name);
        let matches: Vec<&Element> = self
            .query_all_headings(level)
            .into_iter()
            .filter(|el| normalize(&el.accessible_name()).contains(&wanted))
            .collect();

        debug!(heading_level = level, heading = name, matches = matches.len(), "heading query");
        self.exactly_one(matches, || format!("a level {level} heading named \"{name}\""))
    }

    /// The single innermost element whose own text contains `pattern`.
    pub fn get_by_text(&self, pattern: &str) -> QueryResult<&Element> {
        let wanted = normalize(pattern);
        let matches: Vec<&Element> = self
            .root
            .descendants()
            .into_iter()
            .filter(|el| normalize(&el.own_text()).contains(&wanted))
            .collect();

        debug!(pattern, matches = matches.len(), "text query");
        self.exactly_one(matches, || format!("an element with text \"{pattern}\""))
    }

    fn exactly_one<'a>(
        &self,
        mut matches: Vec<&'a Element>,
        describe: impl FnOnce() -> String,
    ) -> QueryResult<&'a Element> {
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(QueryError::NotFound {
                query: describe(),
                tree: self.root.pretty(),
            }),
            count => Err(QueryError::Multiple {
                query: describe(),
                count,
                tree: self.root.pretty(),
            }),
        }
    }
}

/// Lowercase with whitespace collapsed.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
