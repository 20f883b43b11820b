//! Documentation comment IR.
//!
//! A [`Javadoc`] is an ordered list of text parts. Rules append parts as
//! they run; the code model joins them when rendering the comment block.

use serde::{Deserialize, Serialize};

/// Documentation comment attached to a generated member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Javadoc {
    parts: Vec<String>,
}

impl Javadoc {
    /// Create an empty comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comment from a leading description.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            parts: vec![description.into()],
        }
    }

    /// Append a text part to the end of the comment.
    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.parts.push(text.into());
        self
    }

    /// The text parts in append order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The full comment text.
    pub fn text(&self) -> String {
        self.parts.concat()
    }

    /// Check if the comment has no text.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.is_empty())
    }
}
