//! Annotation IR definitions.
//!
//! Annotations are markers attached to generated fields that downstream
//! tooling (bean validation, static nullness checkers) interprets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Annotation marker attached to a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Bean validation constraint: `@javax.validation.constraints.NotNull`
    NotNull,

    /// Static nullness hint: `@javax.annotation.Nonnull`
    Nonnull,

    /// Static nullness hint: `@javax.annotation.Nullable`
    Nullable,
}

impl Annotation {
    /// Fully qualified name of the annotation type.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            Annotation::NotNull => "javax.validation.constraints.NotNull",
            Annotation::Nonnull => "javax.annotation.Nonnull",
            Annotation::Nullable => "javax.annotation.Nullable",
        }
    }

    /// Simple (unqualified) name of the annotation type.
    pub fn simple_name(&self) -> &'static str {
        match self {
            Annotation::NotNull => "NotNull",
            Annotation::Nonnull => "Nonnull",
            Annotation::Nullable => "Nullable",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.simple_name())
    }
}
