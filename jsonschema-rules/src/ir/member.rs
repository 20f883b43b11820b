//! Generated member IR definitions.
//!
//! This module defines the handles rules operate on: the classes, methods
//! and fields of the code being generated. Every member carries a
//! documentation comment; only fields carry annotations.

use serde::{Deserialize, Serialize};

use super::annotation::Annotation;
use super::javadoc::Javadoc;

/// A member of the generated code model.
///
/// The variant is fixed when the member is built, so rules never need to
/// inspect the runtime type of a handle to decide what it may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratedMember {
    /// A generated class or interface
    Class(ClassDecl),

    /// A generated method (accessor, builder, etc.)
    Method(MethodDecl),

    /// A generated field
    Field(FieldDecl),
}

impl GeneratedMember {
    /// Create a class member.
    pub fn class(name: impl Into<String>) -> Self {
        GeneratedMember::Class(ClassDecl::new(name))
    }

    /// Create a method member.
    pub fn method(name: impl Into<String>) -> Self {
        GeneratedMember::Method(MethodDecl::new(name))
    }

    /// Create a field member.
    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        GeneratedMember::Field(FieldDecl::new(name, type_name))
    }

    /// Member name as it appears in the generated source.
    pub fn name(&self) -> &str {
        match self {
            GeneratedMember::Class(c) => &c.name,
            GeneratedMember::Method(m) => &m.name,
            GeneratedMember::Field(f) => &f.name,
        }
    }

    /// Whether this member is a field.
    pub fn is_field(&self) -> bool {
        matches!(self, GeneratedMember::Field(_))
    }

    /// The member's documentation comment.
    pub fn javadoc(&self) -> &Javadoc {
        match self {
            GeneratedMember::Class(c) => &c.javadoc,
            GeneratedMember::Method(m) => &m.javadoc,
            GeneratedMember::Field(f) => &f.javadoc,
        }
    }

    /// Mutable access to the member's documentation comment.
    pub fn javadoc_mut(&mut self) -> &mut Javadoc {
        match self {
            GeneratedMember::Class(c) => &mut c.javadoc,
            GeneratedMember::Method(m) => &mut m.javadoc,
            GeneratedMember::Field(f) => &mut f.javadoc,
        }
    }

    /// The field behind this handle, if it is one.
    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            GeneratedMember::Field(f) => Some(f),
            _ => None,
        }
    }

    /// Mutable access to the field behind this handle, if it is one.
    pub fn as_field_mut(&mut self) -> Option<&mut FieldDecl> {
        match self {
            GeneratedMember::Field(f) => Some(f),
            _ => None,
        }
    }

    /// Annotations on this member. Always empty for non-fields.
    pub fn annotations(&self) -> &[Annotation] {
        self.as_field().map(|f| f.annotations()).unwrap_or(&[])
    }
}

/// Class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name
    pub name: String,

    /// Class documentation
    #[serde(default)]
    pub javadoc: Javadoc,
}

impl ClassDecl {
    /// Create a new class declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            javadoc: Javadoc::default(),
        }
    }

    /// Set the documentation comment.
    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = javadoc;
        self
    }
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name
    pub name: String,

    /// Method documentation
    #[serde(default)]
    pub javadoc: Javadoc,
}

impl MethodDecl {
    /// Create a new method declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            javadoc: Javadoc::default(),
        }
    }

    /// Set the documentation comment.
    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = javadoc;
        self
    }
}

/// Field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name
    pub name: String,

    /// Declared type as written in the generated source (e.g. `String`)
    pub type_name: String,

    /// Field documentation
    #[serde(default)]
    pub javadoc: Javadoc,

    /// Annotations in attach order, without duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<Annotation>,
}

impl FieldDecl {
    /// Create a new field declaration.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            javadoc: Javadoc::default(),
            annotations: Vec::new(),
        }
    }

    /// Set the documentation comment.
    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = javadoc;
        self
    }

    /// Attach an annotation.
    ///
    /// Returns `false` if the field already carried it. A field never holds
    /// the same annotation twice.
    pub fn annotate(&mut self, annotation: Annotation) -> bool {
        if self.has_annotation(annotation) {
            return false;
        }
        self.annotations.push(annotation);
        true
    }

    /// Check whether the field carries the given annotation.
    pub fn has_annotation(&self, annotation: Annotation) -> bool {
        self.annotations.contains(&annotation)
    }

    /// Annotations in attach order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl From<ClassDecl> for GeneratedMember {
    fn from(decl: ClassDecl) -> Self {
        GeneratedMember::Class(decl)
    }
}

impl From<MethodDecl> for GeneratedMember {
    fn from(decl: MethodDecl) -> Self {
        GeneratedMember::Method(decl)
    }
}

impl From<FieldDecl> for GeneratedMember {
    fn from(decl: FieldDecl) -> Self {
        GeneratedMember::Field(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_constructors() {
        let class = GeneratedMember::class("User");
        let method = GeneratedMember::method("getEmail");
        let field = GeneratedMember::field("email", "String");

        assert_eq!(class.name(), "User");
        assert_eq!(method.name(), "getEmail");
        assert_eq!(field.name(), "email");

        assert!(!class.is_field());
        assert!(!method.is_field());
        assert!(field.is_field());
    }

    #[test]
    fn test_javadoc_mut_reaches_every_variant() {
        for mut member in [
            GeneratedMember::class("User"),
            GeneratedMember::method("getEmail"),
            GeneratedMember::field("email", "String"),
        ] {
            member.javadoc_mut().append("note");
            assert_eq!(member.javadoc().text(), "note");
        }
    }

    #[test]
    fn test_field_annotate_deduplicates() {
        let mut field = FieldDecl::new("email", "String");
        assert!(field.annotate(Annotation::NotNull));
        assert!(field.annotate(Annotation::Nonnull));
        assert!(!field.annotate(Annotation::NotNull));

        assert_eq!(
            field.annotations(),
            &[Annotation::NotNull, Annotation::Nonnull]
        );
        assert!(field.has_annotation(Annotation::Nonnull));
        assert!(!field.has_annotation(Annotation::Nullable));
    }

    #[test]
    fn test_non_field_has_no_annotations() {
        let mut class = GeneratedMember::class("User");
        assert!(class.as_field_mut().is_none());
        assert!(class.annotations().is_empty());
    }

    #[test]
    fn test_from_decl() {
        let member: GeneratedMember = FieldDecl::new("id", "Long")
            .with_javadoc(Javadoc::with_description("Identifier"))
            .into();
        assert!(member.is_field());
        assert_eq!(member.javadoc().text(), "Identifier");

        let member: GeneratedMember = ClassDecl::new("User").into();
        assert!(matches!(member, GeneratedMember::Class(_)));
    }

    #[test]
    fn test_member_serialization_is_tagged() {
        let member = GeneratedMember::class("User");
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["kind"], "class");
        assert_eq!(json["name"], "User");
    }
}
