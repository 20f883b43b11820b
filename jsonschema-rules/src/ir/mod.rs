//! Intermediate Representation (IR) module.
//!
//! This module defines the generated-code model that schema rules decorate:
//! members, their documentation comments, and the annotations fields carry.
//! Rendering the model to source text is left to the code model consumer.

pub mod annotation;
pub mod javadoc;
pub mod member;

pub use annotation::Annotation;
pub use javadoc::Javadoc;
pub use member::{ClassDecl, FieldDecl, GeneratedMember, MethodDecl};
