//! # jsonschema-rules
//!
//! Schema keyword rules for a JSON-Schema-to-Java code generator.
//!
//! A generator walks a schema document and, for each keyword it meets,
//! hands the member it is generating to the matching [`Rule`]. Rules
//! decorate the member with documentation and annotations and return it.
//!
//! ## Architecture
//!
//! - [`ir`] - Generated member model (classes, methods, fields, javadoc, annotations)
//! - [`node`] - Parsed schema values and their coercions
//! - [`config`] - Generation options and TOML loading
//! - [`rules`] - The [`Rule`] trait, [`RequiredRule`] and rule observers
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use jsonschema_rules::{GeneratedMember, GenerationConfig, RequiredRule, Rule, RuleContext, SchemaNode};
//! use jsonschema_rules::ir::Annotation;
//!
//! let config = GenerationConfig::new().with_nullability_annotations(true);
//! let rule = RequiredRule::new();
//! let ctx = RuleContext::new("email", &config);
//!
//! let field = rule.apply(&SchemaNode::from(true), GeneratedMember::field("email", "String"), &ctx);
//!
//! assert!(field.javadoc().text().contains("(Required)"));
//! assert_eq!(field.annotations(), &[Annotation::Nonnull]);
//! ```

pub mod config;
pub mod error;
pub mod ir;
pub mod node;
pub mod rules;

// Re-export main types for convenience
pub use config::{Config, ConfigManager, GenerationConfig};
pub use error::{ConfigError, ConfigResult};
pub use ir::{Annotation, GeneratedMember, Javadoc};
pub use node::SchemaNode;
pub use rules::{BranchCoverage, RequiredRule, Rule, RuleContext, RuleObserver};
