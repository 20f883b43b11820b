//! Rule trait definition.
//!
//! This module defines the `Rule` trait that every schema keyword rule
//! implements. A dispatcher walks the schema, picks the rule for each
//! keyword it meets, and threads the generated member through it.

use crate::config::GenerationConfig;
use crate::ir::GeneratedMember;
use crate::node::SchemaNode;

/// Inputs shared by every rule application besides the node and target.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Name of the schema property the keyword belongs to
    pub node_name: &'a str,

    /// The schema object containing the keyword, if any
    pub parent: Option<&'a SchemaNode>,

    /// Options for this generation run
    pub config: &'a GenerationConfig,
}

impl<'a> RuleContext<'a> {
    /// Create a context with no parent node.
    pub fn new(node_name: &'a str, config: &'a GenerationConfig) -> Self {
        Self {
            node_name,
            parent: None,
            config,
        }
    }

    /// Set the parent node.
    pub fn with_parent(mut self, parent: &'a SchemaNode) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Trait for schema keyword rules.
///
/// Rules are total: they decorate the target and hand it back, never fail.
/// The returned member is the authoritative updated handle.
pub trait Rule: Send + Sync {
    /// The schema keyword this rule handles (e.g. `"required"`).
    fn keyword(&self) -> &'static str;

    /// Apply the rule for `node` to `target`.
    fn apply(
        &self,
        node: &SchemaNode,
        target: GeneratedMember,
        ctx: &RuleContext<'_>,
    ) -> GeneratedMember;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_builder() {
        let config = GenerationConfig::default();
        let parent = SchemaNode::new(json!({ "type": "string" }));

        let ctx = RuleContext::new("email", &config);
        assert_eq!(ctx.node_name, "email");
        assert!(ctx.parent.is_none());

        let ctx = ctx.with_parent(&parent);
        assert_eq!(ctx.parent, Some(&parent));
    }
}
