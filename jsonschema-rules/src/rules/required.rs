//! The `"required"` keyword rule.
//!
//! Marks a generated member as required in its documentation and, for
//! fields, attaches validation and nullness annotations according to the
//! generation config:
//!
//! | required | `include_not_null_annotations` | `include_nullability_annotations` | field gets            |
//! |----------|--------------------------------|-----------------------------------|-----------------------|
//! | true     | true                           | -                                 | `@NotNull`            |
//! | true     | -                              | true                              | `@Nonnull`            |
//! | false    | -                              | true                              | `@Nullable`           |
//!
//! Required members of any kind get a `(Required)` line in their javadoc.
//! Nothing is written for members that are not required.

use std::fmt;
use std::sync::Arc;

use crate::config::GenerationConfig;
use crate::ir::{Annotation, FieldDecl, GeneratedMember};
use crate::node::SchemaNode;
use crate::rules::observer::{Branch, NoopObserver, RuleObserver};
use crate::rules::traits::{Rule, RuleContext};

/// Javadoc part appended to required members.
pub const REQUIRED_NOTE: &str = "\n(Required)";

/// Applies the `"required"` schema keyword.
#[derive(Clone)]
pub struct RequiredRule {
    observer: Arc<dyn RuleObserver>,
}

impl Default for RequiredRule {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequiredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredRule").finish_non_exhaustive()
    }
}

impl RequiredRule {
    /// Create a rule that reports to no observer.
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
        }
    }

    /// Create a rule that reports every branch it takes to `observer`.
    pub fn with_observer(observer: Arc<dyn RuleObserver>) -> Self {
        Self { observer }
    }

    /// Decorate `target` according to the `required` flag.
    ///
    /// Only [`GeneratedMember::Field`] targets receive annotations; other
    /// members are documented only. Applying twice appends the note twice
    /// but never duplicates an annotation.
    pub fn annotate(
        &self,
        required: bool,
        mut target: GeneratedMember,
        config: &GenerationConfig,
    ) -> GeneratedMember {
        if required {
            self.observer.observe(Branch::Required);
            target.javadoc_mut().append(REQUIRED_NOTE);

            if let Some(field) = target.as_field_mut() {
                if config.include_not_null_annotations {
                    self.attach(field, Annotation::NotNull, Branch::NotNullAnnotated);
                }
                if config.include_nullability_annotations {
                    self.attach(field, Annotation::Nonnull, Branch::NonnullAnnotated);
                }
            }
        } else {
            self.observer.observe(Branch::NotRequired);

            if let Some(field) = target.as_field_mut() {
                if config.include_nullability_annotations {
                    self.attach(field, Annotation::Nullable, Branch::NullableAnnotated);
                }
            }
        }

        target
    }

    fn attach(&self, field: &mut FieldDecl, annotation: Annotation, branch: Branch) {
        self.observer.observe(branch);
        if field.annotate(annotation) {
            tracing::trace!(
                field = %field.name,
                annotation = annotation.qualified_name(),
                "annotated field"
            );
        }
    }
}

impl Rule for RequiredRule {
    fn keyword(&self) -> &'static str {
        "required"
    }

    fn apply(
        &self,
        node: &SchemaNode,
        target: GeneratedMember,
        ctx: &RuleContext<'_>,
    ) -> GeneratedMember {
        let required = node.as_boolean();
        tracing::debug!(
            node = ctx.node_name,
            parent = ?ctx.parent.map(SchemaNode::value),
            required,
            field = target.is_field(),
            "applying required rule"
        );
        self.annotate(required, target, ctx.config)
    }
}
