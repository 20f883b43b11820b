//! Property-based tests for the required rule.
//!
//! Properties tested:
//! - Required members gain exactly one `(Required)` part at the end
//! - Non-required members keep their documentation unchanged
//! - Non-field members are never annotated
//! - `@Nullable` never co-occurs with `@NotNull` or `@Nonnull`
//! - Field annotations are exactly the ones the flags call for
//! - Re-application never changes the annotation set

use proptest::prelude::*;

use jsonschema_rules::ir::{Annotation, ClassDecl, FieldDecl, Javadoc, MethodDecl};
use jsonschema_rules::{GeneratedMember, GenerationConfig, RequiredRule};

// =============================================================================
// Generators for property tests
// =============================================================================

fn arb_config() -> impl Strategy<Value = GenerationConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(not_null, nullability)| {
        GenerationConfig::new()
            .with_not_null_annotations(not_null)
            .with_nullability_annotations(nullability)
    })
}

fn arb_javadoc() -> impl Strategy<Value = Javadoc> {
    prop::collection::vec(".{0,24}", 0..4).prop_map(|parts| {
        let mut doc = Javadoc::new();
        for part in parts {
            doc.append(part);
        }
        doc
    })
}

fn arb_member() -> impl Strategy<Value = GeneratedMember> {
    ("[a-zA-Z][a-zA-Z0-9]{0,12}", arb_javadoc(), 0..3u8).prop_map(|(name, javadoc, kind)| {
        match kind {
            0 => GeneratedMember::from(ClassDecl::new(name).with_javadoc(javadoc)),
            1 => GeneratedMember::from(MethodDecl::new(name).with_javadoc(javadoc)),
            _ => GeneratedMember::from(FieldDecl::new(name, "String").with_javadoc(javadoc)),
        }
    })
}

fn arb_field() -> impl Strategy<Value = GeneratedMember> {
    ("[a-z][a-zA-Z0-9]{0,12}", arb_javadoc()).prop_map(|(name, javadoc)| {
        GeneratedMember::from(FieldDecl::new(name, "String").with_javadoc(javadoc))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_required_appends_single_note(member in arb_member(), config in arb_config()) {
        let before = member.javadoc().clone();
        let after = RequiredRule::new().annotate(true, member, &config);

        prop_assert_eq!(after.javadoc().parts().len(), before.parts().len() + 1);
        prop_assert_eq!(&after.javadoc().parts()[..before.parts().len()], before.parts());
        prop_assert_eq!(after.javadoc().parts().last().map(String::as_str), Some("\n(Required)"));
    }

    #[test]
    fn prop_not_required_keeps_docs(member in arb_member(), config in arb_config()) {
        let before = member.javadoc().clone();
        let after = RequiredRule::new().annotate(false, member, &config);

        prop_assert_eq!(after.javadoc(), &before);
    }

    #[test]
    fn prop_non_fields_never_annotated(
        member in arb_member(),
        required in any::<bool>(),
        config in arb_config(),
    ) {
        let was_field = member.is_field();
        let after = RequiredRule::new().annotate(required, member, &config);

        if !was_field {
            prop_assert!(after.annotations().is_empty());
        }
    }

    #[test]
    fn prop_field_annotations_match_flags(
        field in arb_field(),
        required in any::<bool>(),
        config in arb_config(),
    ) {
        let after = RequiredRule::new().annotate(required, field, &config);
        let has = |a: Annotation| after.annotations().contains(&a);

        prop_assert_eq!(has(Annotation::NotNull), required && config.include_not_null_annotations);
        prop_assert_eq!(has(Annotation::Nonnull), required && config.include_nullability_annotations);
        prop_assert_eq!(has(Annotation::Nullable), !required && config.include_nullability_annotations);
        prop_assert!(!(has(Annotation::Nullable) && (has(Annotation::NotNull) || has(Annotation::Nonnull))));
    }

    #[test]
    fn prop_reapplication_keeps_annotation_set(
        field in arb_field(),
        required in any::<bool>(),
        config in arb_config(),
    ) {
        let rule = RequiredRule::new();
        let once = rule.annotate(required, field, &config);
        let twice = rule.annotate(required, once.clone(), &config);

        prop_assert_eq!(once.annotations(), twice.annotations());
    }
}
