//! Classifier tests
//!
//! Table-driven checks of every tag and every historical alias.

use pragma_outline::outline::{classify, RegionKind, CONTAINER_TAGS, SINGULAR_TAGS};

// ========================================================================
// Tables
// ========================================================================

#[test]
fn test_container_tags_classify_as_containers() {
    for (tag, kind) in CONTAINER_TAGS {
        // "Enums" is a historical spelling of the unscoped container
        let expected = if *tag == "Enums" {
            RegionKind::EnumsUnscoped
        } else {
            *kind
        };
        let c = classify(tag, "");
        assert_eq!(c.kind, expected, "tag {tag:?}");
        assert!(c.is_container, "tag {tag:?}");
        assert_eq!(Some(c.display_text.as_str()), expected.container_label());
    }
}

#[test]
fn test_singular_tags_take_description() {
    for (tag, kind) in SINGULAR_TAGS {
        let c = classify(tag, "Render");
        assert_eq!(c.kind, *kind, "tag {tag:?}");
        assert_eq!(c.display_text, "Render");
        assert!(!c.is_container);
    }
}

#[test]
fn test_tags_are_case_sensitive() {
    assert_eq!(classify("methods", "").kind, RegionKind::None);
    assert_eq!(classify("Method", "Run").kind, RegionKind::None);
    assert_eq!(classify("Method", "Run").display_text, "Method Run");
}

#[test]
fn test_unknown_tag_keeps_trailing_space() {
    let c = classify("Misc", "");
    assert_eq!(c.kind, RegionKind::None);
    assert_eq!(c.display_text, "Misc ");
    assert!(!c.is_container);
}

// ========================================================================
// Aliases
// ========================================================================

#[test]
fn test_enum_container_aliases() {
    for description in ["Classes", "classes", "Structs", "structs"] {
        let c = classify("Enum", description);
        assert_eq!(c.kind, RegionKind::Enums, "description {description:?}");
        assert_eq!(c.display_text, "Enums");
        assert!(c.is_container);
    }
    assert_eq!(classify("Enum", "Flags").kind, RegionKind::None);
}

#[test]
fn test_plain_enums_is_unscoped() {
    let c = classify("Enums", "");
    assert_eq!(c.kind, RegionKind::EnumsUnscoped);
    assert_eq!(c.display_text, "Enums (unscoped)");
}

#[test]
fn test_scoped_enum_rewrite() {
    assert_eq!(classify("enum", "class Color"), classify("enum class", "Color"));
    assert_eq!(classify("enum", "struct Mode").kind, RegionKind::Enum);
    assert_eq!(classify("enum", "struct Mode").display_text, "Mode");

    let plain = classify("enum", "Color");
    assert_eq!(plain.kind, RegionKind::EnumUnscoped);
    assert_eq!(plain.display_text, "Color");

    // "classic" is a name, not the `class` keyword
    assert_eq!(classify("enum", "classic").kind, RegionKind::EnumUnscoped);
}

#[test]
fn test_compound_macro_tags() {
    let c = classify("Object-like", "macros");
    assert_eq!(c.kind, RegionKind::ObjectLikeMacros);
    assert_eq!(c.display_text, "Object-like macros");

    let c = classify("object-like", "macro VERSION");
    assert_eq!(c.kind, RegionKind::ObjectLikeMacro);
    assert_eq!(c.display_text, "VERSION");

    let c = classify("Function-like", "macros");
    assert_eq!(c.kind, RegionKind::FunctionLikeMacros);

    let c = classify("function-like", "macro MAX");
    assert_eq!(c.kind, RegionKind::FunctionLikeMacro);
    assert_eq!(c.display_text, "MAX");
}

#[test]
fn test_compound_prefix_without_macro_word_is_unknown() {
    let c = classify("object-like", "thing");
    assert_eq!(c.kind, RegionKind::None);
    assert_eq!(c.display_text, "object-like thing");
}

#[test]
fn test_compound_prefix_casing_is_exact() {
    let c = classify("OBJECT-LIKE", "macros");
    assert_eq!(c.kind, RegionKind::None);
    assert_eq!(c.display_text, "OBJECT-LIKE macros");

    let c = classify("Function-Like", "macro CHECK");
    assert_eq!(c.kind, RegionKind::None);
}
