//! Region tag classification
//!
//! Maps the raw `<tag> <description>` pair of a `#pragma region` marker to a
//! canonical [`RegionKind`]. Historical spellings are rewritten first, then the
//! tag is looked up in two static tables.

use super::RegionKind;

/// Container tags and the kind each one opens
pub const CONTAINER_TAGS: &[(&str, RegionKind)] = &[
    ("Headers", RegionKind::Headers),
    ("Meta", RegionKind::Meta),
    ("Usings", RegionKind::Usings),
    ("Macros", RegionKind::Macros),
    ("Object-like macros", RegionKind::ObjectLikeMacros),
    ("Function-like macros", RegionKind::FunctionLikeMacros),
    ("Friends", RegionKind::Friends),
    ("Components", RegionKind::Components),
    ("Concepts", RegionKind::Concepts),
    ("Classes", RegionKind::Classes),
    ("Structs", RegionKind::Structs),
    ("Unions", RegionKind::Unions),
    ("Stores", RegionKind::Stores),
    ("Members", RegionKind::Members),
    ("Properties", RegionKind::Properties),
    ("Fields", RegionKind::Fields),
    ("Enums", RegionKind::Enums),
    ("Enums (unscoped)", RegionKind::EnumsUnscoped),
    ("Delegates", RegionKind::Delegates),
    ("Setters", RegionKind::Setters),
    ("Getters", RegionKind::Getters),
    ("Overrides", RegionKind::Overrides),
    ("Specials", RegionKind::Specials),
    ("Constructors", RegionKind::Constructors),
    ("Methods", RegionKind::Methods),
    ("Operators", RegionKind::Operators),
    ("Conversions", RegionKind::Conversions),
    ("Functions", RegionKind::Functions),
    ("Events", RegionKind::Events),
];

/// Singular tags; the entry is labelled with the marker's description
pub const SINGULAR_TAGS: &[(&str, RegionKind)] = &[
    ("namespace", RegionKind::Namespace),
    ("using", RegionKind::Using),
    ("macro", RegionKind::Macro),
    ("object-like macro", RegionKind::ObjectLikeMacro),
    ("function-like macro", RegionKind::FunctionLikeMacro),
    ("friend", RegionKind::Friend),
    ("component", RegionKind::Component),
    ("concept", RegionKind::Concept),
    ("class", RegionKind::Class),
    ("struct", RegionKind::Struct),
    ("union", RegionKind::Union),
    ("store", RegionKind::Store),
    ("member", RegionKind::Member),
    ("property", RegionKind::Property),
    ("field", RegionKind::Field),
    ("enum class", RegionKind::Enum),
    ("enum", RegionKind::EnumUnscoped),
    ("delegate", RegionKind::Delegate),
    ("setter", RegionKind::Setter),
    ("getter", RegionKind::Getter),
    ("override", RegionKind::Override),
    ("special", RegionKind::Special),
    ("constructor", RegionKind::Constructor),
    ("method", RegionKind::Method),
    ("operator", RegionKind::Operator),
    ("conversion", RegionKind::Conversion),
    ("function", RegionKind::Function),
    ("event", RegionKind::Event),
];

/// Two-word macro tags written as `<prefix> macros` / `<prefix> macro`
const COMPOUND_MACRO_TAGS: &[(&str, &str, &str)] = &[
    ("Object-like", "Object-like macros", "object-like macro"),
    ("object-like", "Object-like macros", "object-like macro"),
    ("Function-like", "Function-like macros", "function-like macro"),
    ("function-like", "Function-like macros", "function-like macro"),
];

/// Descriptions that turn an `Enum` tag into the scoped enums container
const ENUM_CONTAINER_DESCRIPTIONS: &[&str] = &["Classes", "classes", "Structs", "structs"];

/// Result of classifying one region marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: RegionKind,
    pub display_text: String,
    pub is_container: bool,
}

/// Classify a region tag and its free-text description
///
/// Total and pure: unknown tags classify as [`RegionKind::None`] with the raw
/// `"<tag> <description>"` as display text.
pub fn classify(tag: &str, description: &str) -> Classification {
    let (tag, description) = normalize(tag, description);

    if let Some(kind) = lookup(CONTAINER_TAGS, &tag) {
        return Classification {
            kind,
            display_text: tag,
            is_container: true,
        };
    }

    match lookup(SINGULAR_TAGS, &tag) {
        Some(kind) => Classification {
            kind,
            display_text: description,
            is_container: false,
        },
        None => Classification {
            kind: RegionKind::None,
            display_text: format!("{} {}", tag, description),
            is_container: false,
        },
    }
}

fn lookup(table: &[(&str, RegionKind)], tag: &str) -> Option<RegionKind> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, kind)| *kind)
}

/// Rewrite aliased tag spellings into canonical table keys
fn normalize(tag: &str, description: &str) -> (String, String) {
    if let Some(merged) = merge_compound_macro(tag, description) {
        return merged;
    }

    match tag {
        "enum" => {
            let scoped = strip_word(description, "class").or_else(|| strip_word(description, "struct"));
            match scoped {
                Some(rest) => ("enum class".to_string(), rest.to_string()),
                None => (tag.to_string(), description.to_string()),
            }
        }
        "Enums" => ("Enums (unscoped)".to_string(), description.to_string()),
        "Enum" if ENUM_CONTAINER_DESCRIPTIONS.contains(&description) => {
            ("Enums".to_string(), String::new())
        }
        _ => (tag.to_string(), description.to_string()),
    }
}

fn merge_compound_macro(tag: &str, description: &str) -> Option<(String, String)> {
    let (_, plural, singular) = COMPOUND_MACRO_TAGS
        .iter()
        .find(|(prefix, _, _)| *prefix == tag)?;

    if let Some(rest) = strip_word_or_whole(description, "macros") {
        return Some((plural.to_string(), rest.to_string()));
    }
    strip_word_or_whole(description, "macro").map(|rest| (singular.to_string(), rest.to_string()))
}

/// `"class Foo"` → `Some("Foo")`; requires the separating space
fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    text.strip_prefix(word)?.strip_prefix(' ')
}

/// Like [`strip_word`] but also accepts the bare word
fn strip_word_or_whole<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    if text == word {
        Some("")
    } else {
        strip_word(text, word)
    }
}
