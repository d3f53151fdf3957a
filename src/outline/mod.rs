//! Marker-driven code outline
//!
//! Builds a flat, line-addressed outline from the `#pragma region` /
//! `#pragma endregion` marker convention and C++ access specifiers.
//!
//! ```text
//! document text → scan (OutlineBuilder) → Vec<Entry> → OutlineIndex::replace_all
//!                   └─ classify (tag, description) → (RegionKind, display text)
//! ```
//!
//! Scanning and classification are pure and synchronous. Threading and
//! cancellation live in [`crate::runtime`] and [`crate::cancel`].

mod classify;
mod index;
mod scan;
pub mod style;

use serde::{Deserialize, Serialize};

pub use classify::{classify, Classification, CONTAINER_TAGS, SINGULAR_TAGS};
pub use index::{focus_window, OutlineIndex};
pub use scan::{lines, scan, scan_cancellable, scan_while, OutlineBuilder, ScanState};

/// Deepest indent an entry is stored with; deeper nesting collapses onto it
pub const MAX_INDENT_LEVEL: u8 = 4;

/// Canonical structural category of an outline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Unrecognized marker tag
    None,

    // === Containers ===
    Headers,
    Meta,
    Usings,
    Macros,
    ObjectLikeMacros,
    FunctionLikeMacros,
    Friends,
    Components,
    Concepts,
    Classes,
    Structs,
    Unions,
    Stores,
    Members,
    Properties,
    Fields,
    Enums,
    EnumsUnscoped,
    Delegates,
    Setters,
    Getters,
    Overrides,
    Specials,
    Constructors,
    Methods,
    Operators,
    Conversions,
    Functions,
    Events,

    // === Named items ===
    Namespace,
    Using,
    Macro,
    ObjectLikeMacro,
    FunctionLikeMacro,
    Friend,
    Component,
    Concept,
    Class,
    Struct,
    Union,
    Store,
    Member,
    Property,
    Field,
    /// `enum class` / `enum struct`
    Enum,
    /// plain `enum`
    EnumUnscoped,
    Delegate,
    Setter,
    Getter,
    Override,
    Special,
    Constructor,
    Method,
    Operator,
    Conversion,
    Function,
    Event,

    // === Access ===
    Public,
    Protected,
    Private,
}

impl RegionKind {
    /// Whether this kind groups members (emitted with a fixed label)
    pub fn is_container(&self) -> bool {
        self.container_label().is_some()
    }

    /// Whether this kind was produced by an access specifier
    pub fn is_access(&self) -> bool {
        matches!(
            self,
            RegionKind::Public | RegionKind::Protected | RegionKind::Private
        )
    }

    /// Fixed label of a container kind
    pub fn container_label(&self) -> Option<&'static str> {
        let label = match self {
            RegionKind::Headers => "Headers",
            RegionKind::Meta => "Meta",
            RegionKind::Usings => "Usings",
            RegionKind::Macros => "Macros",
            RegionKind::ObjectLikeMacros => "Object-like macros",
            RegionKind::FunctionLikeMacros => "Function-like macros",
            RegionKind::Friends => "Friends",
            RegionKind::Components => "Components",
            RegionKind::Concepts => "Concepts",
            RegionKind::Classes => "Classes",
            RegionKind::Structs => "Structs",
            RegionKind::Unions => "Unions",
            RegionKind::Stores => "Stores",
            RegionKind::Members => "Members",
            RegionKind::Properties => "Properties",
            RegionKind::Fields => "Fields",
            RegionKind::Enums => "Enums",
            RegionKind::EnumsUnscoped => "Enums (unscoped)",
            RegionKind::Delegates => "Delegates",
            RegionKind::Setters => "Setters",
            RegionKind::Getters => "Getters",
            RegionKind::Overrides => "Overrides",
            RegionKind::Specials => "Specials",
            RegionKind::Constructors => "Constructors",
            RegionKind::Methods => "Methods",
            RegionKind::Operators => "Operators",
            RegionKind::Conversions => "Conversions",
            RegionKind::Functions => "Functions",
            RegionKind::Events => "Events",
            _ => return None,
        };
        Some(label)
    }

    /// Access kind for an access level (`None` has no kind)
    pub fn from_access(access: AccessLevel) -> Option<Self> {
        match access {
            AccessLevel::None => None,
            AccessLevel::Public => Some(RegionKind::Public),
            AccessLevel::Protected => Some(RegionKind::Protected),
            AccessLevel::Private => Some(RegionKind::Private),
        }
    }
}

/// Member access level in force at some point of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    None,
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    /// Parse an access keyword, ignoring ASCII case
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("public") {
            Some(AccessLevel::Public)
        } else if word.eq_ignore_ascii_case("protected") {
            Some(AccessLevel::Protected)
        } else if word.eq_ignore_ascii_case("private") {
            Some(AccessLevel::Private)
        } else {
            None
        }
    }
}

/// One row of the outline, keyed by the document line it starts at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// 1-based document line
    pub line_number: usize,
    pub kind: RegionKind,
    /// Container label, item name, raw marker text for `None`, empty for access kinds
    pub display_text: String,
    /// Visual depth, always within `0..=MAX_INDENT_LEVEL`
    pub indent_level: u8,
    /// Access level in force when the entry was created
    pub access: AccessLevel,
}

impl Entry {
    /// Create an entry, clamping the raw scanner depth into the stored range
    pub fn new(
        line_number: usize,
        kind: RegionKind,
        display_text: impl Into<String>,
        raw_indent: i64,
        access: AccessLevel,
    ) -> Self {
        Self {
            line_number,
            kind,
            display_text: display_text.into(),
            indent_level: clamp_indent(raw_indent),
            access,
        }
    }
}

/// Clamp a scanner depth (which may be negative or deep) to the stored range
pub fn clamp_indent(raw: i64) -> u8 {
    raw.clamp(0, MAX_INDENT_LEVEL as i64) as u8
}
