//! Presentation table for outline rows
//!
//! One static row per [`RegionKind`]: how its label is chosen, which color the
//! label uses and which icon precedes it. Views look styles up here instead of
//! switching over kinds themselves.

use super::{Entry, RegionKind};

/// 24-bit label color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI truecolor foreground escape
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

pub const WHITE: Color = Color::rgb(224, 224, 224);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const DIM: Color = Color::rgb(96, 96, 96);
pub const PURPLE: Color = Color::rgb(176, 128, 224);
pub const BLUE: Color = Color::rgb(128, 176, 224);
pub const TURQUOISE: Color = Color::rgb(128, 224, 176);
pub const GREEN: Color = Color::rgb(176, 224, 128);
pub const YELLOW: Color = Color::rgb(224, 224, 128);
pub const ORANGE: Color = Color::rgb(224, 176, 128);
pub const RED: Color = Color::rgb(224, 128, 128);
pub const PINK: Color = Color::rgb(224, 128, 224);
pub const DARK_GREEN: Color = Color::rgb(128, 176, 96);
pub const DARK_YELLOW: Color = Color::rgb(152, 152, 96);
pub const DARK_RED: Color = Color::rgb(176, 128, 96);

/// Icon shape; the icon takes the label color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Blank,
    SquareFull,
    SquareDotted,
    CircleFull,
    CircleDotted,
    CircleSmall,
}

impl Icon {
    /// Single-cell glyph for terminal views
    pub fn glyph(&self) -> char {
        match self {
            Icon::Blank => ' ',
            Icon::SquareFull => '■',
            Icon::SquareDotted => '□',
            Icon::CircleFull => '●',
            Icon::CircleDotted => '○',
            Icon::CircleSmall => '•',
        }
    }
}

/// Where a row's visible label comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Fixed text regardless of the entry
    Fixed(&'static str),
    /// The entry's display text
    FromEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub label: Label,
    pub color: Color,
    pub icon: Icon,
}

const fn fixed(text: &'static str, color: Color, icon: Icon) -> KindStyle {
    KindStyle {
        label: Label::Fixed(text),
        color,
        icon,
    }
}

const fn named(color: Color, icon: Icon) -> KindStyle {
    KindStyle {
        label: Label::FromEntry,
        color,
        icon,
    }
}

/// Style for a kind
pub fn style_for(kind: RegionKind) -> KindStyle {
    use Icon::*;
    use RegionKind as K;

    match kind {
        K::None => named(WHITE, Blank),

        K::Headers => fixed("Headers", WHITE, SquareDotted),
        K::Meta => fixed("Meta", WHITE, SquareFull),
        K::Usings => fixed("Usings", GRAY, SquareFull),
        K::Macros => fixed("Macros", PURPLE, SquareFull),
        K::ObjectLikeMacros => fixed("Object-like macros", PURPLE, SquareFull),
        K::FunctionLikeMacros => fixed("Function-like macros", PURPLE, SquareDotted),
        K::Friends => fixed("Friends", BLUE, SquareFull),
        K::Components => fixed("Components", TURQUOISE, SquareFull),
        K::Concepts => fixed("Concepts", GREEN, SquareFull),
        K::Classes => fixed("Classes", GREEN, SquareDotted),
        K::Structs => fixed("Structs", GREEN, SquareDotted),
        K::Unions => fixed("Unions", GREEN, SquareDotted),
        K::Stores => fixed("Stores", YELLOW, SquareDotted),
        K::Members => fixed("Members", YELLOW, SquareFull),
        K::Properties => fixed("Properties", ORANGE, SquareFull),
        K::Fields => fixed("Fields", RED, SquareFull),
        K::Enums => fixed("Enums", RED, SquareDotted),
        K::EnumsUnscoped => fixed("Enums (unscoped)", RED, SquareDotted),
        K::Delegates => fixed("Delegates", PINK, SquareFull),
        K::Setters => fixed("Setters", PURPLE, CircleFull),
        K::Getters => fixed("Getters", BLUE, CircleFull),
        K::Overrides => fixed("Overrides", TURQUOISE, CircleFull),
        K::Specials => fixed("Specials", GREEN, CircleFull),
        K::Constructors => fixed("Constructors", GREEN, CircleDotted),
        K::Methods => fixed("Methods", YELLOW, CircleFull),
        K::Operators => fixed("Operators", ORANGE, CircleFull),
        K::Conversions => fixed("Conversions", ORANGE, CircleDotted),
        K::Functions => fixed("Functions", RED, CircleFull),
        K::Events => fixed("Events", PINK, CircleFull),

        K::Namespace => named(GRAY, SquareDotted),
        K::Using => named(GRAY, SquareFull),
        K::Macro | K::ObjectLikeMacro => named(PURPLE, SquareFull),
        K::FunctionLikeMacro => named(PURPLE, SquareDotted),
        K::Friend => named(BLUE, SquareFull),
        K::Component => named(TURQUOISE, SquareFull),
        K::Concept => named(GREEN, SquareFull),
        K::Class | K::Struct | K::Union => named(GREEN, SquareDotted),
        K::Store => named(YELLOW, SquareDotted),
        K::Member => named(YELLOW, SquareFull),
        K::Property => named(ORANGE, SquareFull),
        K::Field => named(RED, SquareFull),
        K::Enum | K::EnumUnscoped => named(RED, SquareDotted),
        K::Delegate => named(PINK, SquareFull),
        K::Setter => named(PURPLE, CircleFull),
        K::Getter => named(BLUE, CircleFull),
        K::Override => named(TURQUOISE, CircleFull),
        K::Special => named(GREEN, CircleFull),
        K::Constructor => named(GREEN, CircleDotted),
        K::Method => named(YELLOW, CircleFull),
        K::Operator => named(ORANGE, CircleFull),
        K::Conversion => named(ORANGE, CircleDotted),
        K::Function => named(RED, CircleFull),
        K::Event => named(PINK, CircleFull),

        K::Public => fixed("Public", DARK_GREEN, CircleSmall),
        K::Protected => fixed("Protected", DARK_YELLOW, CircleSmall),
        K::Private => fixed("Private", DARK_RED, CircleSmall),
    }
}

/// Visible label of an entry
pub fn label_for(entry: &Entry) -> &str {
    match style_for(entry.kind).label {
        Label::Fixed(text) => text,
        Label::FromEntry => &entry.display_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{AccessLevel, CONTAINER_TAGS};

    #[test]
    fn test_container_labels_match_classifier() {
        for (_, kind) in CONTAINER_TAGS {
            assert_eq!(
                style_for(*kind).label,
                Label::Fixed(kind.container_label().unwrap())
            );
        }
    }

    #[test]
    fn test_access_rows_have_fixed_label() {
        let entry = Entry::new(3, RegionKind::Protected, "", 1, AccessLevel::Protected);
        assert_eq!(label_for(&entry), "Protected");
    }

    #[test]
    fn test_named_rows_use_display_text() {
        let entry = Entry::new(3, RegionKind::Method, "Run", 1, AccessLevel::None);
        assert_eq!(label_for(&entry), "Run");
        assert_eq!(style_for(RegionKind::None).icon, Icon::Blank);
    }
}
