//! Keyword tables used to recognize style and weight tokens in file names.

use std::fmt;

/// CSS `font-style` keywords.
pub const STYLE_KEYWORDS: &[FontStyle] = &[FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique];

/// CSS `font-weight` keywords, including the numeric forms.
pub const WEIGHT_KEYWORDS: &[&str] = &[
    "normal", "bold", "bolder", "lighter", "100", "200", "300", "400", "500", "600", "700",
    "800", "900",
];

/// Descriptive weight names and their numeric CSS weight.
pub const WEIGHT_NAMES: &[(&str, u16)] = &[
    ("thin", 100),
    ("hairline", 100),
    ("extralight", 200),
    ("ultralight", 200),
    ("light", 300),
    ("normal", 400),
    ("regular", 400),
    ("book", 400),
    ("medium", 500),
    ("semibold", 600),
    ("demibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("black", 900),
    ("heavy", 900),
];

/// Font style recognized from a style keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Look up a lower-cased token in [`STYLE_KEYWORDS`].
    pub fn from_keyword(token: &str) -> Option<Self> {
        STYLE_KEYWORDS.iter().copied().find(|style| style.as_str() == token)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font weight recognized either through [`WEIGHT_NAMES`] or [`WEIGHT_KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Resolved from a descriptive name such as `semibold`.
    Numeric(u16),
    /// A CSS weight keyword, kept verbatim (`bolder`, `300`, ...).
    Keyword(&'static str),
}

impl FontWeight {
    /// Numeric weight for a descriptive name.
    pub fn from_name(token: &str) -> Option<Self> {
        WEIGHT_NAMES
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, value)| FontWeight::Numeric(value))
    }

    /// Keyword weight, borrowing the table's static string.
    pub fn from_keyword(token: &str) -> Option<Self> {
        WEIGHT_KEYWORDS
            .iter()
            .copied()
            .find(|keyword| *keyword == token)
            .map(FontWeight::Keyword)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(value) => write!(f, "{value}"),
            FontWeight::Keyword(keyword) => f.write_str(keyword),
        }
    }
}
