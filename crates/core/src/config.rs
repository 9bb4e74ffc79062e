//! Configuration constants and options for stylesheet generation.

/// Default prefix of the `src` URL, relative to the generated stylesheet.
pub const DEFAULT_URL_PREFIX: &str = "../fonts/";

/// Extension given to generated stylesheets.
pub const CSS_EXTENSION: &str = "css";

/// Trailing descriptor appended to every rule.
pub const FONT_DISPLAY: &str = "font-display:swap;";

/// Order of the descriptors inside the generated rule.
///
/// CSS gives the order no meaning, but it is visible in golden output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertyOrder {
    /// `font-family`, `src`, `font-style`, `font-weight`.
    #[default]
    FamilyFirst,
    /// `font-style`, `font-weight`, `font-family`, `src`.
    DescriptorsFirst,
}

/// Options shared by every derived rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub url_prefix: String,
    pub order: PropertyOrder,
}

impl Default for Options {
    fn default() -> Self {
        Self { url_prefix: DEFAULT_URL_PREFIX.to_string(), order: PropertyOrder::default() }
    }
}

impl Options {
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into();
        self
    }

    pub fn with_order(mut self, order: PropertyOrder) -> Self {
        self.order = order;
        self
    }
}
