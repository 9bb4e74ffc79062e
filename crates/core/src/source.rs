//! Font format detection and `src` URL construction.

use std::fmt;

/// Format hint emitted in the `src` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Woff2,
    Woff,
    TrueType,
}

impl FontFormat {
    /// Detect the format from a file extension (with or without the leading dot).
    ///
    /// Matching is a case-sensitive substring test: `woff2` before `woff`,
    /// everything else is TrueType.
    pub fn from_extension(extension: &str) -> Self {
        if extension.contains("woff2") {
            FontFormat::Woff2
        } else if extension.contains("woff") {
            FontFormat::Woff
        } else {
            FontFormat::TrueType
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FontFormat::Woff2 => "woff2",
            FontFormat::Woff => "woff",
            FontFormat::TrueType => "truetype",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL of the original font asset relative to the stylesheet.
pub fn source_url(url_prefix: &str, original_file_name: &str) -> String {
    format!("{url_prefix}{original_file_name}")
}

/// Value of the `src` descriptor.
pub fn source_value(url: &str, format: FontFormat) -> String {
    format!("url(\"{url}\") format(\"{format}\")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FontFormat::from_extension(".woff2"), FontFormat::Woff2);
        assert_eq!(FontFormat::from_extension("woff2"), FontFormat::Woff2);
        assert_eq!(FontFormat::from_extension(".woff"), FontFormat::Woff);
        assert_eq!(FontFormat::from_extension(".ttf"), FontFormat::TrueType);
        assert_eq!(FontFormat::from_extension(".otf"), FontFormat::TrueType);
        assert_eq!(FontFormat::from_extension(""), FontFormat::TrueType);
    }

    #[test]
    fn test_format_is_case_sensitive() {
        assert_eq!(FontFormat::from_extension(".WOFF2"), FontFormat::TrueType);
        assert_eq!(FontFormat::from_extension(".Woff"), FontFormat::TrueType);
    }

    #[test]
    fn test_source_value() {
        let url = source_url("../fonts/", "Roboto-Bold.woff2");
        assert_eq!(url, "../fonts/Roboto-Bold.woff2");
        assert_eq!(
            source_value(&url, FontFormat::Woff2),
            "url(\"../fonts/Roboto-Bold.woff2\") format(\"woff2\")"
        );
    }
}
