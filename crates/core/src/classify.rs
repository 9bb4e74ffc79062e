//! Style and weight classification of descriptor tokens.

use crate::tables::{FontStyle, FontWeight};

/// Style and weight recognized in a base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub style: Option<FontStyle>,
    pub weight: Option<FontWeight>,
}

impl Classification {
    /// Number of recognized attributes (0, 1 or 2).
    ///
    /// This is the number of trailing tokens stripped from the family name.
    pub fn count(&self) -> usize {
        usize::from(self.style.is_some()) + usize::from(self.weight.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Lower-cased tokens after the first `-` separated segment of `base_name`.
pub fn descriptor_tokens(base_name: &str) -> Vec<String> {
    base_name.split('-').skip(1).map(str::to_lowercase).collect()
}

/// Weight for a single lower-cased token.
///
/// `normal` never sets a weight; names win over keywords.
fn classify_weight(token: &str) -> Option<FontWeight> {
    if token == "normal" {
        return None;
    }
    FontWeight::from_name(token).or_else(|| FontWeight::from_keyword(token))
}

/// Scan `tokens` left to right. A later match for a property replaces an
/// earlier one; unmatched tokens are ignored.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Classification {
    tokens.iter().fold(Classification::default(), |mut acc, token| {
        let token = token.as_ref();
        if let Some(weight) = classify_weight(token) {
            acc.weight = Some(weight);
        }
        if let Some(style) = FontStyle::from_keyword(token) {
            acc.style = Some(style);
        }
        acc
    })
}

/// Classify the descriptor tokens of `base_name`.
pub fn classify_base_name(base_name: &str) -> Classification {
    classify(&descriptor_tokens(base_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_tokens() {
        assert_eq!(descriptor_tokens("Roboto-Black-Italic"), vec!["black", "italic"]);
        assert!(descriptor_tokens("Roboto").is_empty());
        assert_eq!(descriptor_tokens("Roboto-"), vec![""]);
    }

    #[test]
    fn test_no_hyphen() {
        let c = classify_base_name("Roboto");
        assert!(c.is_empty());
        assert_eq!(c.style, None);
        assert_eq!(c.weight, None);
    }

    #[test]
    fn test_weight_name_wins_over_keyword() {
        // "bold" is in both tables; the name table resolves it to a number.
        let c = classify(&["bold"]);
        assert_eq!(c.weight, Some(FontWeight::Numeric(700)));
    }

    #[test]
    fn test_weight_keyword() {
        let c = classify(&["lighter"]);
        assert_eq!(c.weight, Some(FontWeight::Keyword("lighter")));
        assert_eq!(c.style, None);
    }

    #[test]
    fn test_normal_is_style_only() {
        let c = classify(&["normal"]);
        assert_eq!(c.style, Some(FontStyle::Normal));
        assert_eq!(c.weight, None);
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn test_last_match_wins() {
        let c = classify(&["light", "bold"]);
        assert_eq!(c.weight, Some(FontWeight::Numeric(700)));

        let c = classify(&["bold", "light"]);
        assert_eq!(c.weight, Some(FontWeight::Numeric(300)));

        let c = classify(&["italic", "oblique"]);
        assert_eq!(c.style, Some(FontStyle::Oblique));
    }

    #[test]
    fn test_later_unmatched_token_keeps_earlier_match() {
        let c = classify(&["bold", "condensed"]);
        assert_eq!(c.weight, Some(FontWeight::Numeric(700)));
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn test_normal_does_not_reset_weight() {
        let c = classify(&["bold", "normal"]);
        assert_eq!(c.weight, Some(FontWeight::Numeric(700)));
        assert_eq!(c.style, Some(FontStyle::Normal));
    }

    #[test]
    fn test_case_insensitive_tokens() {
        let c = classify_base_name("OpenSans-SemiBold-ITALIC");
        assert_eq!(c.weight, Some(FontWeight::Numeric(600)));
        assert_eq!(c.style, Some(FontStyle::Italic));
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn test_first_token_is_never_classified() {
        assert!(classify_base_name("Bold-Foo").is_empty());
    }
}
