//! `@font-face` descriptor derivation and rendering.

use indexmap::IndexMap;
use log::debug;

use crate::{
    classify::{Classification, classify_base_name},
    config::{FONT_DISPLAY, Options, PropertyOrder},
    family::extract_family,
    source::{FontFormat, source_url, source_value},
    tables::{FontStyle, FontWeight},
};

/// Everything needed to render one `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceDescriptor {
    pub family: String,
    pub src: String,
    pub format: FontFormat,
    pub style: Option<FontStyle>,
    pub weight: Option<FontWeight>,
}

impl FontFaceDescriptor {
    /// Derive a descriptor from a file name.
    ///
    /// `base_name` is the current name without extension, `extension` decides
    /// the format, and `original_file_name` (with extension) is what the `src`
    /// URL points at.
    pub fn derive(
        base_name: &str,
        extension: &str,
        original_file_name: &str,
        options: &Options,
    ) -> Self {
        let classification = classify_base_name(base_name);
        let descriptor = Self::from_classification(
            base_name,
            classification,
            FontFormat::from_extension(extension),
            source_url(&options.url_prefix, original_file_name),
        );
        debug!(
            "{base_name}: family={:?} style={:?} weight={:?} format={}",
            descriptor.family, descriptor.style, descriptor.weight, descriptor.format
        );
        descriptor
    }

    /// Build a descriptor from an existing classification of `base_name`.
    pub fn from_classification(
        base_name: &str,
        classification: Classification,
        format: FontFormat,
        src: String,
    ) -> Self {
        Self {
            family: extract_family(base_name, classification.count()),
            src,
            format,
            style: classification.style,
            weight: classification.weight,
        }
    }

    /// CSS property name to value, in rendering order.
    pub fn properties(&self, order: PropertyOrder) -> IndexMap<&'static str, String> {
        let mut properties = IndexMap::new();
        let insert_descriptors = |properties: &mut IndexMap<&'static str, String>| {
            if let Some(style) = self.style {
                properties.insert("font-style", style.to_string());
            }
            if let Some(weight) = self.weight {
                properties.insert("font-weight", weight.to_string());
            }
        };

        if order == PropertyOrder::DescriptorsFirst {
            insert_descriptors(&mut properties);
        }
        properties.insert("font-family", format!("\"{}\"", self.family));
        properties.insert("src", source_value(&self.src, self.format));
        if order == PropertyOrder::FamilyFirst {
            insert_descriptors(&mut properties);
        }
        properties
    }

    /// Render the complete rule, e.g.
    /// `@font-face{font-family:"Roboto";src:url("../fonts/Roboto-Bold.ttf") format("truetype");font-weight:700;font-display:swap;}`.
    pub fn render(&self, order: PropertyOrder) -> String {
        let body: String = self
            .properties(order)
            .into_iter()
            .map(|(property, value)| format!("{property}:{value};"))
            .collect();
        format!("@font-face{{{body}{FONT_DISPLAY}}}")
    }
}
