//! font2css core - derive `@font-face` rules from font file names.
//!
//! The family, style and weight are guessed from the hyphen separated tokens
//! of the file name, e.g. `Roboto-Black-Italic.woff2` becomes:
//!
//! ```
//! use font2css_core::{Options, derive_font_face};
//!
//! let css = derive_font_face("Roboto-Black-Italic", "woff2", "Roboto-Black-Italic.woff2", &Options::default());
//! assert_eq!(
//!     css,
//!     r#"@font-face{font-family:"Roboto";src:url("../fonts/Roboto-Black-Italic.woff2") format("woff2");font-style:italic;font-weight:900;font-display:swap;}"#
//! );
//! ```

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod entry;
pub mod error;
pub mod family;
pub mod source;
pub mod tables;
pub mod transform;

pub use classify::{Classification, classify, classify_base_name, descriptor_tokens};
pub use config::{DEFAULT_URL_PREFIX, Options, PropertyOrder};
pub use descriptor::FontFaceDescriptor;
pub use entry::{Contents, FontEntry};
pub use error::{Error, Result};
pub use family::extract_family;
pub use source::FontFormat;
pub use tables::{FontStyle, FontWeight};
pub use transform::transform;

/// Derive and render the `@font-face` rule for one file name.
pub fn derive_font_face(
    base_name: &str,
    extension: &str,
    original_file_name: &str,
    options: &Options,
) -> String {
    FontFaceDescriptor::derive(base_name, extension, original_file_name, options)
        .render(options.order)
}
