//! Per-entry transform from a font file to a stylesheet.

use log::{debug, info};

use crate::{
    config::{CSS_EXTENSION, Options},
    descriptor::FontFaceDescriptor,
    entry::{Contents, FontEntry},
    error::{Error, Result},
};

/// Turn a font entry into a stylesheet entry.
///
/// - Null entries are returned unchanged.
/// - Stream entries fail with [`Error::StreamingNotSupported`].
/// - Buffer entries get an `@font-face` rule as contents and a `.css`
///   extension. The font bytes themselves are never inspected.
pub fn transform(mut entry: FontEntry, options: &Options) -> Result<FontEntry> {
    if entry.is_null() {
        debug!("{}: no contents, passing through", entry.path().display());
        return Ok(entry);
    }
    if entry.is_stream() {
        return Err(Error::StreamingNotSupported(entry.path().to_path_buf()));
    }

    let css = {
        let descriptor = FontFaceDescriptor::derive(
            entry.base_name()?,
            entry.extension()?,
            entry.original_file_name()?,
            options,
        );
        descriptor.render(options.order)
    };

    let css_path = entry.path().with_extension(CSS_EXTENSION);
    info!("{} -> {}", entry.path().display(), css_path.display());
    entry.set_contents(Contents::Buffer(css.into_bytes()));
    entry.set_path(css_path);
    Ok(entry)
}
