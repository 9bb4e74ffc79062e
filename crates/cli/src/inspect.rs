//! Show what would be derived from file names, without touching any file.

use std::path::Path;

use font2css_core::{FontFaceDescriptor, Options};

/// Derive the descriptor for a bare file name.
pub fn describe(file_name: &str, options: &Options) -> FontFaceDescriptor {
    let path = Path::new(file_name);
    let base_name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
    let original = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
    FontFaceDescriptor::derive(base_name, extension, original, options)
}

/// Properties and rule for each name, as printed by `font2css inspect`.
pub fn report(file_name: &str, options: &Options) -> String {
    let descriptor = describe(file_name, options);
    let mut lines = vec![file_name.to_string()];
    for (property, value) in descriptor.properties(options.order) {
        lines.push(format!("  {property}: {value}"));
    }
    lines.push(format!("  {}", descriptor.render(options.order)));
    lines.join("\n")
}

pub fn inspect(names: &[String], options: &Options) {
    for name in names {
        println!("{}", report(name, options));
    }
}
