//! Input discovery and stylesheet I/O.

use std::{
    fs::{create_dir_all, read, write},
    io::stdin,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use font2css_core::{Contents, FontEntry};
use glob::glob;
use log::warn;

/// Argument meaning "read from standard input".
pub const STDIN_ARG: &str = "-";

/// Where an entry comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
    /// A glob pattern that matched no file.
    Unmatched(String),
}

impl InputSource {
    pub fn display(&self) -> String {
        match self {
            InputSource::Path(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Unmatched(pattern) => pattern.clone(),
        }
    }

    /// Load the entry. Directories become null entries and standard input a
    /// stream; regular files are read into memory.
    pub fn load(&self) -> Result<FontEntry> {
        match self {
            InputSource::Stdin => Ok(FontEntry::new(STDIN_ARG, Contents::Stream(Box::new(stdin())))),
            InputSource::Unmatched(pattern) => bail!("Pattern matched no files: {pattern}"),
            InputSource::Path(path) if path.is_dir() => Ok(FontEntry::null(path)),
            InputSource::Path(path) => {
                let data =
                    read(path).with_context(|| format!("Failed to read font: {}", path.display()))?;
                Ok(FontEntry::buffer(path, data))
            }
        }
    }
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand a glob pattern. A pattern matching nothing becomes
/// [`InputSource::Unmatched`] so it is reported as a failure.
fn expand_pattern(pattern: &str) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    for entry in glob(pattern).with_context(|| format!("Failed to glob pattern: {pattern}"))? {
        match entry {
            Ok(path) => sources.push(InputSource::Path(path)),
            Err(e) => warn!("Skipping unreadable match of {pattern}: {e}"),
        }
    }
    if sources.is_empty() {
        warn!("Pattern matched no files: {pattern}");
        sources.push(InputSource::Unmatched(pattern.to_string()));
    }
    Ok(sources)
}

/// Expand command line inputs into sources, in argument order.
///
/// Glob patterns are expanded; other arguments are kept as given so that a
/// missing file is reported when it is loaded.
pub fn collect_inputs(args: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    for arg in args {
        if arg == STDIN_ARG {
            sources.push(InputSource::Stdin);
        } else if is_glob_pattern(arg) {
            sources.extend(expand_pattern(arg)?);
        } else {
            sources.push(InputSource::Path(PathBuf::from(arg)));
        }
    }
    Ok(sources)
}

/// Output path for a converted entry: next to it, or inside `out_dir`.
pub fn output_path(entry: &FontEntry, out_dir: Option<&Path>) -> PathBuf {
    match (out_dir, entry.path().file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => entry.path().to_path_buf(),
    }
}

/// Write a stylesheet, creating its directory if needed.
pub fn write_stylesheet(path: &Path, data: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    write(path, data).with_context(|| format!("Failed to write stylesheet: {}", path.display()))
}

/// Create parent directory if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("fonts/*.woff2"));
        assert!(is_glob_pattern("fonts/Roboto-?.ttf"));
        assert!(!is_glob_pattern("fonts/Roboto-Bold.ttf"));
    }

    #[test]
    fn test_collect_inputs_keeps_plain_paths() {
        let args = vec!["missing/Roboto.ttf".to_string(), "-".to_string()];
        let sources = collect_inputs(&args).unwrap();
        assert_eq!(
            sources,
            vec![InputSource::Path(PathBuf::from("missing/Roboto.ttf")), InputSource::Stdin]
        );
    }

    #[test]
    fn test_unmatched_pattern_fails_on_load() {
        let pattern = "no-such-dir-font2css/*.otf".to_string();
        let sources = collect_inputs(std::slice::from_ref(&pattern)).unwrap();
        assert_eq!(sources, vec![InputSource::Unmatched(pattern)]);
        let err = sources[0].load().unwrap_err();
        assert!(err.to_string().contains("matched no files"));
    }

    #[test]
    fn test_output_path() {
        let entry = FontEntry::buffer("fonts/Roboto.css", Vec::new());
        assert_eq!(output_path(&entry, None), PathBuf::from("fonts/Roboto.css"));
        assert_eq!(output_path(&entry, Some(Path::new("dist/css"))), PathBuf::from("dist/css/Roboto.css"));
    }

    #[test]
    fn test_stdin_loads_as_stream() {
        assert!(InputSource::Stdin.load().unwrap().is_stream());
    }
}
