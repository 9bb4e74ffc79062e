//! Batch conversion of font files to stylesheets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use font2css_core::{Contents, Options, transform};
use indexmap::IndexMap;
use log::{debug, info};

use crate::{
    io::{InputSource, collect_inputs, output_path, write_stylesheet},
    parallel::{BatchResult, Outcome, collect_parallel},
};

/// A rule derived from one input, waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub target: PathBuf,
    pub css: Vec<u8>,
}

/// Derive the stylesheet for one input. `None` for pass-through entries.
pub fn derive_one(
    source: &InputSource,
    out_dir: Option<&Path>,
    options: &Options,
) -> Result<Option<Stylesheet>> {
    let entry = source.load()?;
    let entry = transform(entry, options)
        .with_context(|| format!("Failed to convert {}", source.display()))?;

    if entry.is_null() {
        debug!("Skipped {}", source.display());
        return Ok(None);
    }

    let target = output_path(&entry, out_dir);
    match entry.into_contents() {
        Contents::Buffer(css) => Ok(Some(Stylesheet { target, css })),
        other => Err(anyhow!("{}: unexpected contents {other:?}", source.display())),
    }
}

/// Inputs grouped by output file, both in input order.
///
/// Fonts sharing a stem (`Roboto-Bold.ttf`, `Roboto-Bold.woff2`) map to the
/// same stylesheet, which then holds one rule per font.
pub fn group_by_target(sheets: &[Option<Stylesheet>]) -> IndexMap<PathBuf, Vec<usize>> {
    let mut targets: IndexMap<PathBuf, Vec<usize>> = IndexMap::new();
    for (index, sheet) in sheets.iter().enumerate() {
        if let Some(sheet) = sheet {
            targets.entry(sheet.target.clone()).or_default().push(index);
        }
    }
    targets
}

/// Convert every input. Derivation and writing both run in parallel; each
/// output file is written once.
pub fn convert_all(inputs: &[String], out_dir: Option<&Path>, options: &Options) -> Result<BatchResult> {
    let sources = collect_inputs(inputs)?;
    info!("Converting {} inputs", sources.len());

    let derived = collect_parallel(&sources, |source| derive_one(source, out_dir, options));

    let mut outcomes = Vec::with_capacity(derived.len());
    let mut sheets = Vec::with_capacity(derived.len());
    for result in derived {
        match result {
            Ok(Some(sheet)) => {
                outcomes.push(Ok(Outcome::Converted));
                sheets.push(Some(sheet));
            }
            Ok(None) => {
                outcomes.push(Ok(Outcome::Skipped));
                sheets.push(None);
            }
            Err(e) => {
                outcomes.push(Err(e));
                sheets.push(None);
            }
        }
    }

    let groups: Vec<(PathBuf, Vec<usize>)> = group_by_target(&sheets).into_iter().collect();
    let written = collect_parallel(&groups, |(target, members)| {
        if members.len() > 1 {
            info!("{} rules share {}", members.len(), target.display());
        }
        let rules: Vec<&[u8]> = members
            .iter()
            .filter_map(|&index| sheets[index].as_ref())
            .map(|sheet| sheet.css.as_slice())
            .collect();
        write_stylesheet(target, &rules.join(&b'\n'))?;
        info!("Wrote {}", target.display());
        Ok(())
    });

    for ((target, members), result) in groups.iter().zip(written) {
        if let Err(e) = result {
            for &index in members {
                outcomes[index] = Err(anyhow!("{}: {e:#}", sources[index].display()));
            }
            debug!("Write failed for {}", target.display());
        }
    }

    Ok(BatchResult::summarize("Convert", &outcomes))
}
