use std::fs;
use std::io;

use camino::Utf8PathBuf;
use tracing::warn;

use crate::domain::Mate;
use crate::error::SraFetchError;
use crate::layout::OutputLayout;
use crate::manifest::Manifest;

#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    pub renamed: Vec<Utf8PathBuf>,
    pub missing: Vec<Utf8PathBuf>,
}

/// Renames tool-named files to sample-named ones, R1 then R2 per entry.
///
/// A missing source is logged and skipped, so re-running the pass over an
/// already renamed directory only produces diagnostics. Any other
/// filesystem error is fatal.
pub fn rename_outputs(
    layout: &OutputLayout,
    manifest: &Manifest,
) -> Result<RenameReport, SraFetchError> {
    let mut report = RenameReport::default();
    for entry in manifest.iter() {
        for mate in Mate::BOTH {
            let source = layout.raw_path(&entry.accession, mate);
            let target = layout.sample_path(&entry.sample_name, mate);
            match fs::rename(source.as_std_path(), target.as_std_path()) {
                Ok(()) => report.renamed.push(target),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!("no such file {source}");
                    report.missing.push(source);
                }
                Err(err) => {
                    return Err(SraFetchError::Filesystem(format!(
                        "rename {source} -> {target}: {err}"
                    )));
                }
            }
        }
    }
    Ok(report)
}
