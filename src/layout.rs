use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::{Mate, SraAccession};
use crate::error::SraFetchError;

pub const FASTQ_SUBDIR: &str = "fastq";

/// Filesystem layout under the output directory: everything the external
/// tool writes, and everything the rename pass touches, lives in `fastq/`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    fastq_dir: Utf8PathBuf,
}

impl OutputLayout {
    pub fn new(outdir: impl AsRef<Utf8Path>) -> Self {
        Self {
            fastq_dir: outdir.as_ref().join(FASTQ_SUBDIR),
        }
    }

    pub fn fastq_dir(&self) -> &Utf8Path {
        &self.fastq_dir
    }

    pub fn ensure(&self) -> Result<(), SraFetchError> {
        fs::create_dir_all(self.fastq_dir.as_std_path())
            .map_err(|err| SraFetchError::Filesystem(err.to_string()))
    }

    /// Path of a tool-named file, e.g. `fastq/SRR001_1.fastq.gz`.
    pub fn raw_path(&self, accession: &SraAccession, mate: Mate) -> Utf8PathBuf {
        self.fastq_dir.join(mate.raw_file_name(accession))
    }

    /// Path of a sample-named file, e.g. `fastq/SampleA_R1.fastq.gz`.
    pub fn sample_path(&self, sample_name: &str, mate: Mate) -> Utf8PathBuf {
        self.fastq_dir.join(mate.sample_file_name(sample_name))
    }
}
