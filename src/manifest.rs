use std::path::Path;

use serde::Deserialize;

use crate::domain::SraAccession;
use crate::error::SraFetchError;

pub const ACCESSION_COLUMN: &str = "SRA_ID";
pub const SAMPLE_NAME_COLUMN: &str = "SRA_NAME";

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    #[serde(rename = "SRA_ID")]
    sra_id: SraAccession,
    #[serde(rename = "SRA_NAME")]
    sra_name: String,
}

#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub accession: SraAccession,
    pub sample_name: String,
}

/// Ordered mapping accession -> sample name, loaded from a CSV manifest.
///
/// A duplicate accession keeps its original position but takes the newer
/// sample name.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Reads a comma-separated manifest with a header row. Columns beyond
    /// the required two are ignored; column order does not matter.
    pub fn load(path: &Path) -> Result<Self, SraFetchError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|_| SraFetchError::ManifestRead(path.to_path_buf()))?;

        let headers = reader
            .headers()
            .map_err(|err| SraFetchError::ManifestParse(err.to_string()))?;
        for column in [ACCESSION_COLUMN, SAMPLE_NAME_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(SraFetchError::MissingColumn(column.to_string()));
            }
        }

        let mut manifest = Manifest::default();
        for result in reader.deserialize() {
            let record: ManifestRecord =
                result.map_err(|err| SraFetchError::ManifestParse(err.to_string()))?;
            manifest.insert(record.sra_id, record.sra_name);
        }
        Ok(manifest)
    }

    pub fn insert(&mut self, accession: SraAccession, sample_name: String) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.accession == accession)
        {
            Some(entry) => entry.sample_name = sample_name,
            None => self.entries.push(ManifestEntry {
                accession,
                sample_name,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
