use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SraFetchError;

/// An SRA run accession as it appears in the manifest, e.g. `SRR014966`.
///
/// The value is used verbatim as a filename component, so anything that
/// could not name a file is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct SraAccession(String);

impl SraAccession {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SraAccession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SraAccession {
    type Err = SraFetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let is_valid = !trimmed.is_empty()
            && !trimmed
                .chars()
                .any(|ch| ch.is_whitespace() || ch == '/' || ch == '\\');
        if !is_valid {
            return Err(SraFetchError::InvalidAccession(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for SraAccession {
    type Error = SraFetchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One read of a paired-end run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    R1,
    R2,
}

impl Mate {
    /// Both mates, in the order the rename pass visits them.
    pub const BOTH: [Mate; 2] = [Mate::R1, Mate::R2];

    fn number(self) -> u8 {
        match self {
            Mate::R1 => 1,
            Mate::R2 => 2,
        }
    }

    /// Filename produced by the external tool with `--split-files --gzip`.
    pub fn raw_file_name(self, accession: &SraAccession) -> String {
        format!("{}_{}.fastq.gz", accession, self.number())
    }

    /// Filename after the rename pass.
    pub fn sample_file_name(self, sample_name: &str) -> String {
        format!("{}_R{}.fastq.gz", sample_name, self.number())
    }
}

impl fmt::Display for Mate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.number())
    }
}
