use tracing::{info, warn};

use crate::error::SraFetchError;
use crate::fetch::FetchTool;
use crate::layout::OutputLayout;
use crate::manifest::Manifest;
use crate::rename::{self, RenameReport};

#[derive(Debug, Clone)]
pub struct RunItem {
    pub accession: String,
    pub sample_name: String,
    pub error: Option<String>,
}

impl RunItem {
    pub fn fetched(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub items: Vec<RunItem>,
    pub rename: RenameReport,
}

impl RunReport {
    pub fn failed_fetches(&self) -> usize {
        self.items.iter().filter(|item| item.error.is_some()).count()
    }
}

pub struct App<T: FetchTool> {
    tool: T,
}

impl<T: FetchTool> App<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// The whole pipeline: ensure the output layout, fetch each accession
    /// sequentially, then rename the delivered files once.
    ///
    /// A failed invocation is recorded on its item and the run moves on, so
    /// partial deliveries still get renamed; the caller turns recorded
    /// failures into a non-zero exit. A missing tool aborts immediately
    /// since every remaining invocation would fail the same way.
    pub fn run(
        &self,
        manifest: &Manifest,
        layout: &OutputLayout,
        threads: usize,
    ) -> Result<RunReport, SraFetchError> {
        layout.ensure()?;

        let mut items = Vec::with_capacity(manifest.len());
        for entry in manifest.iter() {
            info!(
                "fetching {} into {} ({threads} threads)",
                entry.accession,
                layout.fastq_dir()
            );
            let error = match self.tool.fetch(&entry.accession, layout.fastq_dir(), threads) {
                Ok(()) => None,
                Err(err @ SraFetchError::MissingTool(_)) => return Err(err),
                Err(err) => {
                    warn!("{err}");
                    Some(err.to_string())
                }
            };
            items.push(RunItem {
                accession: entry.accession.to_string(),
                sample_name: entry.sample_name.clone(),
                error,
            });
        }

        let rename = rename::rename_outputs(layout, manifest)?;
        Ok(RunReport { items, rename })
    }
}
