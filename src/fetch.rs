use std::path::{Path, PathBuf};
use std::process::Command;

use camino::Utf8Path;

use crate::domain::SraAccession;
use crate::error::SraFetchError;

/// Environment variable consulted for the external tool's thread count,
/// set by the cluster scheduler on allocated jobs.
pub const CPU_ENV_VAR: &str = "SLURM_CPUS_PER_TASK";

pub const PROGRAM: &str = "parallel-fastq-dump";

pub trait FetchTool: Send + Sync {
    /// Downloads one accession into `outdir` as gzipped, split paired-end
    /// FASTQ, blocking until the external process exits.
    fn fetch(
        &self,
        accession: &SraAccession,
        outdir: &Utf8Path,
        threads: usize,
    ) -> Result<(), SraFetchError>;

    fn version(&self) -> Option<String>;
}

/// Shells out to `parallel-fastq-dump`, resolved from `PATH` at startup.
#[derive(Clone)]
pub struct ParallelFastqDump {
    program: Option<PathBuf>,
}

impl ParallelFastqDump {
    pub fn new() -> Self {
        Self {
            program: find_in_path(PROGRAM),
        }
    }

    fn require_program(&self) -> Result<&PathBuf, SraFetchError> {
        self.program
            .as_ref()
            .ok_or_else(|| SraFetchError::MissingTool(PROGRAM.to_string()))
    }
}

impl Default for ParallelFastqDump {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchTool for ParallelFastqDump {
    fn fetch(
        &self,
        accession: &SraAccession,
        outdir: &Utf8Path,
        threads: usize,
    ) -> Result<(), SraFetchError> {
        let program = self.require_program()?;
        let args = fetch_args(accession, outdir, threads);
        let output = Command::new(program).args(&args).output().map_err(|err| {
            SraFetchError::FetchFailed {
                accession: accession.to_string(),
                message: err.to_string(),
            }
        })?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("command failed: {}", program.display())
        } else {
            stderr
        };
        Err(SraFetchError::FetchFailed {
            accession: accession.to_string(),
            message,
        })
    }

    fn version(&self) -> Option<String> {
        self.program
            .as_ref()
            .and_then(|path| tool_version(path, &["--version"]))
    }
}

/// Argument list for one invocation: accession, destination, thread count,
/// and the fixed output-format flags.
pub fn fetch_args(accession: &SraAccession, outdir: &Utf8Path, threads: usize) -> Vec<String> {
    vec![
        "--sra-id".to_string(),
        accession.to_string(),
        "--outdir".to_string(),
        outdir.to_string(),
        "--threads".to_string(),
        threads.to_string(),
        "--gzip".to_string(),
        "--split-files".to_string(),
    ]
}

/// Thread count for the external tool: scheduler hint when present and
/// usable, otherwise the host's logical CPU count.
pub fn worker_threads() -> usize {
    threads_from_hint(std::env::var(CPU_ENV_VAR).ok().as_deref())
}

fn threads_from_hint(hint: Option<&str>) -> usize {
    hint.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&count| count > 0)
        .unwrap_or_else(num_cpus::get)
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for path in std::env::split_paths(&path_var) {
        let exe = path.join(format!("{name}.exe"));
        if exe.exists() {
            return Some(exe);
        }
        let plain = path.join(name);
        if plain.exists() {
            return Some(plain);
        }
    }
    None
}

fn tool_version(path: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new(path).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() { None } else { Some(stdout) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_args_layout() {
        let accession: SraAccession = "SRR014966".parse().unwrap();
        let args = fetch_args(&accession, Utf8Path::new("/data/fastq"), 8);
        assert_eq!(
            args,
            [
                "--sra-id",
                "SRR014966",
                "--outdir",
                "/data/fastq",
                "--threads",
                "8",
                "--gzip",
                "--split-files",
            ]
        );
    }

    #[test]
    fn threads_prefer_scheduler_hint() {
        assert_eq!(threads_from_hint(Some("4")), 4);
        assert_eq!(threads_from_hint(Some(" 12 ")), 12);
    }

    #[test]
    fn threads_fall_back_to_cpu_count() {
        let detected = num_cpus::get();
        assert_eq!(threads_from_hint(None), detected);
        assert_eq!(threads_from_hint(Some("not-a-number")), detected);
        assert_eq!(threads_from_hint(Some("0")), detected);
    }
}
