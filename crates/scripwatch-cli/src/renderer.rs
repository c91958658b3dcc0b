//! Report output
//!
//! Writes a rendered report either to stdout or to a file.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use log::info;

/// Destination for the finished report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportWriter {
    Stdout,
    File(PathBuf),
}

impl ReportWriter {
    pub fn new(out: Option<PathBuf>) -> Self {
        out.map_or(Self::Stdout, Self::File)
    }

    /// Write the report in one go.
    pub fn write(&self, report: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(report.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("Failed to write report to stdout")
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(path, report)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                info!("Report written to {}", path.display());
                Ok(())
            }
        }
    }
}
