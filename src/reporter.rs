//! Reporting of step outputs and diagnostics back to the calling pipeline.
use log::*;
use std::{fs::OpenOptions, io::Write, path::PathBuf};

use crate::error::{ClassifierError, Result};

/// Output-reporting and diagnostics capability supplied by the host.
pub trait Reporter {
    /// Publish a named output value for downstream pipeline steps.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
    /// Surface a non-fatal problem.
    fn warning(&self, message: &str);
    /// Surface a fatal problem.
    fn error(&self, message: &str);
}

/// Reporter for GitHub Actions steps.
///
/// Outputs are appended to the file named by `GITHUB_OUTPUT` as `name=value`
/// lines, or printed to stdout in the same format when no file is
/// configured. Warnings and errors are always logged and, when workflow
/// commands are enabled, also printed as `::warning::` / `::error::`
/// annotations.
#[derive(Debug, Clone, Default)]
pub struct ActionsReporter {
    output_file: Option<PathBuf>,
    workflow_commands: bool,
}

impl ActionsReporter {
    pub fn new(output_file: Option<PathBuf>, workflow_commands: bool) -> Self {
        Self {
            output_file,
            workflow_commands,
        }
    }

    fn annotate(&self, command: &str, message: &str) {
        if self.workflow_commands {
            println!("{}", workflow_command(command, message));
        }
    }
}

impl Reporter for ActionsReporter {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let line = output_line(name, value)?;

        match &self.output_file {
            Some(path) => {
                debug!("writing output {name} to {}", path.display());
                let mut file =
                    OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(line.as_bytes())?;
            }
            None => print!("{line}"),
        }

        info!("output {name}: {value}");

        Ok(())
    }

    fn warning(&self, message: &str) {
        warn!("{message}");
        self.annotate("warning", message);
    }

    fn error(&self, message: &str) {
        error!("{message}");
        self.annotate("error", message);
    }
}

/// Formats a single `name=value` output line.
fn output_line(name: &str, value: &str) -> Result<String> {
    if name.is_empty() || name.contains('=') || has_line_break(name) {
        return Err(ClassifierError::invalid_output(format!(
            "output name {name:?} must be non-empty and contain no '=' or line breaks"
        )));
    }

    if has_line_break(value) {
        return Err(ClassifierError::invalid_output(format!(
            "value for output {name} must not contain line breaks"
        )));
    }

    Ok(format!("{name}={value}\n"))
}

fn has_line_break(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}

/// Formats a workflow command, escaping the message so it stays on one line.
fn workflow_command(command: &str, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{command}::{escaped}")
}
