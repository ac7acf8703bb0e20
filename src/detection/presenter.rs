//! Rendering of reports for humans and for tooling.
//!
//! Pure projections of a [`Report`]; no detection decisions are made here.

use super::report::Report;
use crate::error::{DetectError, Result};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Options for text output
#[derive(Debug, Clone, Default)]
pub struct PresentOptions {
    /// Include rejected formats with their reason and message
    pub show_rejections: bool,
}

impl PresentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rejections(mut self, show: bool) -> Self {
        self.show_rejections = show;
        self
    }
}

/// Render a report as human-readable text.
pub fn render(report: &Report, show_rejections: bool) -> String {
    format_text(report, &PresentOptions::new().with_rejections(show_rejections))
}

/// Format a report as human-readable text
pub fn format_text(report: &Report, options: &PresentOptions) -> String {
    let mut output = String::new();

    match report.detected_formats.as_slice() {
        [] => output.push_str("Unable to detect the format\n"),
        [only] => {
            let _ = writeln!(output, "Detected format: {}", only);
        }
        many => {
            output.push_str("Ambiguous dataset; detected the following formats:\n\n");
            for name in many {
                let _ = writeln!(output, "- {}", name);
            }
        }
    }

    if options.show_rejections {
        output.push('\n');

        if report.rejected_formats.is_empty() {
            output.push_str("No formats were rejected.\n");
        } else {
            output.push_str("The following formats were rejected:\n\n");
            for (name, rejection) in &report.rejected_formats {
                let _ = writeln!(output, "{} ({}):", name, rejection.reason);
                for line in rejection.message.lines() {
                    let _ = writeln!(output, "    {}", line);
                }
            }
        }
    }

    output
}

/// The structured report document.
///
/// Always carries both partitions in full.
pub fn to_document(report: &Report) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(report)?)
}

/// Format a report as a JSON document
pub fn format_json(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Parse a JSON document produced by [`format_json`].
pub fn parse_json(json: &str) -> Result<Report> {
    Ok(serde_json::from_str(json)?)
}

/// Write the pretty-printed JSON document to `path`.
pub fn write_json_report(report: &Report, path: &Path) -> Result<()> {
    let io_err = |e| DetectError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), "Wrote JSON report");
    Ok(())
}
