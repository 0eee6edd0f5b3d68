//! Plain-text and JSON rendering of resolution results

use crate::changelog::Resolution;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Plain }
    }
}

/// Message line, a blank line, then the entry content.
pub fn render_resolution(
    resolution: &Resolution,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(format!(
            "{}\n\n{}",
            resolution.message, resolution.entry.content
        )),
        OutputFormat::Json => serde_json::to_string_pretty(resolution),
    }
}

/// One version per line, or a JSON array.
pub fn render_versions(
    versions: &[String],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(versions.join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(versions),
    }
}
