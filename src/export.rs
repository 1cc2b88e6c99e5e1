use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output format for saving the last analysis result to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[value(name = "txt", alias = "text")]
    Text,
    #[value(name = "json")]
    Json,
    #[value(name = "md", alias = "markdown")]
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
        }
    }

    pub fn file_name(self) -> String {
        format!("report.{}", self.extension())
    }

    /// JSON exports are pretty-printed when the stored text parses as JSON,
    /// otherwise the raw text is kept unchanged. Other formats pass through.
    pub fn render(self, content: &str) -> String {
        match self {
            ExportFormat::Json => serde_json::from_str::<serde_json::Value>(content)
                .and_then(|value| serde_json::to_string_pretty(&value))
                .unwrap_or_else(|_| content.to_string()),
            ExportFormat::Text | ExportFormat::Markdown => content.to_string(),
        }
    }
}

/// Writes the rendered report as `report.<ext>` under `dir` and returns the
/// full path.
pub fn export_to(dir: &Path, format: ExportFormat, content: &str) -> io::Result<PathBuf> {
    let path = dir.join(format.file_name());
    fs::write(&path, format.render(content))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_export_pretty_prints_valid_json() {
        let rendered = ExportFormat::Json.render(r#"{"a":1}"#);
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn json_export_falls_back_to_raw_text() {
        let content = "not json at all";
        assert_eq!(ExportFormat::Json.render(content), content);
    }

    #[test]
    fn text_and_markdown_pass_through() {
        let content = "# Findings\n\nlooks fine";
        assert_eq!(ExportFormat::Text.render(content), content);
        assert_eq!(ExportFormat::Markdown.render(content), content);
    }

    #[test]
    fn file_names_use_expected_extensions() {
        assert_eq!(ExportFormat::Text.file_name(), "report.txt");
        assert_eq!(ExportFormat::Json.file_name(), "report.json");
        assert_eq!(ExportFormat::Markdown.file_name(), "report.md");
    }

    #[test]
    fn export_writes_rendered_file() {
        let dir = tempdir().unwrap();
        let path = export_to(dir.path(), ExportFormat::Json, r#"{"a":1}"#).unwrap();

        assert!(path.ends_with("report.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "{\n  \"a\": 1\n}");
    }
}
