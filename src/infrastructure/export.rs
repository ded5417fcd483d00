// src/infrastructure/export.rs
//! Rendering of bookmark collections to text, JSON and Markdown.
//!
//! Pure functions over already fetched records; nothing here touches the store.

use crate::domain::bookmark::{Bookmark, NewBookmark};
use crate::domain::error::{DomainError, DomainResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    /// Map a format name or file extension (`json`, `.md`, ...) to a format.
    /// Anything unrecognized, including the empty string, is plain text.
    pub fn from_discriminator(s: &str) -> Self {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "json" => ExportFormat::Json,
            "md" => ExportFormat::Markdown,
            _ => ExportFormat::Text,
        }
    }

    /// Infer the format from the extension of `path`
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(ExportFormat::Text, Self::from_discriminator)
    }

    /// Render `bookmarks` in this format
    pub fn render(self, bookmarks: &[Bookmark]) -> DomainResult<String> {
        match self {
            ExportFormat::Json => to_json(bookmarks),
            ExportFormat::Markdown => Ok(to_markdown(bookmarks)),
            ExportFormat::Text => Ok(to_text(bookmarks)),
        }
    }
}

/// One `<id>. <name> - <url>` line per bookmark
pub fn to_text(bookmarks: &[Bookmark]) -> String {
    bookmarks.iter().fold(String::new(), |mut out, bm| {
        let _ = writeln!(out, "{}. {} - {}", bm.id, bm.name, bm.url);
        out
    })
}

/// Pretty printed array of `{name, url}` objects, 2-space indent
pub fn to_json(bookmarks: &[Bookmark]) -> DomainResult<String> {
    serde_json::to_string_pretty(bookmarks).map_err(|e| {
        DomainError::Serialization(format!("Failed to serialize bookmarks to JSON: {}", e))
    })
}

/// One `- [name](url)` line per bookmark
pub fn to_markdown(bookmarks: &[Bookmark]) -> String {
    bookmarks.iter().fold(String::new(), |mut out, bm| {
        let _ = writeln!(out, "- [{}]({})", bm.name, bm.url);
        out
    })
}

/// Render `bookmarks` and write them to `path`, replacing any existing file
#[instrument(skip(bookmarks), level = "debug")]
pub fn export_to_file(
    bookmarks: &[Bookmark],
    path: &Path,
    format: ExportFormat,
) -> DomainResult<()> {
    let content = format.render(bookmarks)?;
    fs::write(path, content)?;
    debug!("Exported {} bookmarks to {}", bookmarks.len(), path.display());
    Ok(())
}

/// Parse the JSON export format back into unsaved bookmarks
pub fn from_json(content: &str) -> DomainResult<Vec<NewBookmark>> {
    let records: Vec<NewBookmark> = serde_json::from_str(content)
        .map_err(|e| DomainError::Serialization(format!("Invalid bookmark JSON: {}", e)))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::from_storage(1, "Google".to_string(), "google.com".to_string()),
            Bookmark::from_storage(2, "Reddit".to_string(), "reddit.com".to_string()),
        ]
    }

    #[test]
    fn given_bookmarks_when_to_text_then_one_line_each() {
        assert_eq!(to_text(&sample()), "1. Google - google.com\n2. Reddit - reddit.com\n");
    }

    #[test]
    fn given_bookmarks_when_to_markdown_then_links() {
        assert_eq!(
            to_markdown(&sample()),
            "- [Google](google.com)\n- [Reddit](reddit.com)\n"
        );
    }

    #[test]
    fn given_bookmarks_when_to_json_then_pretty_without_ids() {
        let json = to_json(&sample()).unwrap();
        let expected = r#"[
  {
    "name": "Google",
    "url": "google.com"
  },
  {
    "name": "Reddit",
    "url": "reddit.com"
  }
]"#;
        assert_eq!(json, expected);
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn given_empty_collection_when_render_then_valid_empty_output() {
        assert_eq!(to_text(&[]), "");
        assert_eq!(to_markdown(&[]), "");
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn given_exported_json_when_from_json_then_name_and_url_survive() {
        let json = to_json(&sample()).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Reddit");
        assert_eq!(parsed[1].url, "reddit.com");
    }

    #[test]
    fn given_malformed_json_when_from_json_then_serialization_error() {
        assert!(matches!(
            from_json("{\"name\": 1}"),
            Err(DomainError::Serialization(_))
        ));
    }

    #[rstest]
    #[case("json", ExportFormat::Json)]
    #[case(".json", ExportFormat::Json)]
    #[case("JSON", ExportFormat::Json)]
    #[case("md", ExportFormat::Markdown)]
    #[case(".md", ExportFormat::Markdown)]
    #[case("txt", ExportFormat::Text)]
    #[case("", ExportFormat::Text)]
    #[case("html", ExportFormat::Text)]
    fn given_discriminator_when_parse_then_expected_format(
        #[case] input: &str,
        #[case] expected: ExportFormat,
    ) {
        assert_eq!(ExportFormat::from_discriminator(input), expected);
    }

    #[rstest]
    #[case("out/bookmarks.json", ExportFormat::Json)]
    #[case("notes.md", ExportFormat::Markdown)]
    #[case("output", ExportFormat::Text)]
    #[case("list.txt", ExportFormat::Text)]
    fn given_path_when_from_path_then_format_from_extension(
        #[case] path: &str,
        #[case] expected: ExportFormat,
    ) {
        assert_eq!(ExportFormat::from_path(Path::new(path)), expected);
    }

    #[test]
    fn given_markdown_format_when_export_to_file_then_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.md");

        export_to_file(&sample(), &path, ExportFormat::Markdown).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "- [Google](google.com)\n- [Reddit](reddit.com)\n");
    }

    #[test]
    fn given_unwritable_path_when_export_to_file_then_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.txt");

        let result = export_to_file(&sample(), &path, ExportFormat::Text);

        assert!(matches!(result, Err(DomainError::Io(_))));
    }
}
