use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How much of the extracted text the preview panel shows.
pub const PREVIEW_CHARS: usize = 3000;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("file is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unsupported file type: .{extension}")]
    Unsupported { extension: String },
}

pub fn documents_dir() -> PathBuf {
    std::env::var("DOC_ASSISTANT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("documents"))
}

/// Lists the PDF and plain-text files the menu offers, sorted by name.
pub fn list_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(ext) = path.extension().and_then(|e| e.to_str())
                && matches!(ext.to_ascii_lowercase().as_str(), "pdf" | "txt")
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

/// Extracts the full plain-text content of a document, dispatching on the
/// file extension. Anything other than `.pdf` or `.txt` is rejected.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let bytes = fs::read(path)?;
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        "txt" => {
            let bytes = fs::read(path)?;
            Ok(String::from_utf8(bytes)?)
        }
        _ => Err(ExtractError::Unsupported { extension }),
    }
}

/// First `PREVIEW_CHARS` characters of the text, cut on a char boundary.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_preview_shorter_than_limit() {
        let text = "short document";
        assert_eq!(preview(text), text);
    }

    #[test]
    fn test_preview_truncates_at_limit() {
        let text = "x".repeat(PREVIEW_CHARS + 500);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(PREVIEW_CHARS + 10);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(text.is_char_boundary(p.len()));
    }

    #[test]
    fn test_extract_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "The capital of France is Paris.").unwrap();

        let text = extract_file(&path).unwrap();
        assert_eq!(text, "The capital of France is Paris.");
    }

    #[test]
    fn test_extract_txt_preview_equals_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        let content = "abcde".repeat(1000); // 5000 chars
        std::fs::write(&path, &content).unwrap();

        let text = extract_file(&path).unwrap();
        let expected: String = content.chars().take(PREVIEW_CHARS).collect();
        assert_eq!(preview(&text), expected);
    }

    #[test]
    fn test_extract_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        std::fs::write(&path, b"not text").unwrap();

        match extract_file(&path) {
            Err(ExtractError::Unsupported { extension }) => assert_eq!(extension, "png"),
            other => panic!("expected Unsupported, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(matches!(extract_file(&path), Err(ExtractError::Utf8(_))));
    }

    #[test]
    fn test_extract_invalid_pdf_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a valid pdf").unwrap();

        assert!(matches!(extract_file(&path), Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_list_documents_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.pdf"), "a").unwrap();
        std::fs::write(dir.path().join("notes.md"), "m").unwrap();

        let files = list_documents(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
    }

    #[test]
    fn test_list_documents_missing_dir() {
        let files = list_documents(Path::new("/nonexistent/surely"));
        assert!(files.is_empty());
    }
}
