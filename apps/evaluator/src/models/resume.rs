use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

const PDF_MIME: &str = "application/pdf";
const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// An uploaded resume document: its original name and raw bytes.
///
/// No type or size checks happen here. The content type is a hint for the
/// multipart part, derived from the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub content: Bytes,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads a resume from disk, keeping only the file name (not the directory).
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("'{}' has no usable file name", path.display()))?
            .to_string();
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume '{}'", path.display()))?;
        Ok(Self::new(name, content))
    }

    pub fn content_type(&self) -> &'static str {
        let is_pdf = Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            PDF_MIME
        } else {
            OCTET_STREAM_MIME
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
