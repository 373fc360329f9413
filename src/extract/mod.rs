use std::path::Path;

/// Best-effort document-to-text capability. Implementations never fail:
/// any extraction problem yields an empty string, which the batch runner
/// treats as an unreadable candidate.
pub trait TextSource {
    fn read_text(&self, path: &Path) -> String;
}

/// Filesystem-backed extraction: PDFs via pdf-extract, plain text via the
/// standard library, everything else empty.
pub struct FileTextSource;

impl TextSource for FileTextSource {
    fn read_text(&self, path: &Path) -> String {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => match pdf_extract::extract_text(path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "PDF extraction failed");
                    String::new()
                }
            },
            Some("txt") | Some("text") | Some("md") | None => {
                match std::fs::read_to_string(path) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "file read failed");
                        String::new()
                    }
                }
            }
            Some(other) => {
                tracing::warn!(
                    path = %path.display(),
                    "unsupported extension .{other}, treating as unreadable"
                );
                String::new()
            }
        }
    }
}
