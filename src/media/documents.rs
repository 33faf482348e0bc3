// SPDX-License-Identifier: MPL-2.0
//! Downloadable documents (resume, thesis, slides).
//!
//! Documents are plain files in the documents directory. "Downloading" one
//! means asking the user where to save it and copying it there.

use crate::content::Document;
use crate::error::DocumentError;
use std::path::{Path, PathBuf};

/// Locates `document` inside `dir`.
///
/// # Errors
///
/// Returns [`DocumentError::NoDirectory`] when no directory is configured and
/// [`DocumentError::NotFound`] when the file is absent.
pub fn resolve(dir: Option<&Path>, document: Document) -> Result<PathBuf, DocumentError> {
    let dir = dir.ok_or(DocumentError::NoDirectory)?;
    let path = dir.join(document.file_name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(DocumentError::NotFound(document.file_name.to_string()))
    }
}

/// Copies `source` to `destination`, returning the number of bytes written.
///
/// # Errors
///
/// Returns [`DocumentError::CopyFailed`] if the copy fails.
pub fn export(source: &Path, destination: &Path) -> Result<u64, DocumentError> {
    if source == destination {
        return std::fs::metadata(source)
            .map(|meta| meta.len())
            .map_err(|e| DocumentError::CopyFailed(e.to_string()));
    }
    let bytes = std::fs::copy(source, destination)
        .map_err(|e| DocumentError::CopyFailed(e.to_string()))?;
    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "document exported"
    );
    Ok(bytes)
}

/// Asks where to save `document`. `None` if the dialog was cancelled.
pub async fn pick_destination(document: Document) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(document.file_name)
        .set_file_name(document.file_name);

    if document.file_name.ends_with(".pdf") {
        dialog = dialog.add_filter("PDF", &["pdf"]);
    }
    if let Some(dir) = dirs::download_dir() {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.save_file().await.map(|h| h.path().to_path_buf())
}

/// Full download flow: pick a destination, then copy.
///
/// `Ok(None)` means the user cancelled.
///
/// # Errors
///
/// Propagates [`resolve`] and [`export`] failures.
pub async fn download(
    dir: Option<PathBuf>,
    document: Document,
) -> Result<Option<PathBuf>, DocumentError> {
    let source = resolve(dir.as_deref(), document)?;
    let Some(destination) = pick_destination(document).await else {
        tracing::debug!(file = document.file_name, "document download cancelled");
        return Ok(None);
    };
    // File copies stay off the async executor.
    let copied = destination.clone();
    tokio::task::spawn_blocking(move || export(&source, &copied))
        .await
        .map_err(|e| DocumentError::CopyFailed(e.to_string()))??;
    Ok(Some(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{RESUME, THESIS};
    use tempfile::tempdir;

    #[test]
    fn resolve_without_directory_fails() {
        assert!(matches!(
            resolve(None, RESUME),
            Err(DocumentError::NoDirectory)
        ));
    }

    #[test]
    fn resolve_reports_missing_file_name() {
        let dir = tempdir().expect("temp dir");
        match resolve(Some(dir.path()), THESIS) {
            Err(DocumentError::NotFound(name)) => assert_eq!(name, "Thesis_Final_Version.pdf"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_and_export_copy_the_file() {
        let src_dir = tempdir().expect("temp dir");
        let dst_dir = tempdir().expect("temp dir");
        std::fs::write(src_dir.path().join(RESUME.file_name), b"%PDF-1.7").expect("write");

        let source = resolve(Some(src_dir.path()), RESUME).expect("resume present");
        let destination = dst_dir.path().join("cv.pdf");
        let bytes = export(&source, &destination).expect("copy");

        assert_eq!(bytes, 8);
        assert_eq!(std::fs::read(destination).expect("read"), b"%PDF-1.7");
    }

    #[test]
    fn export_onto_itself_keeps_the_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(RESUME.file_name);
        std::fs::write(&path, b"abc").expect("write");
        assert_eq!(export(&path, &path).expect("same file"), 3);
        assert_eq!(std::fs::read(&path).expect("read"), b"abc");
    }

    #[tokio::test]
    async fn download_reports_missing_document_before_asking() {
        let dir = tempdir().expect("temp dir");
        let result = download(Some(dir.path().to_path_buf()), RESUME).await;
        assert!(matches!(result, Err(DocumentError::NotFound(_))));
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("a.pdf");
        std::fs::write(&source, b"x").expect("write");
        let result = export(&source, &dir.path().join("nope").join("a.pdf"));
        assert!(matches!(result, Err(DocumentError::CopyFailed(_))));
    }
}
