// src/upload/policy.rs
//! Client-side acceptance checks for resume uploads

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::core::config_manager::{MAX_FILE_NAME_LENGTH, MAX_FILE_SIZE_BYTES};
use crate::error::{SubmissionError, ValidationError};

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Where the file bytes live until submission.
#[derive(Debug, Clone)]
pub enum FileContent {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file the user picked, before any checks have run.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_hint: String,
    pub content: FileContent,
}

impl SelectedFile {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            mime_hint: content_type_for(&file_name).to_string(),
            size_bytes: bytes.len() as u64,
            file_name,
            content: FileContent::Bytes(bytes),
        }
    }

    /// Describe a file on disk. The content is only read once the file is accepted.
    pub async fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            mime_hint: content_type_for(&file_name).to_string(),
            size_bytes: metadata.len(),
            file_name,
            content: FileContent::Path(path.to_path_buf()),
        })
    }
}

/// A file that passed the acceptance policy. Consumed by one submission.
#[derive(Debug)]
pub struct UploadCandidate {
    file_name: String,
    size_bytes: u64,
    mime_hint: String,
    content: FileContent,
}

impl UploadCandidate {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn mime_hint(&self) -> &str {
        &self.mime_hint
    }

    /// Load the payload for the multipart body.
    /// Never reads more than one byte past the size the file was accepted at.
    pub async fn into_bytes(self) -> Result<Vec<u8>, SubmissionError> {
        let path = match self.content {
            FileContent::Bytes(bytes) => return Ok(bytes),
            FileContent::Path(path) => path,
        };

        let read = async {
            let file = tokio::fs::File::open(&path).await?;
            let mut bytes = Vec::new();
            file.take(self.size_bytes + 1).read_to_end(&mut bytes).await?;
            Ok::<_, io::Error>(bytes)
        };

        let bytes = read.await.map_err(|source| SubmissionError::ReadFile {
            file_name: self.file_name.clone(),
            source,
        })?;

        if bytes.len() as u64 > self.size_bytes {
            return Err(SubmissionError::FileChanged {
                file_name: self.file_name,
                validated_bytes: self.size_bytes,
            });
        }

        Ok(bytes)
    }
}

/// Run the acceptance policy. Size, then name length, then extension; first failure wins.
pub fn accept(file: SelectedFile) -> Result<UploadCandidate, ValidationError> {
    if file.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(ValidationError::TooLarge {
            size_bytes: file.size_bytes,
            limit_bytes: MAX_FILE_SIZE_BYTES,
        });
    }

    let length = file.file_name.chars().count();
    if length > MAX_FILE_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            length,
            limit: MAX_FILE_NAME_LENGTH,
        });
    }

    if !has_supported_extension(&file.file_name) {
        return Err(ValidationError::UnsupportedExtension {
            file_name: file.file_name,
        });
    }

    Ok(UploadCandidate {
        mime_hint: content_type_for(&file.file_name).to_string(),
        file_name: file.file_name,
        size_bytes: file.size_bytes,
        content: file.content,
    })
}

pub fn has_supported_extension(file_name: &str) -> bool {
    let lower_name = file_name.to_lowercase();
    lower_name.ends_with(".pdf") || lower_name.ends_with(".docx")
}

/// Get content type for file
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        PDF_MIME
    } else if lower_name.ends_with(".docx") {
        DOCX_MIME
    } else {
        FALLBACK_MIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(name: &str, size_bytes: u64) -> SelectedFile {
        SelectedFile {
            file_name: name.to_string(),
            size_bytes,
            mime_hint: content_type_for(name).to_string(),
            content: FileContent::Bytes(Vec::new()),
        }
    }

    #[test]
    fn test_accepts_pdf_and_docx_any_case() {
        for name in ["resume.pdf", "CV.PDF", "resume.docx", "Resume.DocX"] {
            assert!(accept(sized(name, 1024)).is_ok(), "{} should pass", name);
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(accept(sized("resume.pdf", MAX_FILE_SIZE_BYTES)).is_ok());
        let err = accept(sized("resume.pdf", MAX_FILE_SIZE_BYTES + 1)).unwrap_err();
        assert_eq!(err.code(), "FILE_TOO_LARGE");
    }

    #[test]
    fn test_twelve_mib_pdf_rejected_for_size() {
        let err = accept(sized("resume.pdf", 12 * 1024 * 1024)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { .. }));
    }

    #[test]
    fn test_name_length_limit() {
        let ok_name = format!("{}.pdf", "a".repeat(251));
        assert_eq!(ok_name.len(), 255);
        assert!(accept(sized(&ok_name, 10)).is_ok());

        let long_name = format!("{}.pdf", "a".repeat(252));
        let err = accept(sized(&long_name, 10)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NameTooLong {
                length: 256,
                limit: 255
            }
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let name = format!("{}.pdf", "é".repeat(251));
        assert!(name.len() > 255);
        assert!(accept(sized(&name, 10)).is_ok());
    }

    #[test]
    fn test_wrong_extension_rejected() {
        for name in ["resume.txt", "resume.doc", "resume.pdf.exe", "resume"] {
            let err = accept(sized(name, 2048)).unwrap_err();
            assert!(
                matches!(err, ValidationError::UnsupportedExtension { .. }),
                "{} should fail on extension",
                name
            );
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let long_txt = format!("{}.txt", "a".repeat(300));
        let err = accept(sized(&long_txt, MAX_FILE_SIZE_BYTES * 2)).unwrap_err();
        assert_eq!(err.code(), "FILE_TOO_LARGE");

        let err = accept(sized(&long_txt, 10)).unwrap_err();
        assert_eq!(err.code(), "FILE_NAME_TOO_LONG");
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for("a.PDF"), PDF_MIME);
        assert_eq!(content_type_for("a.docx"), DOCX_MIME);
        assert_eq!(content_type_for("a.txt"), FALLBACK_MIME);
    }

    #[tokio::test]
    async fn test_path_selection_reads_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, b"%PDF-1.7 fake").await.unwrap();

        let selected = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(selected.file_name, "resume.pdf");
        assert_eq!(selected.size_bytes, 13);

        let candidate = accept(selected).unwrap();
        assert_eq!(candidate.mime_hint(), PDF_MIME);
        assert_eq!(candidate.into_bytes().await.unwrap(), b"%PDF-1.7 fake");
    }

    #[tokio::test]
    async fn test_file_grown_after_acceptance_is_not_sent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, vec![1u8; 1024]).await.unwrap();

        let candidate = accept(SelectedFile::from_path(&path).await.unwrap()).unwrap();
        tokio::fs::write(&path, vec![1u8; 11 * 1024 * 1024]).await.unwrap();

        let err = candidate.into_bytes().await.unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::FileChanged {
                validated_bytes: 1024,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_directory_selection_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::create_dir(&path).await.unwrap();

        let err = SelectedFile::from_path(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
