// src/error.rs
use thiserror::Error;

/// Message shown for every failed submission, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error analysing resume. Please try again.";

/// Acceptance policy violations. Never reach the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("file is {size_bytes} bytes, limit is {limit_bytes} bytes")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("file name is {length} characters, limit is {limit}")]
    NameTooLong { length: usize, limit: usize },
    #[error("unsupported file type: {file_name}")]
    UnsupportedExtension { file_name: String },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "FILE_TOO_LARGE",
            Self::NameTooLong { .. } => "FILE_NAME_TOO_LONG",
            Self::UnsupportedExtension { .. } => "FILE_WRONG_FORMAT",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "File size must be less than 10MB",
            Self::NameTooLong { .. } => "Filename too long",
            Self::UnsupportedExtension { .. } => "Please upload a PDF or DOCX file",
        }
    }
}

/// Why a selection was turned away before any submission started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("an analysis is already in progress")]
    Busy,
}

impl UploadRejection {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.user_message(),
            Self::Busy => "Please wait for the current analysis to finish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Service,
}

/// A submission that started but did not produce a report.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("response exceeded {limit_bytes} bytes")]
    ResponseTooLarge { limit_bytes: u64 },
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("failed to read {file_name}: {source}")]
    ReadFile {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file_name} grew past the {validated_bytes} bytes it was accepted at")]
    FileChanged {
        file_name: String,
        validated_bytes: u64,
    },
}

impl SubmissionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Status { .. } | Self::MalformedBody(_) => FailureKind::Service,
            Self::Timeout { .. }
            | Self::Transport(_)
            | Self::ResponseTooLarge { .. }
            | Self::ReadFile { .. }
            | Self::FileChanged { .. } => FailureKind::Transport,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_codes_identify_rule() {
        let size = ValidationError::TooLarge {
            size_bytes: 11,
            limit_bytes: 10,
        };
        let name = ValidationError::NameTooLong {
            length: 300,
            limit: 255,
        };
        let ext = ValidationError::UnsupportedExtension {
            file_name: "resume.txt".to_string(),
        };

        assert_eq!(size.code(), "FILE_TOO_LARGE");
        assert_eq!(name.code(), "FILE_NAME_TOO_LONG");
        assert_eq!(ext.code(), "FILE_WRONG_FORMAT");
        assert_eq!(ext.user_message(), "Please upload a PDF or DOCX file");
    }

    #[test]
    fn test_submission_failures_share_generic_message() {
        let timeout = SubmissionError::Timeout { seconds: 30 };
        let status = SubmissionError::Status {
            status: 500,
            body: "boom".to_string(),
        };

        assert_eq!(timeout.kind(), FailureKind::Transport);
        assert_eq!(status.kind(), FailureKind::Service);
        assert_eq!(timeout.user_message(), status.user_message());
        assert!(timeout.is_timeout());
    }
}
