//! Resume analyser client: validates and submits a resume to the analysis
//! service, then exposes the returned report through a tabbed results view.

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod results;
pub mod session;
pub mod types;
pub mod upload;

pub use crate::core::{AnalysisClient, AnalysisService, ConfigManager, ServiceConfig};
pub use error::{FailureKind, SubmissionError, UploadRejection, ValidationError};
pub use results::{ResultViewController, Tab, ViewState};
pub use session::{Phase, Session};
pub use types::AnalysisReport;
pub use upload::{SelectedFile, UploadCandidate, UploadController, UploadEvent};
