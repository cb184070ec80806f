// src/upload/mod.rs
//! Upload controller - gatekeeps one file per selection and submits it

pub mod policy;

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::core::AnalysisService;
use crate::error::{SubmissionError, UploadRejection};
use crate::types::AnalysisReport;

pub use policy::{accept, FileContent, SelectedFile, UploadCandidate};

/// Outcome signals for a selection that passed the acceptance policy.
/// `Started` is always followed by exactly one of the other two.
#[derive(Debug)]
pub enum UploadEvent {
    Started,
    Succeeded(Box<AnalysisReport>),
    Failed(SubmissionError),
}

pub struct UploadController<S> {
    service: S,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: AnalysisService> UploadController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// True while a submission is outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle one file selection event.
    ///
    /// An empty selection does nothing. Only the first file of a selection is
    /// considered. Rejections (busy controller or policy failure) are returned
    /// as errors and emit no events; otherwise `emit` sees `Started` and then
    /// the single outcome of the submission.
    pub async fn handle_selection<F>(
        &self,
        selection: Vec<SelectedFile>,
        mut emit: F,
    ) -> Result<(), UploadRejection>
    where
        F: FnMut(UploadEvent),
    {
        let Some(file) = selection.into_iter().next() else {
            debug!("Empty file selection ignored");
            return Ok(());
        };

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!("Selection of {} rejected: submission outstanding", file.file_name);
            UploadRejection::Busy
        })?;

        let candidate = accept(file).map_err(|e| {
            warn!("Upload rejected ({}): {}", e.code(), e);
            e
        })?;

        info!(
            "Submitting {} ({} bytes) for analysis",
            candidate.file_name(),
            candidate.size_bytes()
        );
        emit(UploadEvent::Started);

        match self.service.analyse(candidate).await {
            Ok(report) => emit(UploadEvent::Succeeded(Box::new(report))),
            Err(e) => emit(UploadEvent::Failed(e)),
        }

        Ok(())
    }
}
