// src/session.rs
//! Thin coordinator between the upload and results controllers

use tracing::{info, warn};

use crate::core::AnalysisService;
use crate::error::{SubmissionError, UploadRejection};
use crate::results::ResultViewController;
use crate::upload::{SelectedFile, UploadController, UploadEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFile,
    Pending,
    ShowingReport,
}

pub struct Session<S> {
    upload: UploadController<S>,
    results: ResultViewController,
    pending: bool,
    last_failure: Option<SubmissionError>,
}

impl<S: AnalysisService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            upload: UploadController::new(service),
            results: ResultViewController::new(),
            pending: false,
            last_failure: None,
        }
    }

    pub fn phase(&self) -> Phase {
        phase_of(self.pending, &self.results)
    }

    pub fn results(&self) -> &ResultViewController {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut ResultViewController {
        &mut self.results
    }

    /// Failure from the most recent submission, cleared when a new one starts
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    /// Route one file selection through the upload controller.
    /// `on_phase` sees every phase entered while the selection runs, so
    /// `Pending` is reported as soon as the submission starts.
    /// A failed submission leaves the results view as it was.
    pub async fn select_files<F>(
        &mut self,
        selection: Vec<SelectedFile>,
        mut on_phase: F,
    ) -> Result<(), UploadRejection>
    where
        F: FnMut(Phase),
    {
        let Self {
            upload,
            results,
            pending,
            last_failure,
        } = self;

        upload
            .handle_selection(selection, |event| {
                match event {
                    UploadEvent::Started => {
                        *pending = true;
                        *last_failure = None;
                    }
                    UploadEvent::Succeeded(report) => {
                        info!("Analysis complete, showing report");
                        results.install(*report);
                        *pending = false;
                    }
                    UploadEvent::Failed(error) => {
                        warn!("Analysis failed: {}", error);
                        *last_failure = Some(error);
                        *pending = false;
                    }
                }
                on_phase(phase_of(*pending, results));
            })
            .await
    }

    /// "Analyse another resume"
    pub fn reset(&mut self) {
        self.results.reset();
        self.pending = false;
        self.last_failure = None;
    }
}

fn phase_of(pending: bool, results: &ResultViewController) -> Phase {
    if pending {
        Phase::Pending
    } else if results.has_report() {
        Phase::ShowingReport
    } else {
        Phase::AwaitingFile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{Tab, ViewState};
    use crate::types::AnalysisReport;
    use crate::upload::UploadCandidate;
    use async_trait::async_trait;

    struct ScriptedService {
        succeed: bool,
    }

    #[async_trait]
    impl AnalysisService for ScriptedService {
        async fn analyse(
            &self,
            candidate: UploadCandidate,
        ) -> Result<AnalysisReport, SubmissionError> {
            if self.succeed {
                let mut report = AnalysisReport::default();
                report.extracted_data.name = candidate.file_name().to_string();
                Ok(report)
            } else {
                Err(SubmissionError::Timeout { seconds: 30 })
            }
        }
    }

    fn docx() -> Vec<SelectedFile> {
        vec![SelectedFile::from_bytes("resume.docx", vec![0u8; 500 * 1024])]
    }

    #[tokio::test]
    async fn test_success_shows_overview() {
        let mut session = Session::new(ScriptedService { succeed: true });
        assert_eq!(session.phase(), Phase::AwaitingFile);

        session.select_files(docx(), |_| {}).await.unwrap();

        assert_eq!(session.phase(), Phase::ShowingReport);
        assert_eq!(
            session.results().state(),
            ViewState::Showing {
                tab: Tab::Overview,
                show_original: false
            }
        );
    }

    #[tokio::test]
    async fn test_failure_clears_pending_and_keeps_prior_state() {
        let mut session = Session::new(ScriptedService { succeed: false });
        session.select_files(docx(), |_| {}).await.unwrap();

        assert_eq!(session.phase(), Phase::AwaitingFile);
        assert_eq!(session.results().state(), ViewState::NoReport);
        assert!(session.last_failure().unwrap().is_timeout());
    }

    #[tokio::test]
    async fn test_failure_after_report_keeps_report_visible() {
        let mut session = Session::new(ScriptedService { succeed: true });
        session.select_files(docx(), |_| {}).await.unwrap();
        session.results_mut().select_tab(Tab::Jobs);

        let mut failing = Session::new(ScriptedService { succeed: false });
        failing
            .results_mut()
            .install(session.results().report().unwrap().clone());
        failing.results_mut().select_tab(Tab::Jobs);
        failing.select_files(docx(), |_| {}).await.unwrap();

        assert_eq!(failing.phase(), Phase::ShowingReport);
        assert_eq!(
            failing.results().state(),
            ViewState::Showing {
                tab: Tab::Jobs,
                show_original: false
            }
        );
    }

    #[tokio::test]
    async fn test_validation_rejection_changes_nothing() {
        let mut session = Session::new(ScriptedService { succeed: true });
        let mut phases = Vec::new();
        let err = session
            .select_files(
                vec![SelectedFile::from_bytes("resume.txt", vec![0u8; 2048])],
                |phase| phases.push(phase),
            )
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Please upload a PDF or DOCX file");
        assert_eq!(session.phase(), Phase::AwaitingFile);
        assert!(session.last_failure().is_none());
        assert!(phases.is_empty());
    }

    #[tokio::test]
    async fn test_pending_is_reported_before_the_outcome() {
        let mut session = Session::new(ScriptedService { succeed: true });
        let mut phases = Vec::new();
        session
            .select_files(docx(), |phase| phases.push(phase))
            .await
            .unwrap();
        assert_eq!(phases, [Phase::Pending, Phase::ShowingReport]);

        let mut failing = Session::new(ScriptedService { succeed: false });
        let mut phases = Vec::new();
        failing
            .select_files(docx(), |phase| phases.push(phase))
            .await
            .unwrap();
        assert_eq!(phases, [Phase::Pending, Phase::AwaitingFile]);
    }

    #[tokio::test]
    async fn test_reset_returns_to_awaiting_file() {
        let mut session = Session::new(ScriptedService { succeed: true });
        session.select_files(docx(), |_| {}).await.unwrap();
        session.reset();
        assert_eq!(session.phase(), Phase::AwaitingFile);
    }
}
