// src/results/mod.rs
//! Result view controller - which report section is visible, and what it shows

pub mod export;
pub mod views;

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::types::AnalysisReport;

pub use export::{export, ExportDocument, ExportSection, EXPORT_FILE_NAME};
pub use views::{JobMatchView, OverviewView, ScoreRating, SkillsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Jobs,
    Skills,
    Suggestions,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Jobs, Tab::Skills, Tab::Suggestions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Jobs => "jobs",
            Self::Skills => "skills",
            Self::Suggestions => "suggestions",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown tab '{}', expected one of: overview, jobs, skills, suggestions",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    NoReport,
    Showing { tab: Tab, show_original: bool },
}

/// Derived view of the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView<'a> {
    Overview(OverviewView<'a>),
    Jobs(Vec<JobMatchView<'a>>),
    Skills(SkillsView<'a>),
    Suggestions(&'a [String]),
}

#[derive(Debug, Default)]
pub struct ResultViewController {
    report: Option<AnalysisReport>,
    show_original: bool,
    tab: Tab,
}

impl ResultViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        match self.report {
            None => ViewState::NoReport,
            Some(_) => ViewState::Showing {
                tab: self.tab,
                show_original: self.show_original,
            },
        }
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    /// Report as received from the service
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Payload currently on screen: the original text when toggled and available
    pub fn displayed(&self) -> Option<&AnalysisReport> {
        let report = self.report.as_ref()?;
        match (&report.original, self.show_original) {
            (Some(original), true) => Some(original),
            _ => Some(report),
        }
    }

    /// Replace any installed report and show its overview
    pub fn install(&mut self, report: AnalysisReport) {
        debug!(
            "Installing report for '{}' ({} job matches)",
            report.extracted_data.name,
            report.job_matches.len()
        );
        self.report = Some(report);
        self.tab = Tab::Overview;
        self.show_original = false;
    }

    /// Returns true when the visible tab changed
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.report.is_none() || self.tab == tab {
            return false;
        }
        debug!("Switching results tab {} -> {}", self.tab, tab);
        self.tab = tab;
        true
    }

    /// Switch between translated and original text without refetching.
    /// Returns true when the display changed.
    pub fn toggle_original(&mut self) -> bool {
        match &self.report {
            Some(report) if report.has_original() => {
                self.show_original = !self.show_original;
                true
            }
            _ => false,
        }
    }

    pub fn can_toggle_original(&self) -> bool {
        self.report.as_ref().is_some_and(|r| r.has_original())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn active_view(&self) -> Option<ActiveView<'_>> {
        let report = self.displayed()?;
        Some(match self.tab {
            Tab::Overview => ActiveView::Overview(views::overview(report)),
            Tab::Jobs => ActiveView::Jobs(views::jobs(report)),
            Tab::Skills => ActiveView::Skills(views::skills(report)),
            Tab::Suggestions => ActiveView::Suggestions(views::suggestions(report)),
        })
    }

    pub fn export(&self) -> Option<ExportDocument<'_>> {
        self.report.as_ref().map(export::export)
    }
}
