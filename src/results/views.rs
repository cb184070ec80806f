// src/results/views.rs
//! Read-only projections of a report, one per results tab

use serde::Serialize;

use crate::types::{AnalysisReport, ContactInfo, DetectedCategory, JobMatch, Project};

pub const MISSING_SKILLS_DISPLAY_LIMIT: usize = 5;
const DEFAULT_CANDIDATE_NAME: &str = "Candidate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Fair => "Fair Match",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView<'a> {
    pub candidate_name: &'a str,
    pub contact: &'a ContactInfo,
    pub compatibility_score: u8,
    pub rating: ScoreRating,
    pub skill_count: usize,
    pub project_count: usize,
    pub experience_count: usize,
    pub language_label: String,
    pub detected_categories: &'a [DetectedCategory],
    pub strengths: &'a [String],
    pub weaknesses: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatchView<'a> {
    pub job_title: &'a str,
    pub category: &'a str,
    pub match_percentage: f64,
    pub matching_skills: &'a [String],
    /// At most five entries; the report keeps the full list.
    pub missing_skills: &'a [String],
    pub hidden_missing_skills: usize,
    pub match_reasons: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroupView<'a> {
    pub label: String,
    pub skills: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsView<'a> {
    pub total_skills: u32,
    pub diversity_score: f64,
    pub groups: Vec<SkillGroupView<'a>>,
    pub projects: &'a [Project],
}

pub fn overview(report: &AnalysisReport) -> OverviewView<'_> {
    let data = &report.extracted_data;
    let candidate_name = match data.name.trim() {
        "" => DEFAULT_CANDIDATE_NAME,
        _ => data.name.as_str(),
    };

    OverviewView {
        candidate_name,
        contact: &data.contact_info,
        compatibility_score: report.compatibility_score,
        rating: ScoreRating::from_score(report.compatibility_score),
        skill_count: data.skills.len(),
        project_count: data.projects.len(),
        experience_count: data.experience.len(),
        language_label: data.language.to_uppercase(),
        detected_categories: &report.detected_categories,
        strengths: &report.analysis.strengths,
        weaknesses: &report.analysis.weaknesses,
    }
}

/// Matches in the order the service ranked them
pub fn jobs(report: &AnalysisReport) -> Vec<JobMatchView<'_>> {
    report.job_matches.iter().map(job_view).collect()
}

fn job_view(job: &JobMatch) -> JobMatchView<'_> {
    let shown = job.missing_skills.len().min(MISSING_SKILLS_DISPLAY_LIMIT);
    JobMatchView {
        job_title: &job.job_title,
        category: &job.category,
        match_percentage: job.match_percentage,
        matching_skills: &job.matching_skills,
        missing_skills: &job.missing_skills[..shown],
        hidden_missing_skills: job.missing_skills.len() - shown,
        match_reasons: &job.match_reasons,
    }
}

pub fn skills(report: &AnalysisReport) -> SkillsView<'_> {
    let skill_analysis = &report.analysis.skill_analysis;
    SkillsView {
        total_skills: skill_analysis.total_skills,
        diversity_score: skill_analysis.diversity_score,
        groups: skill_analysis
            .categorized_skills
            .iter()
            .map(|(category, members)| SkillGroupView {
                label: category_label(category),
                skills: members,
            })
            .collect(),
        projects: &report.extracted_data.projects,
    }
}

pub fn suggestions(report: &AnalysisReport) -> &[String] {
    &report.suggestions
}

/// "soft_skills" -> "SOFT SKILLS"
pub fn category_label(category: &str) -> String {
    category.replace('_', " ").to_uppercase()
}
