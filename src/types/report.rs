// src/types/report.rs
//! Analysis report structures returned by the resume analysis service

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ===== Report Root =====

/// Full structured result for one submitted resume.
///
/// The service omits whole sections on some paths (notably when it answers
/// with an English translation), so every field falls back to its default.
/// Fields this client does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub extracted_data: ExtractedData,
    pub analysis: Analysis,
    pub job_matches: Vec<JobMatch>,
    pub detected_categories: Vec<DetectedCategory>,
    pub compatibility_score: u8,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_to: Option<String>,
    /// Untranslated payload, when the service ships both versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<Box<AnalysisReport>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// The JSON document exactly as the service sent it.
    #[serde(skip)]
    received: Option<Value>,
}

impl AnalysisReport {
    /// Parse a service document, keeping the received JSON alongside the typed view
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let mut report: Self = serde_json::from_value(value.clone())?;
        if let Some(original) = value.get("original").filter(|v| !v.is_null()) {
            report.original = Some(Box::new(Self::from_value(original.clone())?));
        }
        report.received = Some(value);
        Ok(report)
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// A top-level section as received, if this report came from the service
    pub fn received_section(&self, key: &str) -> Option<&Value> {
        self.received.as_ref()?.get(key)
    }

    pub fn is_translated(&self) -> bool {
        self.translated_to.is_some()
    }

    pub fn has_original(&self) -> bool {
        self.original.is_some()
    }
}

// ===== Extracted Data =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedData {
    pub name: String,
    pub contact_info: ContactInfo,
    pub raw_text: String,
    pub language: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== Analysis =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub skill_analysis: SkillAnalysis,
    pub project_analysis: ProjectAnalysis,
    pub compatibility_score: u8,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillAnalysis {
    /// Category label to skills, in the order the service listed them.
    pub categorized_skills: IndexMap<String, Vec<String>>,
    pub total_skills: u32,
    pub diversity_score: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAnalysis {
    pub project_count: u32,
    pub technology_diversity: f64,
    pub complexity_score: f64,
    pub technologies_used: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== Job Matching =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMatch {
    pub job_title: String,
    pub category: String,
    pub similarity_score: f64,
    pub match_percentage: f64,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedCategory {
    pub category: String,
    pub confidence: f64,
    pub match_strength: String,
}
