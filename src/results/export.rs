// src/results/export.rs
use serde::Serialize;
use serde_json::Value;

use crate::types::{Analysis, AnalysisReport, JobMatch};

pub const EXPORT_FILE_NAME: &str = "resume_analysis_report.json";

/// A report section as received from the service, or the typed section for
/// reports assembled in process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportSection<'a, T> {
    Received(&'a Value),
    Built(&'a T),
}

impl<'a, T> ExportSection<'a, T> {
    fn pick(report: &'a AnalysisReport, key: &str, built: &'a T) -> Self {
        report
            .received_section(key)
            .map(Self::Received)
            .unwrap_or(Self::Built(built))
    }
}

/// Reduced, downloadable form of a report. Exactly these five fields.
///
/// `analysis` and `job_matches` are written as the service sent them, so
/// sections it left out stay out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument<'a> {
    pub name: &'a str,
    pub compatibility_score: u8,
    pub job_matches: ExportSection<'a, Vec<JobMatch>>,
    pub suggestions: &'a [String],
    pub analysis: ExportSection<'a, Analysis>,
}

impl ExportDocument<'_> {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn export(report: &AnalysisReport) -> ExportDocument<'_> {
    ExportDocument {
        name: &report.extracted_data.name,
        compatibility_score: report.compatibility_score,
        job_matches: ExportSection::pick(report, "job_matches", &report.job_matches),
        suggestions: &report.suggestions,
        analysis: ExportSection::pick(report, "analysis", &report.analysis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::views;
    use serde_json::json;

    fn translated_report() -> AnalysisReport {
        AnalysisReport::from_value(json!({
            "extracted_data": { "name": "Jonas Berg", "language": "sv" },
            "analysis": { "compatibility_score": 70, "suggestions": ["Quantify impact"] },
            "job_matches": [{
                "job_title": "Data Analyst",
                "match_percentage": 70,
                "missing_skills": ["Tableau", "R", "SAS", "Looker", "dbt", "Airflow"]
            }],
            "compatibility_score": 70,
            "suggestions": ["Quantify impact"],
            "original_language": "sv",
            "translated_to": "en",
            "ats_analysis": { "ats_score": 81 }
        }))
        .unwrap()
    }

    #[test]
    fn test_export_has_exactly_five_fields() {
        let report = translated_report();
        let value = serde_json::to_value(export(&report)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["analysis", "compatibility_score", "job_matches", "name", "suggestions"]
        );
        assert_eq!(value["name"], "Jonas Berg");
    }

    #[test]
    fn test_export_after_truncated_render_keeps_full_list() {
        let report = translated_report();
        let rendered = views::jobs(&report);
        assert_eq!(rendered[0].missing_skills.len(), 5);

        let json = export(&report).to_pretty_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["job_matches"][0]["missing_skills"].as_array().unwrap().len(), 6);
        assert!(json.contains("\n  \"name\""));
    }

    #[test]
    fn test_export_writes_sections_as_received() {
        let received = json!({
            "extracted_data": { "name": "Lea Roth" },
            "analysis": {
                "strengths": ["Clear structure"],
                "weaknesses": [],
                "skill_analysis": { "skills_breakdown": { "technical": 4 } }
            },
            "job_matches": [{
                "job_title": "Backend Developer",
                "match_percentage": 61.5,
                "matching_skills": ["Go"],
                "missing_skills": ["Kubernetes"]
            }],
            "compatibility_score": 61,
            "suggestions": []
        });
        let report = AnalysisReport::from_value(received.clone()).unwrap();

        let value = serde_json::to_value(export(&report)).unwrap();

        assert_eq!(value["analysis"], received["analysis"]);
        assert_eq!(value["job_matches"], received["job_matches"]);
        assert!(value["analysis"].get("project_analysis").is_none());
        assert!(value["job_matches"][0].get("required_skills").is_none());
    }

    #[test]
    fn test_export_of_assembled_report_uses_typed_sections() {
        let mut report = AnalysisReport::default();
        report.extracted_data.name = "Sam".into();
        report.analysis.strengths = vec!["Concise".into()];

        let value = serde_json::to_value(export(&report)).unwrap();

        assert_eq!(value["analysis"]["strengths"], json!(["Concise"]));
        assert_eq!(value["job_matches"], json!([]));
    }
}
