pub mod report;

pub use report::{
    Analysis, AnalysisReport, ContactInfo, DetectedCategory, Education, Experience,
    ExtractedData, JobMatch, Project, ProjectAnalysis, SkillAnalysis,
};
