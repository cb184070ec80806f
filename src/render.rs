// src/render.rs
//! Plain-text rendering of the active results tab

use std::fmt::Write;

use crate::results::{ActiveView, JobMatchView, OverviewView, SkillsView};

pub fn render(view: &ActiveView<'_>) -> String {
    match view {
        ActiveView::Overview(overview) => render_overview(overview),
        ActiveView::Jobs(jobs) => render_jobs(jobs),
        ActiveView::Skills(skills) => render_skills(skills),
        ActiveView::Suggestions(items) => render_suggestions(items),
    }
}

fn render_overview(view: &OverviewView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "👤 {}", view.candidate_name);
    for (icon, value) in [
        ("📧", &view.contact.email),
        ("📞", &view.contact.phone),
        ("💼", &view.contact.linkedin),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "   {} {}", icon, value);
        }
    }

    let _ = writeln!(
        out,
        "\nOverall Compatibility Score: {}% ({})",
        view.compatibility_score,
        view.rating.label()
    );
    let _ = writeln!(
        out,
        "Skills Found: {}  Projects: {}  Experience: {}  Language: {}",
        view.skill_count, view.project_count, view.experience_count, view.language_label
    );

    let _ = writeln!(out, "\n🎯 Detected Career Categories");
    if view.detected_categories.is_empty() {
        let _ = writeln!(out, "   No categories detected");
    }
    for category in view.detected_categories {
        let _ = writeln!(
            out,
            "   {} - {}% confidence, {} Match",
            category.category, category.confidence, category.match_strength
        );
    }

    push_list(&mut out, "💪 Strengths", view.strengths);
    push_list(&mut out, "⚠️ Areas for Improvement", view.weaknesses);
    out
}

fn render_jobs(jobs: &[JobMatchView<'_>]) -> String {
    let mut out = String::from("🎯 Top Job Matches\n");
    for job in jobs {
        let _ = writeln!(out, "\n{} ({}%)", job.job_title, job.match_percentage);
        if !job.category.is_empty() {
            let _ = writeln!(out, "   {}", job.category);
        }
        let _ = writeln!(out, "   ✅ Matching: {}", job.matching_skills.join(", "));
        let _ = write!(out, "   ❌ Missing: {}", job.missing_skills.join(", "));
        if job.hidden_missing_skills > 0 {
            let _ = write!(out, " (+{} more)", job.hidden_missing_skills);
        }
        out.push('\n');
        for reason in job.match_reasons {
            let _ = writeln!(out, "   • {}", reason);
        }
    }
    out
}

fn render_skills(view: &SkillsView<'_>) -> String {
    let mut out = String::from("🛠️ Skills Analysis\n");
    let _ = writeln!(
        out,
        "Total Skills: {}  Diversity Score: {}/100",
        view.total_skills, view.diversity_score
    );
    for group in &view.groups {
        let _ = writeln!(out, "\n{}\n   {}", group.label, group.skills.join(", "));
    }

    let _ = writeln!(out, "\n📁 Projects");
    for project in view.projects {
        let _ = writeln!(out, "\n{}\n   {}", project.title, project.description);
        if !project.technologies.is_empty() {
            let _ = writeln!(out, "   [{}]", project.technologies.join("] ["));
        }
    }
    out
}

fn render_suggestions(items: &[String]) -> String {
    let mut out = String::from("💡 Improvement Suggestions\n");
    for item in items {
        let _ = writeln!(out, "   💡 {}", item);
    }
    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "\n{}", heading);
    for item in items {
        let _ = writeln!(out, "   • {}", item);
    }
}
