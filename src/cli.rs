// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::core::{AnalysisClient, ConfigManager};
use crate::render::render;
use crate::results::{Tab, EXPORT_FILE_NAME};
use crate::session::{Phase, Session};
use crate::upload::SelectedFile;

#[derive(Parser)]
#[command(name = "resume-analyser")]
#[command(about = "Submit a resume to the analysis service and browse the report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate and submit a PDF or DOCX resume
    Analyse {
        file: PathBuf,
        /// Report section to print: overview, jobs, skills or suggestions
        #[arg(long, default_value = "overview")]
        tab: Tab,
        /// Show the untranslated text when the service returned both
        #[arg(long)]
        original: bool,
        /// Write the export document to this file or directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Check that the analysis service is reachable
    Health,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ConfigManager::load()?;
    let client = AnalysisClient::new(config.service)?;

    match cli.command {
        Command::Analyse {
            file,
            tab,
            original,
            export,
        } => analyse(client, &file, tab, original, export.as_deref()).await,
        Command::Health => {
            let status = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(())
        }
    }
}

async fn analyse(
    client: AnalysisClient,
    file: &Path,
    tab: Tab,
    original: bool,
    export: Option<&Path>,
) -> Result<()> {
    let selected = SelectedFile::from_path(file)
        .await
        .with_context(|| format!("Failed to open {}", file.display()))?;

    let mut session = Session::new(client);
    let outcome = session
        .select_files(vec![selected], |phase| {
            if phase == Phase::Pending {
                println!("Analysing your resume...");
            }
        })
        .await;

    if let Err(rejection) = outcome {
        error!("Selection rejected: {}", rejection);
        anyhow::bail!("{}", rejection.user_message());
    }

    if let Some(failure) = session.last_failure() {
        anyhow::bail!("{} ({})", failure.user_message(), failure);
    }

    let results = session.results_mut();
    results.select_tab(tab);
    if original && !results.toggle_original() {
        info!("Original text requested but the report carries only one version");
        println!("(original text not available for this report)");
    }

    if let Some(view) = results.active_view() {
        println!("{}", render(&view));
    }

    if let Some(target) = export {
        if let Some(document) = results.export() {
            let path = export_path(target);
            let json = document.to_pretty_json()?;
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("📥 Report saved to {}", path.display());
        }
    }

    Ok(())
}

/// Directories receive the default export file name
fn export_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}
