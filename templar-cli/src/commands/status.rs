//! `templar status` — convergence visibility for declared templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use templar_sync::status::{check, TemplateState};
use templar_sync::Snapshot;

/// Arguments for `templar status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to the manifest (defaults to ~/.templar/manifest.yaml).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct TemplateStatus {
    name: String,
    state: TemplateState,
}

#[derive(Serialize)]
struct StatusReportJson {
    summary: StatusSummaryJson,
    templates: Vec<TemplateStatusJson>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    declared: usize,
    remote: usize,
    pending: usize,
}

#[derive(Serialize)]
struct TemplateStatusJson {
    name: String,
    status: String,
    detail: String,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "template")]
    template: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "detail")]
    detail: String,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let (manifest, config) = super::load_manifest(self.manifest.as_ref())?;
        let snapshot = Snapshot::fetch(&config).context("failed to list remote templates")?;

        let statuses: Vec<TemplateStatus> = manifest
            .templates
            .iter()
            .map(|declared| TemplateStatus {
                name: declared.name.0.clone(),
                state: check(declared, &snapshot),
            })
            .collect();

        let pending = statuses
            .iter()
            .filter(|s| s.state != TemplateState::Current)
            .count();

        if self.json {
            let report = StatusReportJson {
                summary: StatusSummaryJson {
                    declared: statuses.len(),
                    remote: snapshot.len(),
                    pending,
                },
                templates: statuses
                    .iter()
                    .map(|s| TemplateStatusJson {
                        name: s.name.clone(),
                        status: state_label(&s.state).to_string(),
                        detail: state_detail(&s.state),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to render status JSON")?
            );
            return Ok(());
        }

        if statuses.is_empty() {
            println!("No templates declared in the manifest.");
            return Ok(());
        }

        let rows: Vec<StatusTableRow> = statuses
            .iter()
            .map(|s| StatusTableRow {
                template: s.name.clone(),
                status: colored_label(&s.state),
                detail: state_detail(&s.state),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!(
            "{} declared, {} remote, {} pending",
            statuses.len(),
            snapshot.len(),
            pending
        );
        Ok(())
    }
}

fn state_label(state: &TemplateState) -> &'static str {
    match state {
        TemplateState::Current => "current",
        TemplateState::Missing => "missing",
        TemplateState::Divergent { .. } => "divergent",
    }
}

fn state_detail(state: &TemplateState) -> String {
    match state {
        TemplateState::Current => String::new(),
        TemplateState::Missing => "not present remotely".to_string(),
        TemplateState::Divergent { fields } => format!("differs in: {}", fields.join(", ")),
    }
}

fn colored_label(state: &TemplateState) -> String {
    match state {
        TemplateState::Current => state_label(state).green().to_string(),
        TemplateState::Missing => state_label(state).red().to_string(),
        TemplateState::Divergent { .. } => state_label(state).yellow().to_string(),
    }
}
