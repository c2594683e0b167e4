//! Output Rendering
//!
//! Text for people, JSON for scripts. Renderers return strings; the command
//! handlers decide where they go.

use serde_json::{json, Value};

use crate::application::SyncOutcome;
use crate::domain::entities::{Client, ServiceDescription};
use crate::domain::value_objects::{ClientId, Warning};
use crate::error::SyncError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render_outcome(format: OutputFormat, verb: &str, outcome: &SyncOutcome) -> String {
    match format {
        OutputFormat::Json => json!({
            "status": "ok",
            "action": verb,
            "description": description_json(&outcome.description),
            "added": outcome.changes.added_names(),
            "removed": outcome.changes.removed_names(),
            "accepted_warnings": outcome.accepted_warnings,
        })
        .to_string(),
        OutputFormat::Text => {
            let d = &outcome.description;
            let mut out = format!(
                "✓ {} service description {} ({}) for {}\n",
                verb, d.id, d.url, d.client_id
            );
            for name in &outcome.changes.added {
                out.push_str(&format!("  + {}\n", name));
            }
            for name in &outcome.changes.removed {
                out.push_str(&format!("  - {}\n", name));
            }
            for warning in &outcome.accepted_warnings {
                out.push_str(&format!("  ! {} (ignored)\n", warning_line(warning)));
            }
            out
        }
    }
}

pub fn render_descriptions(
    format: OutputFormat,
    verb: &str,
    descriptions: &[ServiceDescription],
) -> String {
    match format {
        OutputFormat::Json => json!({
            "status": "ok",
            "action": verb,
            "descriptions": descriptions.iter().map(description_json).collect::<Vec<_>>(),
        })
        .to_string(),
        OutputFormat::Text => descriptions
            .iter()
            .map(|d| format!("✓ {} service description {} ({})\n", verb, d.id, d.url))
            .collect(),
    }
}

pub fn render_client(format: OutputFormat, client: &Client) -> String {
    match format {
        OutputFormat::Json => json!({
            "client": client.id.to_string(),
            "descriptions": client.descriptions().iter().map(description_json).collect::<Vec<_>>(),
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = format!("{}\n", client.id);
            if client.descriptions().is_empty() {
                out.push_str("  (no service descriptions)\n");
            }
            for d in client.descriptions() {
                let state = match (&d.disabled, &d.disabled_notice) {
                    (false, _) => "enabled".to_string(),
                    (true, Some(notice)) => format!("disabled: {}", notice),
                    (true, None) => "disabled".to_string(),
                };
                out.push_str(&format!(
                    "  [{}] {} {} ({}) refreshed {}\n",
                    d.id,
                    d.kind,
                    d.url,
                    state,
                    d.refreshed_at.to_rfc3339()
                ));
                for op in d.operations() {
                    out.push_str(&format!(
                        "      {} -> {} [{}s]",
                        op.full_name(),
                        op.url,
                        op.timeout
                    ));
                    if let Some(title) = &op.title {
                        out.push_str(&format!(" \"{}\"", title));
                    }
                    out.push('\n');
                }
            }
            out
        }
    }
}

pub fn render_clients(format: OutputFormat, ids: &[ClientId]) -> String {
    match format {
        OutputFormat::Json => {
            let ids: Vec<String> = ids.iter().map(ClientId::to_string).collect();
            json!({ "clients": ids }).to_string()
        }
        OutputFormat::Text => ids.iter().map(|id| format!("{}\n", id)).collect(),
    }
}

pub fn render_rejection(format: OutputFormat, error: &SyncError) -> String {
    let rejection = error.rejection();
    match format {
        OutputFormat::Json => json!({
            "status": "rejected",
            "error": rejection,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = format!("✗ {}: {}\n", rejection.code, rejection.message);
            for warning in &rejection.warnings {
                out.push_str(&format!("  ! {}\n", warning_line(warning)));
            }
            if !rejection.warnings.is_empty() {
                out.push_str("  Re-run with --ignore-warnings to accept them.\n");
            }
            out
        }
    }
}

fn warning_line(warning: &Warning) -> String {
    if warning.metadata.is_empty() {
        warning.code.clone()
    } else {
        format!("{}: {}", warning.code, warning.metadata.join(", "))
    }
}

fn description_json(d: &ServiceDescription) -> Value {
    json!({
        "id": d.id.value(),
        "client": d.client_id.to_string(),
        "kind": d.kind.as_str(),
        "url": d.url,
        "disabled": d.disabled,
        "disabled_notice": d.disabled_notice,
        "refreshed_at": d.refreshed_at.to_rfc3339(),
        "services": d.operations().iter().map(|op| json!({
            "full_name": op.full_name().to_string(),
            "code": op.code,
            "version": op.version,
            "title": op.title,
            "url": op.url,
            "timeout": op.timeout,
        })).collect::<Vec<_>>(),
    })
}
