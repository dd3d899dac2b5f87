//! Artifact export — JSON manifest and CSV schedule.
//!
//! All persisted artifacts carry a `schema_version` field. Unknown
//! versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use stakeplan_core::{PlanParams, StakingPlan, TradeRecord};

use crate::config::PlanConfig;

/// Bump when the artifact layout changes incompatibly.
pub const SCHEMA_VERSION: u32 = 1;

/// The full serialized output of one plan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanArtifact {
    pub schema_version: u32,
    pub plan_id: String,
    pub currency: String,
    pub params: PlanParams,
    pub records: Vec<TradeRecord>,
    pub daily_required: f64,
    pub weekly_required: f64,
}

impl PlanArtifact {
    pub fn from_plan(config: &PlanConfig, plan: &StakingPlan) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            plan_id: config.plan_id(),
            currency: config.plan.currency.clone(),
            params: *plan.params(),
            records: plan.records().to_vec(),
            daily_required: plan.daily_required(),
            weekly_required: plan.weekly_required(),
        }
    }
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `PlanArtifact` to pretty JSON.
pub fn export_json(artifact: &PlanArtifact) -> Result<String> {
    serde_json::to_string_pretty(artifact).context("failed to serialize PlanArtifact to JSON")
}

/// Deserialize a `PlanArtifact` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<PlanArtifact> {
    let artifact: PlanArtifact =
        serde_json::from_str(json).context("failed to deserialize PlanArtifact from JSON")?;
    if artifact.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            artifact.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(artifact)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the schedule as CSV, one row per trade.
///
/// Columns: trade, wager, profit_if_successful, cumulative_loss_before,
/// total_return_if_successful, net_profit_if_successful
pub fn export_schedule_csv(records: &[TradeRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "trade",
        "wager",
        "profit_if_successful",
        "cumulative_loss_before",
        "total_return_if_successful",
        "net_profit_if_successful",
    ])?;

    for r in records {
        wtr.write_record([
            &r.trade_number.to_string(),
            &format!("{:.2}", r.wager),
            &format!("{:.2}", r.profit_if_successful),
            &format!("{:.2}", r.cumulative_loss_before),
            &format!("{:.2}", r.total_return_if_successful),
            &format!("{:.2}", r.net_profit_if_successful),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

// ─── Artifact set ───────────────────────────────────────────────────

/// Save the full artifact set for a single plan run.
///
/// Creates a directory named `plan_{id_prefix}_{timestamp}/` under
/// `output_dir` containing:
/// - `manifest.json` — the full `PlanArtifact`
/// - `schedule.csv` — one row per trade
///
/// Returns the path to the created directory.
pub fn save_artifacts(artifact: &PlanArtifact, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!(
        "plan_{}_{}",
        &artifact.plan_id[..8],
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_json(artifact)?;
    std::fs::write(run_dir.join("manifest.json"), &json)?;

    let schedule_csv = export_schedule_csv(&artifact.records)?;
    std::fs::write(run_dir.join("schedule.csv"), &schedule_csv)?;

    Ok(run_dir)
}

/// Load a `PlanArtifact` back from an artifact directory's manifest.json.
///
/// Rejects unknown schema versions.
pub fn load_artifacts(dir: &Path) -> Result<PlanArtifact> {
    let manifest_path = dir.join("manifest.json");
    let json = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    import_json(&json)
}
