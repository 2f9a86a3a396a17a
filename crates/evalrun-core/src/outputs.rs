use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use evalrun_parser::Prompt;
use tracing::debug;

use crate::error::Result;

pub const MANIFEST_FILE_NAME: &str = "prompt_manifest.csv";
pub const SCORING_FILE_NAME: &str = "scoring_sheet.csv";

const MANIFEST_HEADER: [&str; 3] = ["task_id", "prompt_id", "prompt_text"];

/// Column contract shared with downstream aggregation tooling. Names and
/// order are load-bearing; everything past `prompt_id` is filled by raters.
const SCORING_HEADER: [&str; 15] = [
    "sample_id",
    "task_id",
    "prompt_id",
    "model_a",
    "model_b",
    "winner",
    "adherence_1to5",
    "temporal_1to5",
    "identity_1to5",
    "realism_1to5",
    "edit_precision_1to5",
    "primary_tag",
    "secondary_tags",
    "notes",
    "rater_id",
];

/// Locations and counts produced by one run preparation.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub run_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub scoring_path: PathBuf,
    pub prompt_count: usize,
}

/// Default run directory: `runs/<YYYY-MM-DD>` for the local calendar date.
pub fn default_run_dir() -> PathBuf {
    let run_date = Local::now().format("%Y-%m-%d").to_string();
    Path::new("runs").join(run_date)
}

/// Write both run artifacts under `run_dir`, creating it as needed.
pub fn prepare_run(prompts: &[Prompt], run_dir: &Path) -> Result<RunArtifacts> {
    let manifest_path = run_dir.join(MANIFEST_FILE_NAME);
    let scoring_path = run_dir.join(SCORING_FILE_NAME);

    write_manifest(prompts, &manifest_path)?;
    write_scoring_sheet(prompts, &scoring_path)?;

    Ok(RunArtifacts {
        run_dir: run_dir.to_path_buf(),
        manifest_path,
        scoring_path,
        prompt_count: prompts.len(),
    })
}

/// Write the prompt manifest: header plus one row per selected prompt.
pub fn write_manifest(prompts: &[Prompt], out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;

    let mut writer = csv::Writer::from_path(out_path)?;
    writer.write_record(MANIFEST_HEADER)?;
    for prompt in prompts {
        writer.write_record([
            prompt.task_id.as_str(),
            &prompt.prompt_id.to_string(),
            &prompt.text,
        ])?;
    }
    writer.flush()?;

    debug!(path = %out_path.display(), rows = prompts.len(), "wrote prompt manifest");
    Ok(())
}

/// Write the blank scoring sheet, pre-seeding identifier columns only.
pub fn write_scoring_sheet(prompts: &[Prompt], out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;

    let mut writer = csv::Writer::from_path(out_path)?;
    writer.write_record(SCORING_HEADER)?;
    for (index, prompt) in prompts.iter().enumerate() {
        let mut record = Vec::with_capacity(SCORING_HEADER.len());
        record.push(sample_id(index + 1));
        record.push(prompt.task_id.to_string());
        record.push(prompt.prompt_id.to_string());
        // Rater columns stay blank until scoring happens by hand.
        record.resize(SCORING_HEADER.len(), String::new());
        writer.write_record(&record)?;
    }
    writer.flush()?;

    debug!(path = %out_path.display(), rows = prompts.len(), "wrote scoring sheet");
    Ok(())
}

/// `s001`-style sample identifiers: zero-padded to three digits, wider as
/// needed past s999.
fn sample_id(index: usize) -> String {
    format!("s{index:03}")
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
