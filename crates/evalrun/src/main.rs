use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use evalrun_core::outputs::{default_run_dir, prepare_run};
use evalrun_core::selection::select_prompts;
use evalrun_parser::{parse_catalog_file, TaskId};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prepare a human-eval run folder: a prompt manifest plus a blank scoring
/// sheet, both seeded from the prompts markdown catalog.
#[derive(Parser, Debug)]
#[command(author, version, about = "Prepare prompt manifests and scoring sheets for human eval runs", long_about = None)]
struct Cli {
    /// Path to the prompts markdown catalog
    #[arg(long, default_value = "tasks/prompts_v0.1.md")]
    prompts: PathBuf,

    /// Output directory (default: runs/YYYY-MM-DD)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Comma-separated task IDs to include, e.g. T1,T2,T4 (default: all)
    #[arg(long, value_delimiter = ',')]
    tasks: Option<Vec<String>>,

    /// Limit the number of prompts selected, applied after task filtering
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let all_prompts = parse_catalog_file(&cli.prompts)?;
    info!(
        path = %cli.prompts.display(),
        count = all_prompts.len(),
        "parsed prompt catalog"
    );

    let include_tasks: Option<HashSet<TaskId>> = cli.tasks.map(|codes| {
        codes
            .iter()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .map(TaskId::new)
            .collect()
    });

    let selected = select_prompts(all_prompts, include_tasks.as_ref(), cli.limit);

    let run_dir = cli.out_dir.unwrap_or_else(default_run_dir);
    let artifacts = prepare_run(&selected, &run_dir)
        .with_context(|| format!("failed to write run artifacts under {}", run_dir.display()))?;

    println!("Created run folder: {}", artifacts.run_dir.display());
    println!("- Prompt manifest: {}", artifacts.manifest_path.display());
    println!("- Scoring sheet:   {}", artifacts.scoring_path.display());
    println!("Selected prompts:  {}", artifacts.prompt_count);

    Ok(())
}
