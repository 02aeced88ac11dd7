use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ats_evaluator::config::Config;
use ats_evaluator::evaluation_client::HttpEvaluationClient;
use ats_evaluator::models::resume::ResumeFile;
use ats_evaluator::models::role::{available_modes, Mode, Role};
use ats_evaluator::selection::SelectionState;
use ats_evaluator::submission::{DisplayResult, SubmissionController};

/// Upload resumes to the evaluation service and print per-file results.
#[derive(Parser, Debug)]
#[command(name = "ats-evaluator", version)]
struct Args {
    /// candidate (exactly one resume) or recruiter (one or more)
    #[arg(long, default_value = "candidate")]
    role: Role,
    /// match, tech_audit or improve (recruiters: match only)
    #[arg(long, default_value = "match")]
    mode: Mode,
    /// Job description text, required for match
    #[arg(long, conflicts_with = "job_description_file")]
    job_description: Option<String>,
    /// Read the job description from a file
    #[arg(long)]
    job_description_file: Option<PathBuf>,
    /// Overrides EVALUATOR_URL
    #[arg(long)]
    endpoint: Option<String>,
    /// Overrides EVALUATOR_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print normalized results as JSON
    #[arg(long)]
    json: bool,
    /// Resume documents, submitted in this order
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    info!("Starting ATS evaluator v{}", env!("CARGO_PKG_VERSION"));

    let selection = build_selection(&args).await?;

    let endpoint = args.endpoint.clone().unwrap_or(config.endpoint);
    let timeout = args
        .timeout_secs
        .map(Duration::from_secs)
        .or(config.request_timeout);
    let client = HttpEvaluationClient::new(endpoint, timeout)?;
    info!(
        "Evaluation endpoint: {} (timeout: {})",
        client.endpoint(),
        timeout.map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()))
    );

    let controller = SubmissionController::new(Arc::new(client));
    let results = controller.begin(&selection)?.run().await?;
    debug!("Submission finished: {:?}", controller.status().phase);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    Ok(())
}

/// Applies the CLI choices through the same operations an interactive front end would use.
async fn build_selection(args: &Args) -> Result<SelectionState> {
    let mut selection = SelectionState::new();
    selection.set_role(args.role);
    debug!(
        "Modes for {}: {:?}",
        args.role.label(),
        available_modes(args.role)
            .iter()
            .map(|o| o.label)
            .collect::<Vec<_>>()
    );
    selection.set_mode(args.mode)?;

    let job_description = match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read job description '{}'", path.display()))?,
        ),
        (None, None) => None,
    };
    if let Some(text) = job_description {
        if !selection.shows_job_description() {
            debug!("Job description is ignored for mode {}", selection.mode());
        }
        selection.set_job_description(text);
    }

    if !selection.role().multi_file_picker() && args.files.len() > 1 {
        warn!(
            "{} accepts a single resume; {} were given",
            selection.role().label(),
            args.files.len()
        );
    }

    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(ResumeFile::from_path(path).await?);
    }
    selection.append_files(files);

    info!(
        "{}: {} file(s) selected for {}",
        selection.role().upload_prompt(),
        selection.files().len(),
        selection.mode().label()
    );
    Ok(selection)
}

fn print_results(results: &[DisplayResult]) {
    if results.is_empty() {
        println!("No results returned.");
        return;
    }
    println!("Results");
    for result in results {
        println!();
        for line in result.render_lines() {
            println!("{line}");
        }
    }
}
