//! `classify` and `thresholds` subcommands.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use power_pose_core::{Assessment, GateFailure, PoseClassifier, PowerPoseThresholds, Verdict};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::{debug, info};

use crate::frames::{load_frames, Frame};
use crate::workflow::{Transition, WorkflowTracker};
use crate::{ClassifyArgs, OutputFormat, ThresholdsArgs};

/// Classification result for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameResult {
    /// Frame number
    pub frame: u64,
    /// Number of landmarks in the frame
    pub landmarks: usize,
    /// Verdict and the evidence behind it
    #[serde(flatten)]
    pub assessment: Assessment,
    /// Workflow change triggered by this frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

/// Per-verdict summary row
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Verdict")]
    verdict: String,
    #[tabled(rename = "Frames")]
    frames: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Classifies every frame in order, feeding the verdicts to `tracker`.
pub fn classify_frames(
    classifier: &PoseClassifier,
    frames: &[Frame],
    tracker: &mut WorkflowTracker,
) -> Vec<FrameResult> {
    frames
        .iter()
        .map(|frame| {
            let assessment = classifier.assess(&frame.pose);
            let transition = tracker.observe(assessment.verdict);
            FrameResult {
                frame: frame.index,
                landmarks: frame.pose.len(),
                assessment,
                transition,
            }
        })
        .collect()
}

/// Results to print: all of them, or only those that changed the verdict.
pub fn shown_results(
    results: &[FrameResult],
    changes_only: bool,
) -> impl Iterator<Item = &FrameResult> {
    results
        .iter()
        .filter(move |result| !changes_only || result.transition.is_some())
}

/// Loads thresholds from `path`, or the defaults when no path is given.
pub fn load_thresholds(path: Option<&std::path::Path>) -> Result<PowerPoseThresholds> {
    match path {
        Some(path) => {
            info!("Loading thresholds from {}", path.display());
            PowerPoseThresholds::from_json(path)
                .with_context(|| format!("Failed to load thresholds from {}", path.display()))
        }
        None => Ok(PowerPoseThresholds::default()),
    }
}

/// Execute the classify command
pub fn execute_classify(args: ClassifyArgs) -> Result<()> {
    let thresholds = load_thresholds(args.thresholds.as_deref())?;
    let classifier = PoseClassifier::new(thresholds).context("Invalid thresholds")?;
    debug!(?thresholds, "classifier ready");

    let frames = load_frames(&args.input)?;
    info!("Classifying {} frames from {}", frames.len(), args.input.display());

    let mut tracker = WorkflowTracker::new();
    let results = classify_frames(&classifier, &frames, &mut tracker);

    for result in shown_results(&results, args.changes_only) {
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
            OutputFormat::Table => print_frame(result, args.explain),
        }
    }

    if args.format == OutputFormat::Table {
        print_summary(&tracker);
    }

    Ok(())
}

/// Execute the thresholds command
pub fn execute_thresholds(args: ThresholdsArgs) -> Result<()> {
    let thresholds = load_thresholds(args.input.as_deref())?;

    match args.output {
        Some(path) => {
            thresholds
                .to_json(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Thresholds written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&thresholds)?),
    }
    Ok(())
}

fn colored_verdict(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::NoPose => verdict.label().dimmed(),
        Verdict::Detected => verdict.label().yellow(),
        Verdict::Confirmed => verdict.label().green().bold(),
    }
}

fn describe_failure(failure: &GateFailure) -> String {
    format!("[{}] {}", failure.gate(), failure)
}

fn print_frame(result: &FrameResult, explain: bool) {
    let marker = if result.transition.is_some() { "*" } else { " " };
    let mut line = format!(
        "{marker} frame {:>6}  {:>2} landmarks  {}",
        result.frame,
        result.landmarks,
        colored_verdict(result.assessment.verdict)
    );

    if explain {
        if let Some(failure) = &result.assessment.failure {
            line.push_str(&format!("  {}", describe_failure(failure).dimmed()));
        }
        if let Some(angles) = result.assessment.arm_angles {
            line.push_str(&format!(
                "  (arms {:.1}/{:.1})",
                angles.left, angles.right
            ));
        }
    }
    println!("{line}");
}

fn print_summary(tracker: &WorkflowTracker) {
    let total = tracker.total();
    let rows: Vec<SummaryRow> = Verdict::ALL
        .iter()
        .map(|&verdict| {
            let frames = tracker.count(verdict);
            let share = if total == 0 {
                "-".to_string()
            } else {
                format!("{:.1}%", frames as f64 * 100.0 / total as f64)
            };
            SummaryRow {
                verdict: verdict.label().to_string(),
                frames,
                share,
            }
        })
        .collect();

    println!();
    println!("{}", "Summary".bold().cyan());
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!(
        "  {} {}   {} {}",
        "Frames:".dimmed(),
        total,
        "State changes:".dimmed(),
        tracker.transitions()
    );
}
