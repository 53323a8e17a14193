use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use doodle_emoji_scorer::error::ScoreError;
use doodle_emoji_scorer::input::stats_store::{load_stats, save_stats};
use doodle_emoji_scorer::input::{ProbabilitySource, load_probabilities};
use doodle_emoji_scorer::logging;
use doodle_emoji_scorer::model::labels::{Label, LabelSet};
use doodle_emoji_scorer::model::overlay::{DetectionBox, GlyphMetrics};
use doodle_emoji_scorer::model::round::RoundOutcome;
use doodle_emoji_scorer::model::thresholds::FeedbackProfile;
use doodle_emoji_scorer::pipeline::stage3_feedback::{pick_target, score_probabilities};
use doodle_emoji_scorer::pipeline::stage4_overlay::{fade_alpha, place_glyph, to_pixels};
use doodle_emoji_scorer::pipeline::stage5_report::{ReportFormat, render_round, write_reports};
use doodle_emoji_scorer::report::json::render_stats_json;
use doodle_emoji_scorer::report::text::render_stats_text;

#[derive(Debug, Parser)]
#[command(
    name = "doodle-emoji-scorer",
    version,
    about = "Score emoji doodle classifier output and pick the feedback tier"
)]
struct Cli {
    /// Log at debug level unless DOODLE_SCORE_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank one model output vector and select feedback for the round.
    Score(ScoreArgs),
    /// Show per-label success statistics.
    Stats(StatsArgs),
    /// Place the top label's glyph inside a detection box.
    Overlay(OverlayArgs),
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["probabilities", "serialized", "input"])
))]
struct ScoreArgs {
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    probabilities: Option<Vec<f32>>,
    /// Legacy `0,12; 0,88; ...` encoding.
    #[arg(long)]
    serialized: Option<String>,
    #[arg(long)]
    input: Option<PathBuf>,
    /// Glyph or id (heart, smiley, heart_eyes, dizzy, thumbs_up); random when omitted.
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = FormatChoice::Text)]
    format: FormatChoice,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, env = "DOODLE_STATS")]
    stats: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct StatsArgs {
    #[arg(long, env = "DOODLE_STATS")]
    stats: PathBuf,
    #[arg(long, value_enum, default_value_t = FormatChoice::Text)]
    format: FormatChoice,
}

#[derive(Debug, Args)]
struct OverlayArgs {
    /// Relative `top,left,bottom,right` from the detector.
    #[arg(long = "box", value_delimiter = ',', num_args = 1.., required = true)]
    detection: Vec<f32>,
    #[arg(long)]
    width: u32,
    #[arg(long)]
    height: u32,
    #[arg(long, default_value_t = 0)]
    elapsed_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Text,
    Json,
}

impl From<FormatChoice> for ReportFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Text => ReportFormat::Text,
            FormatChoice::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        doodle_emoji_scorer::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ScoreError> {
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Stats(args) => run_stats(args),
        Command::Overlay(args) => run_overlay(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), ScoreError> {
    let labels = LabelSet::default_v1();
    let profile = FeedbackProfile::default_v1();
    let source = probability_source(&args)?;
    let target = resolve_target(args.target.as_deref(), args.seed, &labels)?;

    let mut book = match &args.stats {
        Some(path) => Some(load_stats(path)?),
        None => None,
    };
    if let Some(book) = book.as_mut() {
        book.record_attempt(target);
    }

    let probabilities = load_probabilities(&source)?;
    let outcome = match score_probabilities(&probabilities, &labels, target, &profile) {
        Ok(outcome) => outcome,
        Err(ScoreError::InvalidInput {
            probabilities,
            labels,
        }) => {
            doodle_emoji_scorer::warn!(
                probabilities,
                labels,
                "model output does not cover the label set; scoring as a miss"
            );
            RoundOutcome::missing(target, &profile)
        }
        Err(err) => return Err(err),
    };
    doodle_emoji_scorer::info!(
        target = %outcome.target,
        top_score = outcome.top_score,
        is_match = outcome.is_match,
        tier = outcome.tier.key(),
        "round scored"
    );

    if let (Some(book), Some(path)) = (book.as_mut(), args.stats.as_deref()) {
        book.record_outcome(&outcome);
        save_stats(path, book)?;
    }
    if let Some(out_dir) = &args.out {
        write_reports(&outcome, out_dir)?;
    }

    print!("{}", render_round(&outcome, args.format.into())?);
    if args.format == FormatChoice::Json {
        println!();
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<(), ScoreError> {
    let labels = LabelSet::default_v1();
    let book = load_stats(&args.stats)?;
    match args.format {
        FormatChoice::Text => print!("{}", render_stats_text(&book, &labels)),
        FormatChoice::Json => println!("{}", render_stats_json(&book, &labels)?),
    }
    Ok(())
}

fn run_overlay(args: OverlayArgs) -> Result<(), ScoreError> {
    let detection = DetectionBox::try_from(args.detection.as_slice())?;
    let rect = to_pixels(&detection, args.width, args.height);
    let placement = place_glyph(&rect, GlyphMetrics::square);
    println!(
        "box: left={:.1} top={:.1} right={:.1} bottom={:.1}",
        rect.left, rect.top, rect.right, rect.bottom
    );
    println!(
        "glyph: size={:.1} x={:.1} baseline={:.1}",
        placement.text_size, placement.x, placement.baseline_y
    );
    println!("alpha@{}ms: {}", args.elapsed_ms, fade_alpha(args.elapsed_ms));
    Ok(())
}

fn probability_source(args: &ScoreArgs) -> Result<ProbabilitySource, ScoreError> {
    if let Some(values) = &args.probabilities {
        return Ok(ProbabilitySource::Values(values.clone()));
    }
    if let Some(text) = &args.serialized {
        return Ok(ProbabilitySource::Serialized(text.clone()));
    }
    if let Some(path) = &args.input {
        return Ok(ProbabilitySource::File(path.clone()));
    }
    Err(ScoreError::MissingInput(
        "one of --probabilities, --serialized or --input".to_string(),
    ))
}

fn resolve_target(
    target: Option<&str>,
    seed: Option<u64>,
    labels: &LabelSet,
) -> Result<Label, ScoreError> {
    if let Some(symbol) = target {
        return symbol.parse();
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let label = pick_target(labels, &mut rng);
    doodle_emoji_scorer::info!(target = %label, "no --target given, picked one at random");
    Ok(label)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
