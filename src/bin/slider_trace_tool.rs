use carousel_rs::api::{SliderConfig, SliderEngine, SliderSnapshot, SliderSnapshotJsonContractV1};
use carousel_rs::core::StaticDocument;
use carousel_rs::interaction::{InputOutcome, SliderInput};
use carousel_rs::render::NullRenderer;
use carousel_rs::telemetry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const USAGE: &str = concat!(
    "usage: slider_trace_tool <replay|check> --input <path> ",
    "[--output <path>] [--baseline <path>] [--verbose]"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    Check,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
    baseline: Option<PathBuf>,
    verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioFile {
    name: String,
    #[serde(default)]
    config: Option<SliderConfig>,
    viewport_width: u32,
    card_count: usize,
    #[serde(default = "default_true")]
    with_controls: bool,
    #[serde(default = "default_true")]
    with_dots: bool,
    steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioStep {
    action: ScenarioAction,
    #[serde(default)]
    expect: Option<StepExpectation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScenarioAction {
    Input { input: SliderInput },
    AdvanceTime { ms: u64 },
    GoToSlide { index: usize },
    NextSlide,
    PrevSlide,
    StartAutoplay,
    StopAutoplay,
    Relayout { width: u32 },
    Destroy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StepExpectation {
    #[serde(default)]
    current_index: Option<usize>,
    #[serde(default)]
    active_dot: Option<usize>,
    #[serde(default)]
    slides_to_show: Option<usize>,
    #[serde(default)]
    is_transitioning: Option<bool>,
    #[serde(default)]
    autoplay_armed: Option<bool>,
    #[serde(default)]
    inert: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFile {
    name: String,
    initial: SliderSnapshotJsonContractV1,
    steps: Vec<TraceStep>,
    mismatches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceStep {
    action: ScenarioAction,
    #[serde(default)]
    outcome: Option<InputOutcome>,
    #[serde(default)]
    fired_timers: usize,
    state: SliderSnapshotJsonContractV1,
}

fn default_true() -> bool {
    true
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    if args.verbose {
        let _ = telemetry::init_tracing("carousel_rs=debug");
    } else {
        let _ = telemetry::init_default_tracing();
    }
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let mut trace = replay(scenario);
    if let Some(baseline) = &args.baseline {
        let recorded = read_trace(baseline)?;
        let drift = compare_with_baseline(&trace, recorded)?;
        trace.mismatches.extend(drift);
    }
    if let Some(output) = &args.output {
        write_json(output, &trace)?;
    }

    match args.command {
        CommandKind::Replay => {
            if args.output.is_none() {
                let json = serde_json::to_string_pretty(&trace)
                    .map_err(|err| format!("failed to serialize trace: {err}"))?;
                println!("{json}");
            }
            Ok(())
        }
        CommandKind::Check => {
            if trace.mismatches.is_empty() {
                println!("{}: {} steps ok", trace.name, trace.steps.len());
                Ok(())
            } else {
                Err(format!(
                    "{}: {} expectation(s) failed:\n{}",
                    trace.name,
                    trace.mismatches.len(),
                    trace.mismatches.join("\n")
                ))
            }
        }
    }
}

fn build_document(scenario: &ScenarioFile, config: &SliderConfig) -> StaticDocument {
    let selectors = &config.selectors;
    let mut document = StaticDocument::new()
        .with_element(selectors.container.clone())
        .with_element(selectors.track.clone())
        .with_elements(selectors.card.clone(), scenario.card_count);
    if scenario.with_controls {
        document = document
            .with_element(selectors.prev_button.clone())
            .with_element(selectors.next_button.clone());
    }
    if scenario.with_dots {
        document = document.with_element(selectors.dots_container.clone());
    }
    document
}

fn replay(scenario: ScenarioFile) -> TraceFile {
    let config = scenario.config.clone().unwrap_or_default();
    let document = build_document(&scenario, &config);
    let mut engine = SliderEngine::new(
        NullRenderer::default(),
        &document,
        config,
        scenario.viewport_width,
    );

    let initial = engine.snapshot();
    let mut steps = Vec::with_capacity(scenario.steps.len());
    let mut mismatches = Vec::new();
    if let Err(err) = initial.check_consistency() {
        mismatches.push(format!("initial: {err}"));
    }

    for (position, step) in scenario.steps.into_iter().enumerate() {
        let (outcome, fired_timers) = apply_action(&mut engine, &step.action);
        let snapshot = engine.snapshot();
        if let Err(err) = snapshot.check_consistency() {
            mismatches.push(format!("step {position}: {err}"));
        }
        if let Some(expect) = &step.expect {
            mismatches.extend(
                compare(expect, &snapshot)
                    .into_iter()
                    .map(|message| format!("step {position}: {message}")),
            );
        }
        steps.push(TraceStep {
            action: step.action,
            outcome,
            fired_timers,
            state: SliderSnapshotJsonContractV1::new(snapshot),
        });
    }

    TraceFile {
        name: scenario.name,
        initial: SliderSnapshotJsonContractV1::new(initial),
        steps,
        mismatches,
    }
}

fn apply_action(
    engine: &mut SliderEngine<NullRenderer>,
    action: &ScenarioAction,
) -> (Option<InputOutcome>, usize) {
    match action {
        ScenarioAction::Input { input } => (Some(engine.handle_input(*input)), 0),
        ScenarioAction::AdvanceTime { ms } => {
            (None, engine.advance_time(Duration::from_millis(*ms)))
        }
        ScenarioAction::GoToSlide { index } => {
            engine.go_to_slide(*index);
            (None, 0)
        }
        ScenarioAction::NextSlide => {
            engine.next_slide();
            (None, 0)
        }
        ScenarioAction::PrevSlide => {
            engine.prev_slide();
            (None, 0)
        }
        ScenarioAction::StartAutoplay => {
            engine.start_autoplay();
            (None, 0)
        }
        ScenarioAction::StopAutoplay => {
            engine.stop_autoplay();
            (None, 0)
        }
        ScenarioAction::Relayout { width } => {
            engine.relayout(*width);
            (None, 0)
        }
        ScenarioAction::Destroy => {
            engine.destroy();
            (None, 0)
        }
    }
}

fn compare(expect: &StepExpectation, snapshot: &SliderSnapshot) -> Vec<String> {
    let mut mismatches = Vec::new();
    let mut check = |name: &str, expected: Option<String>, actual: String| {
        if let Some(expected) = expected {
            if expected != actual {
                mismatches.push(format!("{name}: expected {expected}, got {actual}"));
            }
        }
    };

    check(
        "current_index",
        expect.current_index.map(|v| v.to_string()),
        snapshot.current_index.to_string(),
    );
    check(
        "active_dot",
        expect.active_dot.map(|v| v.to_string()),
        snapshot.active_dot.to_string(),
    );
    check(
        "slides_to_show",
        expect.slides_to_show.map(|v| v.to_string()),
        snapshot.slides_to_show.to_string(),
    );
    check(
        "is_transitioning",
        expect.is_transitioning.map(|v| v.to_string()),
        snapshot.is_transitioning.to_string(),
    );
    check(
        "autoplay_armed",
        expect.autoplay_armed.map(|v| v.to_string()),
        snapshot.autoplay_armed.to_string(),
    );
    check(
        "inert",
        expect.inert.map(|v| v.to_string()),
        snapshot.inert.to_string(),
    );
    mismatches
}

fn read_trace(path: &Path) -> Result<TraceFile, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read baseline `{}`: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid baseline json: {err}"))
}

/// Compares replayed states against a recorded trace, step by step.
fn compare_with_baseline(trace: &TraceFile, recorded: TraceFile) -> Result<Vec<String>, String> {
    let mut mismatches = Vec::new();
    if recorded.steps.len() != trace.steps.len() {
        mismatches.push(format!(
            "baseline: {} steps recorded, {} replayed",
            recorded.steps.len(),
            trace.steps.len()
        ));
    }

    let expected_initial = recorded
        .initial
        .into_snapshot()
        .map_err(|err| format!("baseline initial state: {err}"))?;
    if expected_initial != trace.initial.snapshot {
        mismatches.push("baseline: initial state differs".to_owned());
    }

    for (position, (replayed, recorded)) in trace.steps.iter().zip(recorded.steps).enumerate() {
        let expected: SliderSnapshot = recorded
            .state
            .into_snapshot()
            .map_err(|err| format!("baseline step {position}: {err}"))?;
        if expected != replayed.state.snapshot {
            mismatches.push(format!("baseline step {position}: state differs"));
        }
    }
    Ok(mismatches)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    fs::write(path, json).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("check") => CommandKind::Check,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut baseline = None::<PathBuf>;
    let mut verbose = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--baseline" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --baseline".to_owned())?;
                baseline = Some(PathBuf::from(value));
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output,
        baseline,
        verbose,
    })
}
