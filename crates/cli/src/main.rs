use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use facegate_core::decision::domain::decision::Decision;
use facegate_core::decision::domain::head_pose::HeadPoseResult;
use facegate_core::decision::domain::observation_source::ObservationSource;
use facegate_core::decision::domain::result_sink::FaceResultSink;
use facegate_core::decision::evaluate_frame_use_case::EvaluateFrameUseCase;
use facegate_core::decision::infrastructure::jsonl_source::JsonlObservationSource;
use facegate_core::decision::infrastructure::logging_sink::LoggingResultSink;

/// Replay recorded face-detector observations through the
/// capture-readiness engine.
#[derive(Parser)]
#[command(name = "facegate")]
struct Cli {
    /// Input JSON-lines file of observations ("-" for stdin).
    input: PathBuf,

    /// Stop at the first capture-ready frame and print its index.
    #[arg(long)]
    stop_on_ready: bool,

    /// Emit each decision as a JSON line instead of the column output.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut source: Box<dyn ObservationSource> = if cli.input.as_os_str() == "-" {
        Box::new(JsonlObservationSource::new(io::stdin()))
    } else {
        Box::new(JsonlObservationSource::open(&cli.input)?)
    };

    let sink: Box<dyn FaceResultSink> = Box::new(LoggingResultSink::new());
    let mut engine = EvaluateFrameUseCase::new(sink);

    let mut frames = 0usize;
    let mut visible = 0usize;
    let mut ready = 0usize;
    let mut first_ready = None;

    for (index, observation) in source.observations().enumerate() {
        let decision = engine.execute(&observation?);

        frames += 1;
        if decision.visible {
            visible += 1;
        }
        if decision.requirements_met {
            ready += 1;
            first_ready.get_or_insert(index);
        }

        if cli.json {
            println!("{}", serde_json::to_string(&decision)?);
        } else {
            print_row(index, &decision);
        }

        if cli.stop_on_ready && decision.requirements_met {
            break;
        }
    }

    if cli.stop_on_ready {
        match first_ready {
            Some(index) => println!("capture-ready at frame {index}"),
            None => println!("no capture-ready frame in {frames} frames"),
        }
    }
    log::info!("{frames} frames: {visible} visible, {ready} capture-ready");

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.input.as_os_str() != "-" && !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    Ok(())
}

fn print_row(index: usize, decision: &Decision) {
    let mark = |value: Option<bool>| match value {
        Some(true) => "ok",
        Some(false) => "no",
        None => "--",
    };
    let pose = match &decision.pose {
        Some(HeadPoseResult::Correct) => "ok".to_string(),
        Some(HeadPoseResult::OutOfRange { hint, .. }) => format!("{hint:?}"),
        None => "--".to_string(),
    };
    println!(
        "{index:5}  visible {}  expression {}  eyes {}/{}  pose {}  ready {}",
        if decision.visible { "ok" } else { "no" },
        mark(decision.neutral_expression),
        mark(decision.left_eye_open),
        mark(decision.right_eye_open),
        pose,
        if decision.requirements_met { "ok" } else { "no" },
    );
}
