use std::{error::Error, fs, path::Path};

use clap::Parser;
use gesture_core::{Pt2, TouchSample};
use gesture_pipeline::GestureSession;

/// Gesture CLI: replay a touch trace through the transform pipeline.
#[derive(Debug, Parser)]
#[command(author, version, about = "Two-finger gesture transform replay")]
struct Args {
    /// Path to a JSON file containing an array of touch samples.
    /// When omitted, a built-in demo gesture is replayed.
    #[arg(long)]
    input: Option<String>,

    /// Emit each frame report as a JSON line instead of text.
    #[arg(long)]
    json: bool,
}

fn load_trace(path: &Path) -> Result<Vec<TouchSample>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let samples = serde_json::from_str(&data)?;
    Ok(samples)
}

/// Hard-coded demo gesture: touch, drag, second finger down, pinch out
/// with a quarter turn, lift. Exercises the freeze, suppression,
/// emulation and pinning paths.
fn demo_trace() -> Vec<TouchSample> {
    let p = Pt2::new;
    vec![
        TouchSample::empty(),
        TouchSample::only_first(p(0.0, 0.0)),
        TouchSample::only_first(p(1.0, 0.5)),
        TouchSample::only_first(p(2.0, 1.0)),
        TouchSample::both(p(2.0, 1.0), p(4.0, 1.0)),
        TouchSample::both(p(2.0, 1.0), p(4.0, 1.0)),
        TouchSample::both(p(2.0, 1.0), p(2.0, 4.0)),
        TouchSample::only_first(p(2.0, 1.0)),
        TouchSample::empty(),
    ]
}

fn run_trace(samples: &[TouchSample], json: bool) -> Result<Vec<String>, Box<dyn Error>> {
    let mut session = GestureSession::new();
    let mut lines = Vec::with_capacity(samples.len());
    for sample in samples {
        let report = session.step(*sample)?;
        if json {
            lines.push(serde_json::to_string(&report)?);
        } else {
            lines.push(report.to_string());
        }
    }
    Ok(lines)
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let samples = match args.input.as_deref() {
        Some(path) => load_trace(Path::new(path))?,
        None => demo_trace(),
    };
    for line in run_trace(&samples, args.json)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn demo_trace_replays_cleanly() {
        let lines = run_trace(&demo_trace(), false).expect("demo trace should replay");
        assert_eq!(lines.len(), demo_trace().len());
        assert!(lines[0].starts_with("==== frame 1 ===="));
        // The single-finger drag has moved the world origin by frame 4.
        assert!(lines[3].contains("world (0 0) -> screen (2.000000 1.000000)"));
    }

    #[test]
    fn trace_round_trips_through_a_file() {
        let samples = vec![
            TouchSample::empty(),
            TouchSample::only_first(Pt2::new(1.0, 2.0)),
            TouchSample::only_first(Pt2::new(2.0, 2.0)),
        ];
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&samples).unwrap()).unwrap();

        let loaded = load_trace(file.path()).expect("trace should load");
        assert_eq!(loaded, samples);

        let lines = run_trace(&loaded, true).expect("trace should replay");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("\"frame\":3"));
    }
}
