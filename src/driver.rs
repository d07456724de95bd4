use crate::input::{self, Command};
use crate::terminal::{LineDisplay, TerminalDisplay};
use anyhow::{Context, Result};
use crossbeam_channel::TryRecvError;
use reflex_controller::config::DELAY_RANGE;
use reflex_controller::{GameController, MachineConfig};
use reflex_core::{EventScript, RandomSource, SequenceSource, TICK_PERIOD};
use reflex_timing::{HighPrecisionTimer, TickClock};
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Live cabinet: stdin commands and a real 10ms tick, funnelled through one loop.
pub fn run_interactive<R: RandomSource>(config: MachineConfig, rng: R) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();
    input::spawn_reader(BufReader::new(io::stdin()), tx).context("Failed to start input thread")?;

    let mut controller = GameController::with_config(TerminalDisplay::new(io::stdout()), rng, config);
    controller.init();

    let mut clock = TickClock::new(HighPrecisionTimer::new(), TICK_PERIOD);
    'run: loop {
        loop {
            match rx.try_recv() {
                Ok(Command::Coin) => controller.coin_inserted(),
                Ok(Command::GoStop) => controller.go_stop_pressed(),
                Ok(Command::Reset) => controller.init(),
                Ok(Command::Quit) => break 'run,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break 'run,
            }
        }
        for _ in 0..clock.wait() {
            controller.tick();
        }
    }

    let stats = clock.stats();
    log::info!(
        "ran {} ticks, interval {:.3} ms avg, jitter {:.3} ms, range {:.3}..{:.3} ms",
        clock.total_ticks(),
        stats.average_interval_ns / 1_000_000.0,
        stats.jitter_ns / 1_000_000.0,
        stats.min_interval_ns / 1_000_000.0,
        stats.max_interval_ns / 1_000_000.0,
    );
    Ok(())
}

/// Replays a recorded script as fast as possible, writing a display transcript.
///
/// Delays listed in the script are handed out in order; without any, `fallback`
/// supplies them.
pub fn run_script<W, R>(
    path: &Path,
    config: MachineConfig,
    fallback: R,
    out: W,
) -> Result<W>
where
    W: Write,
    R: RandomSource + 'static,
{
    let script = EventScript::load(path)
        .with_context(|| format!("Failed to load script {}", path.display()))?;
    script
        .validate_delays(DELAY_RANGE)
        .with_context(|| format!("Invalid script {}", path.display()))?;

    let rng: Box<dyn RandomSource> = if script.delays.is_empty() {
        Box::new(fallback)
    } else {
        Box::new(SequenceSource::new(script.delays.clone()))
    };

    let mut controller = GameController::with_config(LineDisplay::new(out), rng, config);
    let mut count = 0usize;
    for event in script.events() {
        controller.handle(event);
        count += 1;
    }
    log::info!("replayed {} events from {}", count, path.display());

    let (display, _) = controller.into_parts();
    Ok(display.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflex_controller::Variant;
    use std::fs;

    fn script_file(name: &str, json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("reflex-{}-{}.json", name, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn replays_scored_round() {
        let path = script_file(
            "round",
            r#"{"delays":[150],"steps":["init","coin","go",{"ticks":150},{"ticks":157},"go"]}"#,
        );
        let out = run_script(
            &path,
            MachineConfig::default(),
            SequenceSource::default(),
            Vec::new(),
        )
        .unwrap();
        fs::remove_file(&path).ok();

        let transcript = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(&lines[..4], ["Insert coin", "Press GO!", "Wait...", "0.00"]);
        assert_eq!(lines[lines.len() - 2], "1.57");
        assert_eq!(lines[lines.len() - 1], "1.57");
    }

    #[test]
    fn replays_wait_go_timeout() {
        let path = script_file("timeout", r#"{"steps":["coin",{"ticks":1000}]}"#);
        let out = run_script(
            &path,
            MachineConfig::new(Variant::Enhanced),
            SequenceSource::default(),
            Vec::new(),
        )
        .unwrap();
        fs::remove_file(&path).ok();

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript, "Insert coin\nPress GO!\nInsert coin\n");
    }

    #[test]
    fn rejects_out_of_range_delays() {
        let path = script_file("bad", r#"{"delays":[50],"steps":["coin"]}"#);
        let err = run_script(
            &path,
            MachineConfig::default(),
            SequenceSource::default(),
            Vec::new(),
        )
        .unwrap_err();
        fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("outside 100..=250"));
    }

    #[test]
    fn missing_script_is_an_error() {
        let err = run_script(
            Path::new("/nonexistent/reflex.json"),
            MachineConfig::default(),
            SequenceSource::default(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to load script"));
    }
}
