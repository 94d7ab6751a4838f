use std::env;

use fd_trainer::config::SimConfig;
use fd_trainer::io;
use fd_trainer::sim::{self, format_clock, SessionEvent, Snapshot};

const CONFIG_ENV_VAR: &str = "FD_TRAINER_CONFIG";
const TRACE_ENV_VAR: &str = "FD_TRAINER_TRACE";
const FRAME_DT: f64 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::var(CONFIG_ENV_VAR) {
        Ok(path) => {
            log::info!("loading config from {}", path);
            SimConfig::from_json_file(&path)?
        }
        Err(_) => SimConfig::default(),
    };

    // -----------------------------------------------------------------------
    // Fly a full session with the autopilot
    // -----------------------------------------------------------------------
    let run = sim::simulate(config, FRAME_DT)?;
    let report = &run.report;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  FLIGHT DIRECTOR TRAINER: autopilot demo (seed {})", report.seed);
    println!("====================================================================");
    println!();

    println!("  Captures");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &run.events {
        if let SessionEvent::Captured { elapsed, previous, next } = event {
            println!(
                "  t={:>6.1}s   held alt={:>6.0} hdg={:>3.0} spd={:>3.0}   next alt={:>6.0} hdg={:>3.0} spd={:>3.0}",
                elapsed,
                previous.altitude,
                previous.heading,
                previous.speed,
                next.altitude,
                next.heading,
                next.speed,
            );
        }
    }
    if report.captures == 0 {
        println!("  (none)");
    }
    println!();

    // -----------------------------------------------------------------------
    // Trace table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trace");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>5}  {:>6}  {:>6}  {:>5}  {:>7}  {:>5}  {:>6}  {:>6}  {:>7}",
        "clock", "roll", "pitch", "spd", "alt", "hdg", "fd_x", "fd_y", "score"
    );
    println!("  {}", "─".repeat(66));

    let sample_interval = (run.trace.len() / 30).max(1);
    for (i, s) in run.trace.iter().enumerate() {
        if i % sample_interval != 0 && i != run.trace.len() - 1 {
            continue;
        }
        print_row(s);
    }
    println!();

    println!("  Result");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Score:         {:>8}", report.score);
    println!("  Accuracy:      {:>7.0}%", report.accuracy);
    println!("  Rating:        {:>8}", report.rating.to_string());
    println!("  Captures:      {:>8}", report.captures);
    println!("  Ticks:         {:>8}   (dt={:.4} s)", run.trace.len() - 1, FRAME_DT);
    println!("====================================================================");
    println!();

    io::write_report(&mut std::io::stdout().lock(), report)?;

    if let Ok(path) = env::var(TRACE_ENV_VAR) {
        io::write_trace_file(&path, &run.trace)?;
        log::info!("wrote {} trace rows to {}", run.trace.len(), path);
    }

    Ok(())
}

fn print_row(s: &Snapshot) {
    let d = &s.display;
    println!(
        "  {:>5}  {:>6.1}  {:>6.1}  {:>5.0}  {:>7.0}  {:>5.0}  {:>6.1}  {:>6.1}  {:>7}",
        format_clock(s.time_remaining),
        d.roll,
        d.pitch,
        d.speed,
        d.altitude,
        d.heading,
        d.fd.x,
        d.fd.y,
        s.score
    );
}
