use std::io::{self, Write};
use std::path::Path;

use crate::sim::Snapshot;

/// Write a session trace in CSV format.
///
/// Columns: elapsed, time_remaining, roll, pitch, speed, altitude, heading,
///          fd_x, fd_y, target_alt, target_hdg, target_spd,
///          score, avg_accuracy, stabilized, captures, phase
pub fn write_trace<W: Write>(writer: &mut W, trace: &[Snapshot]) -> io::Result<()> {
    writeln!(
        writer,
        "elapsed,time_remaining,roll,pitch,speed,altitude,heading,\
         fd_x,fd_y,target_alt,target_hdg,target_spd,\
         score,avg_accuracy,stabilized,captures,phase"
    )?;

    for s in trace {
        let d = &s.display;
        let t = &s.targets;
        writeln!(
            writer,
            "{:.4},{:.4},{:.3},{:.3},{:.2},{:.1},{:.2},\
             {:.3},{:.3},{:.0},{:.2},{:.0},\
             {},{:.2},{:.3},{},{}",
            s.elapsed, s.time_remaining,
            d.roll, d.pitch, d.speed, d.altitude, d.heading,
            d.fd.x, d.fd.y,
            t.altitude, t.heading, t.speed,
            s.score, s.average_accuracy, s.stabilized, s.captures, s.phase,
        )?;
    }

    Ok(())
}

/// Write a session trace to a CSV file at the given path.
pub fn write_trace_file(path: impl AsRef<Path>, trace: &[Snapshot]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trace(&mut file, trace)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::dynamics::ControlSet;
    use crate::sim::Session;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut session = Session::start(SimConfig { seed: Some(5), ..SimConfig::default() }).unwrap();
        let mut trace = vec![session.snapshot()];
        session.tick(&ControlSet::none(), 0.05);
        trace.push(session.snapshot());

        let mut buf = Vec::new();
        write_trace(&mut buf, &trace).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("elapsed,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,210.0000,"));
        assert!(lines[2].starts_with("0.0500,209.9500,"));
        assert!(lines[2].ends_with(",Running"));
        assert_eq!(lines[1].split(',').count(), lines[0].split(',').count());
    }
}
