use std::fmt::Write;

use crate::angles::format_dms;
use crate::types::{format_time_point, ExtremumRecord, ScanConfig, ScanOutcome};

pub fn render_setup(config: &ScanConfig) -> String {
    let [a, b] = &config.objects;
    let window = &config.window;
    let mut out = String::new();
    let _ = writeln!(out, "--------------- setup ---------------");
    let _ = writeln!(out, "   Objects: [{}, {}]", a, b);
    let _ = writeln!(out, "  Location: {}", config.observer);
    let _ = writeln!(out, "Start Time: {}", format_time_point(&window.start()));
    let _ = writeln!(out, "  Duration: {}", window.duration_seconds());
    let _ = writeln!(out, "Resolution: {}", window.step_seconds());
    out
}

pub fn render_results(outcome: &ScanOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--------------- results ---------------");
    let _ = writeln!(out, "Minimum: {}", extremum_line(&outcome.minimum));
    let _ = writeln!(out, "Maximum: {}", extremum_line(&outcome.maximum));
    out
}

fn extremum_line(record: &ExtremumRecord) -> String {
    format!(
        "{} at {}",
        format_dms(record.degrees()),
        format_time_point(&record.time)
    )
}
