// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for paceclock-cli
// ABOUTME: Provides plain-text and JSON display for set and snap reports

use anyhow::Result;
use paceclock::units::TimeSpan;
use serde::Serialize;

use crate::commands::set::SetReport;
use crate::commands::snap::SnapReport;

/// Print any report as pretty JSON on stdout
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Display the figures for one set
pub fn display_set_report(report: &SetReport) {
    let rx = &report.prescription;

    println!(
        "\n{} x {} {} ({})",
        report.reps, report.distance_per_rep, report.stroke, report.course
    );
    println!("{}", "=".repeat(60));
    if report.requested_distance != report.distance_per_rep {
        println!(
            "   Requested:  {} (snapped to {})",
            report.requested_distance, report.distance_per_rep
        );
    }
    println!(
        "   Effort:     {}",
        report.effort.map_or_else(|| "unset".to_owned(), |e| e.to_string())
    );
    if !report.equipment.is_empty() {
        let aids: Vec<String> = report.equipment.iter().map(ToString::to_string).collect();
        println!("   Equipment:  {}", aids.join(", "));
    }
    println!(
        "   Seed:       {} in {}",
        report.seed.distance(),
        report.seed.time()
    );

    println!("\nPER REPETITION:");
    println!("   Goal:       {:.2}s ({}s rounded)", rx.goal_seconds, rx.goal_rounded);
    println!("   Rest:       {}s", rx.rest_seconds);
    println!("   Send-off:   {}", seconds_label(rx.interval_seconds));
    println!("   {}", rx.label);

    println!("\nTOTALS:");
    println!("   Distance:   {}", report.total_distance);
    println!("   Swim time:  {}", report.swim_time);
    println!("   Rest time:  {}", report.rest_time);
    println!("   Total time: {}", report.total_time);
}

/// Display a snapped distance
pub fn display_snap_report(report: &SnapReport) {
    println!(
        "{} in {}: {} ({} x {})",
        report.requested, report.course, report.snapped, report.lengths, report.pool_length
    );
}

fn seconds_label(seconds: i64) -> String {
    TimeSpan::from_whole_seconds(seconds)
        .map_or_else(|_| format!("{seconds}s"), |span| span.to_string())
}
