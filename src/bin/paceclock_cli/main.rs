// ABOUTME: Paceclock CLI - computes goal, rest, and send-off figures for a swim set
// ABOUTME: Also shows how a requested repeat distance snaps to a pool course
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 4x50 yd easy freestyle off a 1:00.00 100 yd seed
//! paceclock-cli set --stroke free --reps 4 --distance 50 --unit yd --course scy \
//!     --effort easy --seed-distance 100 --seed-time 1:00.00
//!
//! # Same set as JSON
//! paceclock-cli --json set --stroke free --reps 4 --distance 50 --seed-time 1:00
//!
//! # Where does a 75 m repeat land in a long course pool?
//! paceclock-cli snap --distance 75 --unit m --course lcm
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paceclock::logging::LoggingConfig;
use paceclock::models::{Course, Effort, Equipment, StrokeType};
use paceclock::units::TimeSpan;
use tracing::debug;

use commands::set::SetRequest;
use helpers::UnitArg;

#[derive(Parser)]
#[command(
    name = "paceclock-cli",
    version,
    about = "Paceclock swim pacing calculator",
    long_about = "Computes per-repetition goal times, rest, and send-off intervals for swim sets from a seed pace."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute goal, rest, and send-off for one set
    Set {
        /// Stroke (free, back, breast, fly, im, kick, drill)
        #[arg(long)]
        stroke: StrokeType,

        /// Number of repetitions
        #[arg(long, default_value = "1")]
        reps: u32,

        /// Distance of one repetition
        #[arg(long)]
        distance: f64,

        /// Unit of --distance
        #[arg(long, value_enum, default_value = "yd")]
        unit: UnitArg,

        /// Pool course (scy, scm, lcm)
        #[arg(long, default_value = "scy")]
        course: Course,

        /// Effort level (easy, endurance, threshold, race-pace, vo2max, sprint)
        #[arg(long)]
        effort: Option<Effort>,

        /// Training aids, comma-separated (fins,paddles,pull,kickboard,snorkel,band)
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<Equipment>,

        /// Distance of the seed swim
        #[arg(long, default_value = "100")]
        seed_distance: f64,

        /// Unit of --seed-distance (defaults to --unit)
        #[arg(long, value_enum)]
        seed_unit: Option<UnitArg>,

        /// Seed swim time as m:ss.hh
        #[arg(long)]
        seed_time: TimeSpan,

        /// Fixed goal time per repetition as m:ss.hh
        #[arg(long)]
        goal: Option<TimeSpan>,

        /// Fixed send-off as m:ss (multiple of 5 seconds)
        #[arg(long)]
        interval: Option<TimeSpan>,
    },

    /// Show the distance a repetition snaps to in a course
    Snap {
        /// Requested distance
        #[arg(long)]
        distance: f64,

        /// Unit of --distance
        #[arg(long, value_enum, default_value = "m")]
        unit: UnitArg,

        /// Pool course (scy, scm, lcm)
        #[arg(long)]
        course: Course,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    debug!(json = cli.json, "paceclock-cli starting");

    match cli.command {
        Command::Set {
            stroke,
            reps,
            distance,
            unit,
            course,
            effort,
            equipment,
            seed_distance,
            seed_unit,
            seed_time,
            goal,
            interval,
        } => {
            let request = SetRequest {
                stroke,
                reps,
                distance,
                unit: unit.into(),
                course,
                effort,
                equipment,
                seed_distance,
                seed_unit: seed_unit.unwrap_or(unit).into(),
                seed_time,
                goal,
                interval,
            };
            commands::set::run(&request, cli.json)?;
        }
        Command::Snap {
            distance,
            unit,
            course,
        } => {
            commands::snap::run(distance, unit.into(), course, cli.json)?;
        }
    }

    Ok(())
}
