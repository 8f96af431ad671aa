// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod compose;
mod report;

use chrono::Timelike;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use orange_mail_domain::{
    DEFAULT_DEADLINE_HOUR, Facility, FacilityType, LetterTally, Region, SpecialDayEntry,
    available_regions, clamp_letter_count, deadline_countdown, facilities_for, parse_iso_date,
    rank_upcoming, rank_upcoming_for, today_local,
};
use std::path::PathBuf;
use time::{Date, Time, macros::format_description};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::report::{
    GrowthReport, RankedDay, rank_rows, render_facilities, render_regions, render_special_days,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Orange Mail - letter tools for families writing to incarcerated loved ones
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Use this date (YYYY-MM-DD) instead of today's local date
    #[arg(long, global = true)]
    today: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let options: Options = Options {
            today: self.today,
            json: self.json,
        };
        self.command.run(&options)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Flags shared by every subcommand.
#[derive(Debug)]
struct Options {
    today: Option<String>,
    json: bool,
}

impl Options {
    fn today(&self) -> Result<Date> {
        match &self.today {
            Some(date_string) => parse_iso_date(date_string).wrap_err("Invalid --today value"),
            None => today_local().wrap_err("Failed to read the local date"),
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Show the relationship growth stage for a letter count
    #[command(visible_alias = "g")]
    Growth {
        /// Letters sent
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        sent: i64,
        /// Letters received
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        received: i64,
    },

    /// List facilities, filtered by type and region
    #[command(visible_alias = "f")]
    Facilities {
        /// Facility type label, e.g. 교도소
        #[arg(long = "type")]
        facility_type: Option<String>,
        /// Region label, e.g. 서울
        #[arg(long)]
        region: Option<String>,
    },

    /// Rank upcoming special days read from a JSON file
    #[command(visible_alias = "sd")]
    SpecialDays {
        /// JSON array of special day entries
        file: PathBuf,
        /// Only entries for this person
        #[arg(long)]
        entity: Option<String>,
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },

    /// Show the time left before today's mailing cutoff
    #[command(visible_alias = "dl")]
    Deadline {
        /// Cutoff hour (0-23)
        #[arg(long, default_value_t = DEFAULT_DEADLINE_HOUR)]
        deadline_hour: u8,
        /// Use this time (HH:MM:SS) instead of the local clock
        #[arg(long)]
        at: Option<String>,
    },

    /// Run a scripted compose session, one command per line
    #[command(visible_alias = "c")]
    Compose {
        /// Script file; reads standard input when omitted
        script: Option<PathBuf>,
        /// Start with empty sender details instead of the default sender
        #[arg(long)]
        blank_sender: bool,
    },
}

impl Command {
    fn run(self, options: &Options) -> Result<()> {
        match self {
            Self::Growth { sent, received } => growth(options, sent, received),
            Self::Facilities {
                facility_type,
                region,
            } => facilities(options, facility_type.as_deref(), region.as_deref()),
            Self::SpecialDays {
                file,
                entity,
                limit,
            } => special_days(options, &file, entity.as_deref(), limit),
            Self::Deadline { deadline_hour, at } => deadline(deadline_hour, at.as_deref()),
            Self::Compose {
                script,
                blank_sender,
            } => compose::run(options.json, script.as_deref(), blank_sender),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json: String = serde_json::to_string_pretty(value).wrap_err("Failed to encode JSON")?;
    println!("{json}");
    Ok(())
}

/// Show the growth stage for a letter tally
fn growth(options: &Options, sent: i64, received: i64) -> Result<()> {
    let tally: LetterTally =
        LetterTally::new(clamp_letter_count(sent), clamp_letter_count(received));
    debug!(sent = tally.sent, received = tally.received, "Computing growth stage");

    let report: GrowthReport = GrowthReport::new(tally);
    if options.json {
        return print_json(&report);
    }
    println!("{}", report.render());
    Ok(())
}

/// List facilities for the given filter
fn facilities(options: &Options, facility_type: Option<&str>, region: Option<&str>) -> Result<()> {
    let facility_type: Option<FacilityType> = facility_type
        .map(str::parse)
        .transpose()
        .wrap_err("Invalid --type value")?;
    let region: Option<Region> = region
        .map(str::parse)
        .transpose()
        .wrap_err("Invalid --region value")?;

    let found: Vec<&Facility> = facilities_for(facility_type, region);
    info!(count = found.len(), "Found facilities");

    if options.json {
        return print_json(&found);
    }

    // Without a region, list the regions the type can be narrowed to
    let unnarrowed: Option<FacilityType> =
        facility_type.filter(|t| region.is_none() && !t.is_general_address());
    if let Some(facility_type) = unnarrowed {
        println!(
            "{facility_type} 지역: {}",
            render_regions(&available_regions(Some(facility_type)))
        );
    }
    println!("{}", render_facilities(&found));
    Ok(())
}

/// Rank special days from a JSON file
fn special_days(
    options: &Options,
    file: &std::path::Path,
    entity: Option<&str>,
    limit: usize,
) -> Result<()> {
    let today: Date = options.today()?;
    let contents: String = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
    let entries: Vec<SpecialDayEntry> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Failed to parse special days in {}", file.display()))?;
    debug!(count = entries.len(), %today, "Loaded special days");

    let ranked: Vec<&SpecialDayEntry> = match entity {
        Some(entity_id) => rank_upcoming_for(&entries, entity_id, limit, today),
        None => rank_upcoming(&entries, limit, today),
    };
    let rows: Vec<RankedDay<'_>> = rank_rows(&ranked, today);

    if options.json {
        return print_json(&rows);
    }
    println!("{}", render_special_days(&rows));
    Ok(())
}

fn local_time() -> Result<Time> {
    let now = chrono::Local::now().time();
    let hour: u8 = u8::try_from(now.hour())?;
    let minute: u8 = u8::try_from(now.minute())?;
    let second: u8 = u8::try_from(now.second())?;
    Time::from_hms(hour, minute, second).wrap_err("Failed to read the local time")
}

/// Show the countdown to the mailing cutoff
fn deadline(deadline_hour: u8, at: Option<&str>) -> Result<()> {
    let now: Time = match at {
        Some(value) => Time::parse(value, format_description!("[hour]:[minute]:[second]"))
            .wrap_err_with(|| format!("Invalid --at value '{value}'"))?,
        None => local_time()?,
    };

    let status = deadline_countdown(now, deadline_hour)?;
    println!("{status}");
    Ok(())
}
