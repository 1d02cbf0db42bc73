// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod scenario;

use clap::{Parser, Subcommand, ValueEnum};
use scenario::{AppointmentInput, ContactInput, Dismissal, Report, Session, VisitInput};
use std::path::{Path, PathBuf};
use time::Date;
use time::macros::format_description;
use tracing::info;
use wellspring::{Clock, CoreError, FixedClock, SystemClock, VisitStore};
use wellspring_domain::HeightUnit;
use wellspring_persistence::{JsonFileVisitStore, MemoryVisitStore, PersistenceError};

/// `WellSpring` - drive the clinic site's forms and popup from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the visited-flag file. If not provided, the flag lives in memory.
    #[arg(short, long, global = true)]
    state_file: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Use this date (YYYY-MM-DD) as today instead of the local calendar day
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<Date>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute and classify a BMI
    Bmi {
        /// Height as typed into the calculator
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Unit of the height
        #[arg(long, value_enum, default_value_t = Unit::Cm)]
        unit: Unit,

        /// Weight in kilograms as typed into the calculator
        #[arg(long, allow_hyphen_values = true)]
        weight: String,
    },

    /// Submit the appointment booking form
    Appointment {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Preferred date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        /// Tick the data collection consent box
        #[arg(long)]
        consent: bool,
    },

    /// Submit the contact form
    Contact {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Optional phone number
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Load a page and report what the welcome popup does
    Visit {
        /// Location path of the page
        #[arg(long, default_value = "/index.html")]
        path: String,

        /// Open the popup from the "Student Info" nav button
        #[arg(long)]
        from_nav: bool,

        /// Close the popup this way once it is showing
        #[arg(long, value_enum)]
        dismiss: Option<Dismiss>,

        /// Forget the stored visit before loading the page
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    Cm,
    M,
}

impl From<Unit> for HeightUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Cm => Self::Centimetres,
            Unit::M => Self::Metres,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dismiss {
    Accept,
    ClickOutside,
    Escape,
}

impl From<Dismiss> for Dismissal {
    fn from(dismiss: Dismiss) -> Self {
        match dismiss {
            Dismiss::Accept => Self::Accept,
            Dismiss::ClickOutside => Self::ClickOutside,
            Dismiss::Escape => Self::Escape,
        }
    }
}

/// The clock chosen on the command line.
#[derive(Debug, Clone, Copy)]
enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn today(&self) -> Date {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn page_path(command: &Command) -> &str {
    match command {
        Command::Bmi { .. } => "/bmi.html",
        Command::Appointment { .. } => "/appointments.html",
        Command::Contact { .. } => "/contact.html",
        Command::Visit { path, .. } => path,
    }
}

/// Opens the state file, forgetting the stored visit if asked to.
fn file_store(path: &Path, command: &Command) -> Result<JsonFileVisitStore, PersistenceError> {
    let store: JsonFileVisitStore = JsonFileVisitStore::new(path);
    if matches!(command, Command::Visit { reset: true, .. }) {
        store.clear()?;
    }
    Ok(store)
}

fn run<S: VisitStore>(store: S, clock: CliClock, command: Command) -> Result<Report, CoreError> {
    let mut session: Session<S, CliClock> = Session::open(store, clock, page_path(&command))?;

    match command {
        Command::Bmi {
            height,
            unit,
            weight,
        } => session.bmi(&height, unit.into(), &weight),
        Command::Appointment {
            first_name,
            last_name,
            email,
            phone,
            date,
            consent,
        } => session.appointment(&AppointmentInput {
            first_name,
            last_name,
            email,
            phone,
            preferred_date: date,
            consent,
        }),
        Command::Contact {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
        } => session.contact(&ContactInput {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
        }),
        Command::Visit {
            from_nav, dismiss, ..
        } => session.visit(&VisitInput {
            from_nav,
            dismiss: dismiss.map(Dismissal::from),
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let clock: CliClock = args
        .today
        .map_or(CliClock::System(SystemClock), |today| {
            CliClock::Fixed(FixedClock(today))
        });

    let report: Report = if let Some(state_file) = &args.state_file {
        info!("Using visit state file at: {}", state_file.display());
        let store: JsonFileVisitStore = file_store(state_file, &args.command)?;
        run(store, clock, args.command)?
    } else {
        info!("Using in-memory visit state");
        run(MemoryVisitStore::default(), clock, args.command)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
