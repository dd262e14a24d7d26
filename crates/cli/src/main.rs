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

mod demo;

use clap::{Parser, Subcommand};
use spa_center::{BookingId, SpaContext};
use spa_center_persistence::{DEFAULT_DATA_FILE, JsonStore, PersistenceError};
use std::path::PathBuf;
use time::Date;
use time::macros::format_description;
use tracing::{info, warn};

/// Spa Center - console harness for the spa object model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    #[arg(short, long, env = "SPA_CENTER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Reference date (YYYY-MM-DD) used instead of the current date
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Build a demo registry and write it to the data file
    Seed,
    /// Load the data file and print the size of every extent
    Summary,
    /// Load the data file and report double-booked employees
    Check,
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("Invalid date '{value}': {err}"))
}

fn load(store: &JsonStore, today: Option<Date>) -> Result<SpaContext, PersistenceError> {
    let mut ctx: SpaContext = SpaContext::new();
    ctx.set_today(today);
    store.load(&mut ctx)?;
    Ok(ctx)
}

fn summary(ctx: &SpaContext) -> Vec<(&'static str, usize)> {
    vec![
        ("persons", ctx.persons().len()),
        ("customers", ctx.customers().len()),
        ("employees", ctx.employees().len()),
        ("  juniors", ctx.juniors().count()),
        ("  mids", ctx.mids().count()),
        ("  seniors", ctx.seniors().count()),
        ("services", ctx.services().len()),
        ("bookings", ctx.bookings().len()),
        ("branches", ctx.branches().len()),
        ("rooms", ctx.rooms().len()),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store: JsonStore = JsonStore::new(&args.data_file);
    info!(path = %store.path().display(), command = ?args.command, "Starting Spa Center");

    match args.command {
        Command::Seed => {
            let mut ctx: SpaContext = SpaContext::new();
            ctx.set_today(args.today);
            demo::populate(&mut ctx)?;
            store.write(&ctx)?;
            println!(
                "Seeded {} persons and {} bookings into {}",
                ctx.persons().len(),
                ctx.bookings().len(),
                store.path().display()
            );
        }
        Command::Summary => {
            let ctx: SpaContext = load(&store, args.today)?;
            for (name, count) in summary(&ctx) {
                println!("{name:<12}{count:>6}");
            }
        }
        Command::Check => {
            let ctx: SpaContext = load(&store, args.today)?;
            let conflicts: Vec<(BookingId, BookingId)> = ctx.appointment_conflicts();
            for (first, second) in &conflicts {
                warn!(%first, %second, "Employee double-booked");
            }
            println!("{} scheduling conflict(s)", conflicts.len());
        }
    }

    Ok(())
}
