//! Deal Example
//!
//! Works out the cheapest way to buy a cart across vendors and prints a receipt
//! comparing it with buying everything from one vendor.
//!
//! Use `-f` to load a fixture set by name from `./fixtures/deals`
//! Use `-r` to load a YAML or JSON request file instead
//! Use `--best-only` to skip the single-vendor comparison

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;

use cartwise::{
    fixtures::{Fixture, parse_currency},
    receipt::DealReceipt,
    utils::{DealArgs, init_logging},
};

/// Deal Receipt Example
pub fn main() -> Result<()> {
    let args = DealArgs::parse();

    init_logging(&args.logging)?;

    let fixture = match args.request.as_deref() {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::from_set(&args.fixture)?,
    };

    let currency = match args.currency.as_deref() {
        Some(code) => parse_currency(code)?,
        None => fixture.currency(),
    };

    info!(
        items = fixture.cart().len(),
        vendors = fixture.vendors().len(),
        "loaded request"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let start = Instant::now();

    if args.best_only {
        let deal = fixture.request().best_deal()?;
        let elapsed = start.elapsed();

        DealReceipt::from_deal(fixture.request(), &deal, currency).write_to(&mut handle)?;

        writeln!(handle, " {} ({}s)", elapsed.human(Truncate::Nano), elapsed.as_secs_f32())?;
    } else {
        let analysis = fixture.request().analyze()?;
        let elapsed = start.elapsed();

        DealReceipt::from_analysis(fixture.request(), &analysis, currency)
            .write_to(&mut handle)?;

        writeln!(handle, " {} ({}s)", elapsed.human(Truncate::Nano), elapsed.as_secs_f32())?;
    }

    Ok(())
}
