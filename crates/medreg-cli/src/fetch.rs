//! # `medreg fetch`
//!
//! Runs one fetch cycle (federal sweep + licensing generator), merges,
//! applies the requested narrowing, and prints.

use chrono::Utc;
use clap::{Args, ValueEnum};

use medreg_core::{
    days_until_label, sort_deadlines, Category, Deadline, DeadlineFilter, SortKey, Status,
};
use medreg_federal::{fetch_federal_deadlines, FederalRegisterClient};
use medreg_licensing::generate_licensing_deadlines;

/// Which axis to order the printed list along.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum SortAxis {
    /// Ascending by due date.
    #[default]
    Date,
    /// Most urgent first.
    Priority,
}

impl From<SortAxis> for SortKey {
    fn from(axis: SortAxis) -> Self {
        match axis {
            SortAxis::Date => SortKey::Date,
            SortAxis::Priority => SortKey::Priority,
        }
    }
}

/// Arguments for `medreg fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Emit the deadline list as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Keep only this category (e.g. hipaa, cms, licensing).
    #[arg(long)]
    pub category: Option<Category>,

    /// Keep only records for this two-letter state code.
    #[arg(long)]
    pub state: Option<String>,

    /// Keep only this status (upcoming, urgent, passed).
    #[arg(long)]
    pub status: Option<Status>,

    /// Case-insensitive search over title, description, and agency.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order.
    #[arg(long, value_enum, default_value_t = SortAxis::Date)]
    pub sort: SortAxis,
}

/// Fetch, merge, narrow, and print.
pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    let now = Utc::now();
    let client = FederalRegisterClient::new()?;

    let mut deadlines = fetch_federal_deadlines(&client).await;
    deadlines.extend(generate_licensing_deadlines(now.date_naive()));
    sort_deadlines(&mut deadlines, args.sort.into(), now);

    let filter = DeadlineFilter {
        categories: args.category.into_iter().collect(),
        states: args.state.into_iter().collect(),
        statuses: args.status.into_iter().collect(),
        search: args.search,
    };
    let kept = filter.apply(&deadlines, now);

    if args.json {
        let views: Vec<_> = kept.iter().map(|d| d.view(now)).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    print_table(&kept, now);
    Ok(())
}

fn print_table(deadlines: &[&Deadline], now: chrono::DateTime<Utc>) {
    if deadlines.is_empty() {
        println!("No deadlines match.");
        return;
    }

    println!(
        "{:<12} {:<14} {:<8} {:<18} TITLE",
        "DATE", "DUE", "PRIO", "CATEGORY"
    );
    for deadline in deadlines {
        println!(
            "{:<12} {:<14} {:<8} {:<18} {}",
            deadline.date,
            days_until_label(deadline.days_until(now)),
            deadline.priority(now),
            deadline.category.label(),
            deadline.title
        );
    }
    println!("\n{} deadlines.", deadlines.len());
}
