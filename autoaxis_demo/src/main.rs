// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the axis domains and scales inferred for a few sample datasets.
//!
//! Run with `RUST_LOG=debug` to see each inference decision.

use autoaxis_domain::{AxisDomain, Category, Field, SpanContent, Summary};
use autoaxis_scale::{DateUnit, ExtentError, NumericExtent, Scale, ScaleOptions, Transform};

/// 2020-01-01, in days since the epoch.
const JAN_1_2020: f64 = 18_262.0;

fn main() -> Result<(), ExtentError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Bar chart: summed sales next to a mean, sharing the y axis.
    let mut sales = AxisDomain::new(true);
    sales
        .add_field(&numeric("sales", 120.0, 870.0)?.with_summary(Summary::Sum))
        .add_field(&numeric("average", 40.0, 95.0)?.with_summary(Summary::Mean));
    print_axis("sales", &sales, &ScaleOptions::new(), Transform::Linear);

    // Two categorical fields on one axis: the union keeps first-seen order.
    let mut regions = AxisDomain::new(false);
    regions
        .add_field(&categorical("q1 regions", &["north", "east", "south"]))
        .add_field(&categorical("q2 regions", &["east", "west", "north"]));
    print_axis("regions", &regions, &ScaleOptions::new(), Transform::Linear);

    // Small integer range binned into a histogram: one tick per value.
    let extent = NumericExtent::new(1.0, 10.0)?
        .with_granularity(1.0)?
        .with_prefer_categorical(true);
    let mut rating = AxisDomain::new(true);
    rating.add_field(&Field::numeric("rating", extent));
    let options = ScaleOptions::new()
        .with_tick_count(10)
        .with_for_binning(true)
        .with_include_zero_tolerance(0.0);
    print_axis("rating", &rating, &options, Transform::Linear);

    // Populations across many decades, on a log axis.
    let mut population = AxisDomain::new(true);
    population.add_field(&numeric("population", 800.0, 3.7e7)?);
    print_axis(
        "population",
        &population,
        &ScaleOptions::new().with_include_zero_tolerance(0.0),
        Transform::Log,
    );

    // A year and a half of daily observations.
    let extent = NumericExtent::dates(JAN_1_2020 + 14.0, JAN_1_2020 + 540.0, DateUnit::Day)?;
    let mut time = AxisDomain::new(true);
    time.add_field(&Field::numeric("date", extent));
    print_axis(
        "date",
        &time,
        &ScaleOptions::new().with_tick_count(8),
        Transform::Linear,
    );

    Ok(())
}

fn numeric(name: &str, low: f64, high: f64) -> Result<Field, ExtentError> {
    Ok(Field::numeric(name, NumericExtent::new(low, high)?))
}

fn categorical(name: &str, values: &[&str]) -> Field {
    Field::categorical(name, values.iter().map(|v| Category::from(*v)))
}

fn print_axis(label: &str, axis: &AxisDomain, options: &ScaleOptions, transform: Transform) {
    println!("== {label} ({} fields)", axis.spans().len());
    for (i, span) in axis.merged().iter().enumerate() {
        match span.content() {
            SpanContent::Categories(values) => {
                let values: Vec<String> = values.iter().map(ToString::to_string).collect();
                println!("  group {i}: categories [{}]", values.join(", "));
            }
            SpanContent::Range(low, high) => {
                let zero = if span.desires_zero() { ", wants zero" } else { "" };
                println!("  group {i}: range [{low}, {high}]{zero}");
            }
        }
    }
    match axis.infer_scale(options, transform) {
        None => println!("  categorical axis, no numeric scale"),
        Some(Err(err)) => println!("  scale inference failed: {err}"),
        Some(Ok(scale)) => print_scale(&scale),
    }
    println!();
}

fn print_scale(scale: &Scale) {
    println!(
        "  {} scale [{}, {}]{}",
        scale.kind().name(),
        scale.min(),
        scale.max(),
        if scale.is_granular() { " (granular)" } else { "" }
    );
    if let Some((unit, multiple)) = scale.tick_unit() {
        println!("  ticks every {multiple} {unit}");
    }
    println!("  ticks: {}", scale.tick_labels().join(", "));
}
