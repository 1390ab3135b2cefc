// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for scale inference.

use autoaxis_scale::{
    DateUnit, NumericExtent, Scale, ScaleOptions, Transform, date_scale, linear_scale, log_scale,
};
use proptest::prelude::*;

fn assert_well_formed(scale: &Scale, eps: f64) -> Result<(), TestCaseError> {
    prop_assert!(scale.min() < scale.max(), "domain {:?}", scale.domain());
    for w in scale.ticks().windows(2) {
        prop_assert!(w[0] <= w[1], "ticks out of order: {:?}", scale.ticks());
    }
    for &t in scale.ticks() {
        prop_assert!(
            t >= scale.min() - eps && t <= scale.max() + eps,
            "tick {} outside {:?}",
            t,
            scale.domain()
        );
    }
    Ok(())
}

fn options() -> impl Strategy<Value = ScaleOptions> {
    (
        any::<bool>(),
        0.0..0.2_f64,
        0.0..0.2_f64,
        2_usize..20,
        0.0..=1.0_f64,
        any::<bool>(),
    )
        .prop_map(|(nice, pad_low, pad_high, ticks, tolerance, binning)| {
            ScaleOptions::new()
                .with_nice(nice)
                .with_padding(pad_low, pad_high)
                .with_tick_count(ticks)
                .with_include_zero_tolerance(tolerance)
                .with_for_binning(binning)
        })
}

fn width() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 1e-3..1e6_f64]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_linear_degenerate_never_zero_width(v in -1e6..1e6_f64, options in options()) {
        let extent = NumericExtent::new(v, v).unwrap();
        let scale = linear_scale(Some(&extent), &options);
        prop_assert!(scale.min() < scale.max());
    }

    #[test]
    fn prop_linear_ticks_sorted_and_bounded(
        low in -1e6..1e6_f64,
        width in width(),
        options in options(),
    ) {
        let extent = NumericExtent::new(low, low + width).unwrap();
        let scale = linear_scale(Some(&extent), &options);
        let span = scale.max() - scale.min();
        assert_well_formed(&scale, span * 1e-4)?;
        if options.nice {
            prop_assert!(!scale.ticks().is_empty());
        }
    }

    #[test]
    fn prop_linear_domain_covers_data(
        low in -1e4..1e4_f64,
        width in 1e-3..1e4_f64,
        options in options(),
    ) {
        let high = low + width;
        // The proportion/percentage snapping deliberately trims these.
        prop_assume!(!(1.0..=1.0001).contains(&high) && !(100.0..100.001).contains(&high));
        let extent = NumericExtent::new(low, high).unwrap();
        let scale = linear_scale(Some(&extent), &options);
        let eps = (low.abs() + width) * 1e-9;
        prop_assert!(scale.min() <= low + eps);
        prop_assert!(scale.max() >= high - eps);
    }

    #[test]
    fn prop_granular_ticks_are_one_step_apart(
        low in -50_i32..50,
        count in 4_i32..30,
    ) {
        let low = f64::from(low);
        let high = low + f64::from(count);
        let extent = NumericExtent::new(low, high)
            .unwrap()
            .with_granularity(1.0)
            .unwrap();
        let options = ScaleOptions::new()
            .with_include_zero_tolerance(0.0)
            .with_for_binning(true)
            .with_tick_count(usize::try_from(count).unwrap());
        let scale = linear_scale(Some(&extent), &options);
        prop_assert!(scale.is_granular());
        prop_assert_eq!(scale.ticks().len(), usize::try_from(count + 1).unwrap());
        for w in scale.ticks().windows(2) {
            prop_assert!((w[1] - w[0] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_log_ticks_sorted_and_bounded(
        exp_low in -6.0..6.0_f64,
        decades in 0.0..8.0_f64,
        options in options(),
    ) {
        let low = 10_f64.powf(exp_low);
        let high = 10_f64.powf(exp_low + decades);
        let extent = NumericExtent::new(low, high)
            .unwrap()
            .with_transform(Transform::Log);
        let scale = log_scale(&extent, &options).unwrap();
        assert_well_formed(&scale, scale.max() * 1e-3)?;
    }

    #[test]
    fn prop_date_ticks_sorted_and_bounded(
        low in -20_000.0..40_000.0_f64,
        width in prop_oneof![Just(0.0), 1e-6..20_000.0_f64],
        options in options(),
    ) {
        let extent = NumericExtent::dates(low, low + width, DateUnit::Day).unwrap();
        let scale = date_scale(&extent, &options).unwrap();
        assert_well_formed(&scale, 1e-9)?;
        prop_assert!(scale.tick_unit().is_some());
    }
}
