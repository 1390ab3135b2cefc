// Copyright 2025 the autoaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for span merging.

use std::collections::BTreeSet;

use autoaxis_domain::{Category, DomainSpan, Field};
use autoaxis_scale::NumericExtent;
use proptest::prelude::*;

fn categorical(index: usize, values: &[u8]) -> DomainSpan {
    let field = Field::categorical(
        "c",
        values.iter().map(|v| Category::Number(f64::from(*v))),
    );
    DomainSpan::make(&field, index, false)
}

fn numeric(index: usize, low: f64, width: f64) -> DomainSpan {
    let field = Field::numeric("n", NumericExtent::new(low, low + width).unwrap());
    DomainSpan::make(&field, index, false)
}

fn category_set(span: &DomainSpan) -> BTreeSet<u64> {
    span.categories()
        .unwrap()
        .iter()
        .map(|c| match c {
            Category::Number(v) => v.to_bits(),
            Category::Text(_) => unreachable!("only numeric categories are generated"),
        })
        .collect()
}

fn bounds(span: &DomainSpan) -> (f64, f64) {
    let n = span.numeric().unwrap();
    (n.low(), n.high())
}

fn unique(values: Vec<u8>) -> Vec<u8> {
    let mut seen = BTreeSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

proptest! {
    #[test]
    fn prop_category_union_is_commutative_as_a_set(
        a in prop::collection::vec(any::<u8>(), 0..12).prop_map(unique),
        b in prop::collection::vec(any::<u8>(), 0..12).prop_map(unique),
    ) {
        let x = categorical(0, &a);
        let y = categorical(1, &b);
        let xy = x.merge(&y).unwrap();
        let yx = y.merge(&x).unwrap();
        prop_assert_eq!(category_set(&xy), category_set(&yx));
        // Left side keeps its order as a prefix.
        let cats = xy.categories().unwrap();
        for (i, v) in a.iter().enumerate() {
            prop_assert_eq!(&cats[i], &Category::Number(f64::from(*v)));
        }
        prop_assert_eq!(cats.len(), category_set(&xy).len());
    }

    #[test]
    fn prop_numeric_widening_is_associative(
        spans in prop::collection::vec((-1e6..1e6_f64, 0.0..1e6_f64), 3),
    ) {
        let [x, y, z] = [0, 1, 2].map(|i| numeric(i, spans[i].0, spans[i].1));
        let left = x.merge(&y).unwrap().merge(&z).unwrap();
        let right = x.merge(&y.merge(&z).unwrap()).unwrap();
        prop_assert_eq!(bounds(&left), bounds(&right));
        prop_assert_eq!(left.order_index(), 0);
    }

    #[test]
    fn prop_merge_fails_only_when_no_part_merges(
        cats in prop::collection::vec(any::<u8>(), 1..6).prop_map(unique),
        low in -100.0..100.0_f64,
        width in 0.0..100.0_f64,
        prefer_categorical in any::<bool>(),
    ) {
        let extent = NumericExtent::new(low, low + width)
            .unwrap()
            .with_prefer_categorical(prefer_categorical);
        let mixed_field = Field::numeric("m", extent)
            .with_categories(cats.iter().map(|v| Category::Number(f64::from(*v))));
        let mixed = DomainSpan::make(&mixed_field, 0, false);
        let pure_cats = categorical(1, &cats);
        let pure_num = numeric(2, low, width);

        // A categorical part merges only if both sides have one.
        prop_assert_eq!(mixed.merge(&pure_cats).is_some(), prefer_categorical);
        // The numeric parts always merge.
        prop_assert!(mixed.merge(&pure_num).is_some());
        prop_assert!(pure_cats.merge(&pure_num).is_none());
        prop_assert!(pure_num.merge(&pure_cats).is_none());
    }

    #[test]
    fn prop_rank_is_a_total_order(
        lows in prop::collection::vec(-1e3..1e3_f64, 1..8),
        cats in prop::collection::vec(any::<u8>(), 1..4),
    ) {
        let mut spans: Vec<DomainSpan> = lows
            .iter()
            .enumerate()
            .map(|(i, low)| numeric(i, *low, 1.0))
            .collect();
        spans.push(categorical(lows.len(), &cats));
        spans.sort_by(DomainSpan::cmp_rank);
        for w in spans.windows(2) {
            prop_assert_ne!(w[0].cmp_rank(&w[1]), std::cmp::Ordering::Greater);
        }
        prop_assert!(spans.last().unwrap().numeric().is_none());
    }
}
