use std::hash::Hash;

use indexmap::IndexMap;

use super::types::{ChartBucket, Legend, LegendEntry};
use crate::domain::{ActionCode, StatEvent};

/// Number of events whose code is one of `codes`
pub fn count_by_codes<'a, I>(events: I, codes: &[ActionCode]) -> u32
where
    I: IntoIterator<Item = &'a StatEvent>,
{
    events
        .into_iter()
        .filter(|event| codes.contains(&event.code))
        .count() as u32
}

/// Fraction as a whole percentage, rounded half up. Non-finite input yields 0.
pub fn format_percentage(fraction: f64) -> i32 {
    let rounded = (fraction * 100.0 + 0.5).floor();
    if rounded.is_finite() { rounded as i32 } else { 0 }
}

/// `numerator / denominator` as a percentage; an empty denominator yields 0
pub fn percentage(numerator: i64, denominator: u32) -> i32 {
    if denominator == 0 {
        return 0;
    }
    format_percentage(numerator as f64 / denominator as f64)
}

/// Group events by key, keeping groups in first-seen order
pub fn group_by<'a, K, F>(events: &'a [StatEvent], key: F) -> IndexMap<K, Vec<&'a StatEvent>>
where
    K: Hash + Eq,
    F: Fn(&'a StatEvent) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a StatEvent>> = IndexMap::new();
    for event in events {
        groups.entry(key(event)).or_default().push(event);
    }
    groups
}

pub fn legend_from_buckets(buckets: &[ChartBucket]) -> Legend {
    buckets
        .iter()
        .map(|bucket| {
            (
                bucket.label.clone(),
                LegendEntry {
                    label: bucket.label.clone(),
                },
            )
        })
        .collect()
}
