use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::entry::AttendanceLog;
use crate::models::report::{DaySummary, WorkPair};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use std::collections::BTreeMap;

/// An entry reduced to what the aggregation needs.
#[derive(Debug, Clone, Copy)]
pub struct TimedAction {
    pub at: DateTime<FixedOffset>,
    pub action: Action,
}

/// Parse every entry, expressed in the reporting timezone.
/// The first unparsable timestamp aborts the whole conversion.
pub fn parse_entries(entries: &[AttendanceLog], tz: FixedOffset) -> AppResult<Vec<TimedAction>> {
    entries
        .iter()
        .map(|e| {
            Ok(TimedAction {
                at: e.parsed_timestamp()?.with_timezone(&tz),
                action: e.action,
            })
        })
        .collect()
}

/// Bucket by calendar date; the map iterates in ascending date order.
pub fn group_by_day(events: Vec<TimedAction>) -> BTreeMap<NaiveDate, Vec<TimedAction>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<TimedAction>> = BTreeMap::new();
    for ev in events {
        by_date.entry(ev.at.date_naive()).or_default().push(ev);
    }
    by_date
}

/// Pair a chronologically sorted day.
///
/// Only a `start` immediately followed by an `end` forms a pair; both are
/// consumed. Any other entry (start followed by start, end without a start
/// right before it, trailing start) is skipped. So
/// `[start 09:00, start 09:05, end 17:00]` yields the single pair 09:05–17:00.
pub fn pair_adjacent(sorted: &[TimedAction]) -> Vec<WorkPair> {
    let mut pairs = Vec::with_capacity(sorted.len() / 2);
    let mut i = 0;

    while i + 1 < sorted.len() {
        let (first, second) = (&sorted[i], &sorted[i + 1]);

        if first.action.is_start() && second.action.is_end() {
            pairs.push(WorkPair {
                start: first.at,
                end: second.at,
                duration: second.at - first.at,
            });
            i += 2;
            continue;
        }

        i += 1;
    }

    pairs
}

pub fn summarize_day(date: NaiveDate, mut events: Vec<TimedAction>) -> DaySummary {
    events.sort_by_key(|e| e.at);

    let pairs = pair_adjacent(&events);
    let total = pairs
        .iter()
        .fold(TimeDelta::zero(), |acc, p| acc + p.duration);

    DaySummary { date, pairs, total }
}
