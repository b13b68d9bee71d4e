//! Hour-bucketed segment aggregation for the cohort-compare view

use crate::data::CallRecord;
use crate::filters::SegmentFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One point of an hourly series: `x` is an `"HH:00"` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub x: String,
    pub y: f64,
}

/// Hour-of-day key of a call datetime.
///
/// The datetime is an ISO-8601-ish string (`YYYY-MM-DDTHH:MM:SS`); the hour
/// is the two characters at offsets 11..13. Absent or malformed datetimes
/// land in the `"00"` bucket rather than failing.
pub fn hour_key(datetime: &str) -> &str {
    match datetime.get(11..13) {
        Some(hour) if hour.bytes().all(|b| b.is_ascii_digit()) => hour,
        _ => "00",
    }
}

/// Average one metric per hour bucket over the given records.
///
/// Missing or non-numeric metric values coerce to 0 and still count toward
/// the bucket denominator. Buckets come out sorted ascending by hour key;
/// zero-padding makes the lexicographic order numeric.
pub fn aggregate_by_hour<'a, I>(records: I, metric: &str) -> Vec<HourlyPoint>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut buckets: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let bucket = buckets.entry(hour_key(&record.call_datetime)).or_insert((0.0, 0));
        bucket.0 += record.metric(metric);
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(hour, (sum, count))| HourlyPoint {
            x: format!("{}:00", hour),
            y: if count > 0 { sum / count as f64 } else { 0.0 },
        })
        .collect()
}

/// One labeled series per segment filter, in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSeries {
    pub segment_label: String,
    pub data: Vec<HourlyPoint>,
}

/// Filter the record set by each segment and aggregate the chosen metric.
///
/// Single synchronous pass per segment over the full in-memory collection;
/// identical inputs always produce identical output.
pub fn segment_series(
    records: &[CallRecord],
    metric: &str,
    segments: &[(String, SegmentFilter)],
) -> Vec<SegmentSeries> {
    segments
        .iter()
        .map(|(label, filter)| {
            let matched = records.iter().filter(|record| filter.matches(record));
            SegmentSeries {
                segment_label: label.clone(),
                data: aggregate_by_hour(matched, metric),
            }
        })
        .collect()
}
