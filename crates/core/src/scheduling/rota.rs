//! Rota aggregation: bucket shifts by calendar day within a week window.

use ahash::AHashMap;
use chrono::NaiveDate;
use staffhub_domain::timestamp;
use staffhub_domain::Shift;
use tracing::debug;

/// One day of the weekly rota grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRoster {
    pub day: NaiveDate,
    /// Shifts on this day, ascending by start time.
    pub shifts: Vec<Shift>,
}

/// Group shifts into the seven day buckets of `week`.
///
/// A shift belongs to the bucket matching the local calendar day of its
/// `date` field; any time-of-day noise on `date` is ignored. Shifts outside
/// the window are omitted, and a shift lands in at most one bucket. Within
/// a bucket, ordering is ascending by `start_time` (stable, so equal start
/// times keep their input order).
pub fn build_week_rota(week: &[NaiveDate; 7], shifts: &[Shift]) -> Vec<DayRoster> {
    // Single pass pre-bucketing keeps this O(shifts) instead of
    // O(shifts x 7)
    let mut buckets: AHashMap<NaiveDate, Vec<Shift>> = AHashMap::with_capacity(7);

    for shift in shifts {
        let day = match timestamp::to_local_date(shift.date) {
            Ok(day) => day,
            Err(err) => {
                debug!(shift_id = %shift.id, error = %err, "skipping shift with unrepresentable date");
                continue;
            }
        };
        if week.contains(&day) {
            buckets.entry(day).or_default().push(shift.clone());
        }
    }

    week.iter()
        .map(|day| {
            let mut shifts = buckets.remove(day).unwrap_or_default();
            shifts.sort_by_key(|s| s.start_time);
            DayRoster { day: *day, shifts }
        })
        .collect()
}
