//! Metrics History
//!
//! Day-indexed snapshots built from manual "day N, metric K, value V"
//! submissions. Kept sorted by day with one snapshot per day.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{ChartPoint, DailySnapshot, MetricKey, MetricTotals};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsHistory {
    snapshots: Vec<DailySnapshot>,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[DailySnapshot] {
        &self.snapshots
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn day(&self, day_number: u32) -> Option<&DailySnapshot> {
        self.snapshots.iter().find(|s| s.day_number == day_number)
    }

    /// Record `amount` of `key` on `day_number`.
    ///
    /// Zero days and zero amounts are ignored. `tvl` overwrites the day's
    /// value, every other metric adds to it.
    pub fn add_metric(&self, key: MetricKey, day_number: u32, amount: u64) -> MetricsHistory {
        if amount == 0 || day_number == 0 {
            warn!(
                "add_metric: ignored {} = {} on day {}",
                key.as_str(),
                amount,
                day_number
            );
            return self.clone();
        }

        let mut snapshots = self.snapshots.clone();
        match snapshots.iter_mut().find(|s| s.day_number == day_number) {
            Some(snapshot) => snapshot.record(key, amount),
            None => {
                let mut snapshot = DailySnapshot::new(day_number);
                snapshot.record(key, amount);
                snapshots.push(snapshot);
            }
        }
        snapshots.sort_by_key(|s| s.day_number);
        debug!("add_metric: {} += {} on day {}", key.as_str(), amount, day_number);

        MetricsHistory { snapshots }
    }

    /// Summary totals: counts are summed, `tvl` is the highest balance seen
    pub fn aggregate(&self) -> MetricTotals {
        self.snapshots.iter().fold(MetricTotals::default(), |acc, s| MetricTotals {
            visits: acc.visits.saturating_add(s.visits),
            connects: acc.connects.saturating_add(s.connects),
            actions: acc.actions.saturating_add(s.actions),
            tvl: acc.tvl.max(s.tvl),
        })
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.snapshots.iter().map(ChartPoint::from).collect()
    }
}
