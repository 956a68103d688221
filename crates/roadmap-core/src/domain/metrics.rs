//! Metric Entities
//!
//! Daily snapshots of the launch funnel and the totals derived from them.

use serde::{Deserialize, Serialize};

/// The four tracked metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    Visits,
    Connects,
    Actions,
    /// Total value locked: a balance, not a flow
    Tvl,
}

impl MetricKey {
    pub const ALL: [MetricKey; 4] = [
        MetricKey::Visits,
        MetricKey::Connects,
        MetricKey::Actions,
        MetricKey::Tvl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Visits => "visits",
            MetricKey::Connects => "connects",
            MetricKey::Actions => "actions",
            MetricKey::Tvl => "tvl",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MetricKey::Visits => 0,
            MetricKey::Connects => 1,
            MetricKey::Actions => 2,
            MetricKey::Tvl => 3,
        }
    }

    /// Point-in-time balances overwrite; period counts accumulate
    pub fn is_balance(&self) -> bool {
        matches!(self, MetricKey::Tvl)
    }
}

/// Metric values recorded for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub day_number: u32,
    pub visits: u64,
    pub connects: u64,
    pub actions: u64,
    pub tvl: u64,
}

impl DailySnapshot {
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            visits: 0,
            connects: 0,
            actions: 0,
            tvl: 0,
        }
    }

    pub fn label(&self) -> String {
        format!("Day {}", self.day_number)
    }

    fn slot(&mut self, key: MetricKey) -> &mut u64 {
        match key {
            MetricKey::Visits => &mut self.visits,
            MetricKey::Connects => &mut self.connects,
            MetricKey::Actions => &mut self.actions,
            MetricKey::Tvl => &mut self.tvl,
        }
    }

    /// Writes `amount` under the balance/count rule of `key`
    pub fn record(&mut self, key: MetricKey, amount: u64) {
        let slot = self.slot(key);
        if key.is_balance() {
            *slot = amount;
        } else {
            *slot = slot.saturating_add(amount);
        }
    }
}

/// Summary card values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTotals {
    pub visits: u64,
    pub connects: u64,
    pub actions: u64,
    pub tvl: u64,
}

impl MetricTotals {
    pub fn get(&self, key: MetricKey) -> u64 {
        match key {
            MetricKey::Visits => self.visits,
            MetricKey::Connects => self.connects,
            MetricKey::Actions => self.actions,
            MetricKey::Tvl => self.tvl,
        }
    }
}

/// One x-axis point of the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub day: String,
    pub visits: u64,
    pub connects: u64,
    pub actions: u64,
}

impl From<&DailySnapshot> for ChartPoint {
    fn from(snapshot: &DailySnapshot) -> Self {
        Self {
            day: snapshot.label(),
            visits: snapshot.visits,
            connects: snapshot.connects,
            actions: snapshot.actions,
        }
    }
}
