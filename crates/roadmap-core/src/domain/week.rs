//! Week Entity
//!
//! One row of the roadmap: its cards plus the outcome checklist.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::Item;
use super::outcome::Outcome;

/// A week of the roadmap.
///
/// Items sit behind `Arc` so an update can reuse every card it didn't touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Arc<Item>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<Outcome>,
}

impl Week {
    pub fn new(id: impl Into<String>, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            items: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn completed_outcomes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_completed).count()
    }

    /// Share of completed outcomes in `[0, 1]`; 0 for a week without outcomes
    pub fn completion_ratio(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.completed_outcomes() as f64 / self.outcomes.len() as f64
    }

    /// Progress bar width in percent
    pub fn completion_percent(&self) -> f64 {
        self.completion_ratio() * 100.0
    }
}

impl Entity for Week {
    fn id(&self) -> &str {
        &self.id
    }
}
