//! Seed Catalogue
//!
//! The hard-coded launch plan: weeks, future goals, the projection dataset
//! and the expectation totals. Shipped as an embedded JSON fixture; an
//! external fixture of the same shape can be loaded instead.

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ensure_unique_ids, ChartPoint, DomainResult, FutureGoal, MetricTotals, Week,
};
use crate::roadmap::Roadmap;

const BUILTIN_CATALOGUE: &str = include_str!("../data/catalogue.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub future_goals: Vec<FutureGoal>,
    /// Chart data of expectation mode, never mutated
    pub projection: Vec<ChartPoint>,
    /// Summary card values of expectation mode
    pub expectation: MetricTotals,
}

impl Catalogue {
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(BUILTIN_CATALOGUE)
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let catalogue: Catalogue = serde_json::from_str(json)?;
        catalogue.validate()?;
        info!(
            "catalogue: {} weeks, {} goals, {} projection points",
            catalogue.weeks.len(),
            catalogue.future_goals.len(),
            catalogue.projection.len()
        );
        Ok(catalogue)
    }

    /// Item ids are unique across weeks; outcome ids within their week
    fn validate(&self) -> DomainResult<()> {
        ensure_unique_ids("week", self.weeks.iter())?;
        ensure_unique_ids(
            "item",
            self.weeks.iter().flat_map(|w| w.items.iter().map(|i| &**i)),
        )?;
        for week in &self.weeks {
            ensure_unique_ids("outcome", week.outcomes.iter())?;
        }
        ensure_unique_ids("goal", self.future_goals.iter())
    }

    /// Fresh roadmap state for a new session
    pub fn roadmap(&self) -> Roadmap {
        Roadmap::new(self.weeks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, ItemStatus, ItemType};

    #[test]
    fn test_builtin_shape() {
        let catalogue = Catalogue::builtin().expect("builtin catalogue");
        assert_eq!(catalogue.weeks.len(), 4);
        for week in &catalogue.weeks {
            assert_eq!(week.items.len(), 5);
            assert_eq!(week.outcomes.len(), 4);
            assert!(week.outcomes.iter().all(|o| !o.is_completed));
            assert_eq!(week.items.last().unwrap().item_type, ItemType::Report);
        }
        assert_eq!(catalogue.future_goals.len(), 2);
        assert_eq!(catalogue.projection.len(), 7);
        assert_eq!(catalogue.projection[6].day, "Day 30");
        assert_eq!(catalogue.expectation.tvl, 320000);
    }

    #[test]
    fn test_builtin_ids() {
        let catalogue = Catalogue::builtin().unwrap();
        let week_ids: Vec<&str> = catalogue.weeks.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(week_ids, ["week-1", "week-2", "week-3", "week-4"]);

        let roadmap = catalogue.roadmap();
        let item = roadmap.find_item("w4-final").unwrap();
        assert_eq!(item.item_type, ItemType::Report);
        assert_eq!(item.status, ItemStatus::ToDo);
        assert!(roadmap.find_item("w2-docs").is_some());
        assert_eq!(
            catalogue.future_goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            ["future-3m", "future-6m"]
        );
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = Catalogue::from_json("{\"weeks\": 3}").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_duplicate_item_id_is_conflict() {
        let json = r#"{
            "weeks": [
                {"id": "a", "title": "A", "subtitle": "",
                 "items": [{"id": "x", "title": "X", "type": "TASK", "description": ""}]},
                {"id": "b", "title": "B", "subtitle": "",
                 "items": [{"id": "x", "title": "X", "type": "KPI", "description": ""}]}
            ],
            "projection": [],
            "expectation": {"visits": 0, "connects": 0, "actions": 0, "tvl": 0}
        }"#;
        let err = Catalogue::from_json(json).unwrap_err();
        assert_eq!(err, DomainError::Conflict("duplicate item id 'x'".to_string()));
    }

    #[test]
    fn test_weeks_without_outcomes_and_goals_load() {
        let json = r#"{
            "weeks": [{"id": "a", "title": "A", "subtitle": "", "items": []}],
            "projection": [],
            "expectation": {"visits": 1, "connects": 2, "actions": 3, "tvl": 4}
        }"#;
        let catalogue = Catalogue::from_json(json).unwrap();
        assert!(catalogue.weeks[0].outcomes.is_empty());
        assert!(catalogue.future_goals.is_empty());
    }
}
