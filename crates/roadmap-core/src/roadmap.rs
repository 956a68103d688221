//! Roadmap State
//!
//! Immutable week/item tree. Every operation returns a new tree that shares
//! all untouched weeks and items with the previous one; unknown identifiers
//! return the tree unchanged.

use std::sync::Arc;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemPatch, ItemStatus, LateTransition, Reaction, Week};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap {
    weeks: Vec<Arc<Week>>,
}

impl Roadmap {
    pub fn new(weeks: Vec<Week>) -> Self {
        Self {
            weeks: weeks.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn weeks(&self) -> &[Arc<Week>] {
        &self.weeks
    }

    pub fn week(&self, week_id: &str) -> Option<&Arc<Week>> {
        self.weeks.iter().find(|week| week.id == week_id)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Arc<Item>> {
        self.weeks
            .iter()
            .flat_map(|week| week.items.iter())
            .find(|item| item.id == item_id)
    }

    /// Merge `patch` into the item with `item_id`
    pub fn update_item(&self, item_id: &str, patch: &ItemPatch) -> Roadmap {
        if patch.is_empty() {
            trace!("update_item: empty patch for '{}', state unchanged", item_id);
            return self.clone();
        }

        let location = self.weeks.iter().enumerate().find_map(|(w, week)| {
            week.items
                .iter()
                .position(|item| item.id == item_id)
                .map(|i| (w, i))
        });

        let Some((week_idx, item_idx)) = location else {
            trace!("update_item: no item '{}', state unchanged", item_id);
            return self.clone();
        };

        let week = &self.weeks[week_idx];
        let mut items = week.items.clone();
        items[item_idx] = Arc::new(week.items[item_idx].apply(patch));
        debug!("update_item: '{}' in '{}' <- {:?}", item_id, week.id, patch);

        let mut weeks = self.weeks.clone();
        weeks[week_idx] = Arc::new(Week {
            items,
            ..Week::clone(week)
        });
        Roadmap { weeks }
    }

    /// Apply `reaction`, or clear it when it is already the current one
    pub fn toggle_reaction(&self, item_id: &str, reaction: Reaction) -> Roadmap {
        match self.find_item(item_id) {
            Some(item) => {
                let next = item.toggled_reaction(reaction);
                self.update_item(item_id, &ItemPatch::reaction(next))
            }
            None => self.clone(),
        }
    }

    /// Report delivered on time: done, not late, no duration
    pub fn submit_on_time(&self, item_id: &str) -> Roadmap {
        let patch = ItemPatch::status(ItemStatus::Done).with_late(LateTransition::ClearLate);
        self.update_item(item_id, &patch)
    }

    /// Report delivered late, keeping a duration typed earlier
    pub fn submit_late(&self, item_id: &str) -> Roadmap {
        let patch = ItemPatch::status(ItemStatus::Done)
            .with_late(LateTransition::SetLate { duration: None });
        self.update_item(item_id, &patch)
    }

    /// Flip `isCompleted` of one outcome in one week
    pub fn toggle_outcome(&self, week_id: &str, outcome_id: &str) -> Roadmap {
        let location = self.weeks.iter().enumerate().find_map(|(w, week)| {
            if week.id != week_id {
                return None;
            }
            week.outcomes
                .iter()
                .position(|outcome| outcome.id == outcome_id)
                .map(|o| (w, o))
        });

        let Some((week_idx, outcome_idx)) = location else {
            trace!("toggle_outcome: no outcome '{}' in '{}', state unchanged", outcome_id, week_id);
            return self.clone();
        };

        let week = &self.weeks[week_idx];
        let mut outcomes = week.outcomes.clone();
        outcomes[outcome_idx] = outcomes[outcome_idx].toggled();
        debug!(
            "toggle_outcome: '{}' in '{}' -> {}",
            outcome_id, week_id, outcomes[outcome_idx].is_completed
        );

        let mut weeks = self.weeks.clone();
        weeks[week_idx] = Arc::new(Week {
            outcomes,
            ..Week::clone(week)
        });
        Roadmap { weeks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemType, Outcome};

    fn sample() -> Roadmap {
        let mut w1 = Week::new("week-1", "Неделя 1", "Baseline & Strategy");
        w1.items = vec![
            Arc::new(Item::new("w1-econ", "Economics", ItemType::Task)),
            Arc::new(Item::new("w1-funnels", "Funnels", ItemType::Task)),
            Arc::new(Item::new("w1-report", "Report", ItemType::Report)),
        ];
        w1.outcomes = vec![Outcome::new("w1-o1", "Model"), Outcome::new("w1-o2", "Map")];

        let mut w2 = Week::new("week-2", "Неделя 2", "Content");
        w2.items = vec![Arc::new(Item::new("w2-lands", "Landings", ItemType::Task))];
        w2.outcomes = vec![Outcome::new("w2-o1", "Ready")];

        Roadmap::new(vec![w1, w2])
    }

    #[test]
    fn test_update_unknown_item_is_noop() {
        let roadmap = sample();
        let next = roadmap.update_item("missing", &ItemPatch::status(ItemStatus::Done));
        assert_eq!(next, roadmap);
    }

    #[test]
    fn test_empty_patch_keeps_every_node() {
        let roadmap = sample();
        let next = roadmap.update_item("w1-econ", &ItemPatch::default());
        assert!(Arc::ptr_eq(&roadmap.weeks()[0], &next.weeks()[0]));
        assert!(Arc::ptr_eq(&roadmap.weeks()[0].items[0], &next.weeks()[0].items[0]));
    }

    #[test]
    fn test_update_changes_only_target_field() {
        let roadmap = sample();
        let next = roadmap.update_item("w1-funnels", &ItemPatch::status(ItemStatus::Done));

        let before = roadmap.find_item("w1-funnels").unwrap();
        let after = next.find_item("w1-funnels").unwrap();
        assert_eq!(after.status, ItemStatus::Done);
        assert_eq!(Item { status: before.status, ..Item::clone(after) }, **before);
    }

    #[test]
    fn test_update_reuses_untouched_nodes() {
        let roadmap = sample();
        let next = roadmap.update_item("w1-funnels", &ItemPatch::status(ItemStatus::Done));

        let (old_w1, new_w1) = (&roadmap.weeks()[0], &next.weeks()[0]);
        assert!(!Arc::ptr_eq(old_w1, new_w1));
        assert!(Arc::ptr_eq(&old_w1.items[0], &new_w1.items[0]));
        assert!(!Arc::ptr_eq(&old_w1.items[1], &new_w1.items[1]));
        assert!(Arc::ptr_eq(&old_w1.items[2], &new_w1.items[2]));
        assert!(Arc::ptr_eq(&roadmap.weeks()[1], &next.weeks()[1]));
    }

    #[test]
    fn test_update_preserves_item_order() {
        let next = sample().update_item("w1-econ", &ItemPatch::report("notes"));
        let ids: Vec<&str> = next.weeks()[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["w1-econ", "w1-funnels", "w1-report"]);
    }

    #[test]
    fn test_toggle_reaction_twice_clears() {
        let roadmap = sample().toggle_reaction("w1-report", Reaction::Happy);
        assert_eq!(roadmap.find_item("w1-report").unwrap().reaction, Some(Reaction::Happy));

        let switched = roadmap.toggle_reaction("w1-report", Reaction::Sad);
        assert_eq!(switched.find_item("w1-report").unwrap().reaction, Some(Reaction::Sad));

        let cleared = switched.toggle_reaction("w1-report", Reaction::Sad);
        assert_eq!(cleared.find_item("w1-report").unwrap().reaction, None);
    }

    #[test]
    fn test_submit_late_then_on_time() {
        let roadmap = sample()
            .submit_late("w1-report")
            .update_item(
                "w1-report",
                &ItemPatch::late(LateTransition::SetLate { duration: Some("2 дня".into()) }),
            );
        let item = roadmap.find_item("w1-report").unwrap();
        assert!(item.is_late_report());
        assert_eq!(item.late_duration.as_deref(), Some("2 дня"));

        let on_time = roadmap.submit_on_time("w1-report");
        let item = on_time.find_item("w1-report").unwrap();
        assert_eq!(item.status, ItemStatus::Done);
        assert!(!item.is_late);
        assert!(item.late_duration.is_none());
    }

    #[test]
    fn test_toggle_outcome_is_involutive() {
        let roadmap = sample();
        let once = roadmap.toggle_outcome("week-1", "w1-o2");
        assert!(once.week("week-1").unwrap().outcomes[1].is_completed);
        let twice = once.toggle_outcome("week-1", "w1-o2");
        assert_eq!(twice, roadmap);
    }

    #[test]
    fn test_toggle_outcome_requires_matching_week() {
        let roadmap = sample();
        assert_eq!(roadmap.toggle_outcome("week-2", "w1-o1"), roadmap);
        assert_eq!(roadmap.toggle_outcome("week-9", "w1-o1"), roadmap);
        assert_eq!(roadmap.toggle_outcome("week-1", "missing"), roadmap);
    }

    #[test]
    fn test_toggle_outcome_reuses_other_weeks_and_items() {
        let roadmap = sample();
        let next = roadmap.toggle_outcome("week-1", "w1-o1");
        assert!(Arc::ptr_eq(&roadmap.weeks()[1], &next.weeks()[1]));
        assert!(Arc::ptr_eq(&roadmap.weeks()[0].items[0], &next.weeks()[0].items[0]));
        assert!(!next.weeks()[0].outcomes[1].is_completed);
    }
}
