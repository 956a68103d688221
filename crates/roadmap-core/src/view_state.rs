//! View State
//!
//! Transient switches that decide what is on screen. None of it belongs to
//! the roadmap itself and all of it can be dropped at any time.

use std::collections::HashMap;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Roadmap,
    Dashboard,
}

/// Source of dashboard numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// Fixed projection dataset
    #[default]
    Expectation,
    /// Live metrics history
    Reality,
}

/// What the back side of a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardMode {
    #[default]
    Edit,
    Read,
}

/// Flip state of a roadmap card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardView {
    pub flipped: bool,
    pub mode: CardMode,
}

impl CardView {
    /// Click on the card body: turn over, landing in edit mode on the back
    pub fn click_body(self, can_flip: bool) -> CardView {
        if !can_flip {
            return self;
        }
        CardView {
            flipped: !self.flipped,
            mode: CardMode::Edit,
        }
    }

    /// "View report" button: always the back side in read mode
    pub fn view_report(self, can_flip: bool) -> CardView {
        if !can_flip {
            return self;
        }
        CardView {
            flipped: true,
            mode: CardMode::Read,
        }
    }

    pub fn close(self) -> CardView {
        CardView {
            flipped: false,
            ..self
        }
    }

    pub fn is_reading(&self) -> bool {
        self.flipped && self.mode == CardMode::Read
    }
}

/// Flip state of a week's outcomes card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomesView {
    pub flipped: bool,
}

impl OutcomesView {
    /// Clicks on the front turn the card over; clicks on the back do nothing
    pub fn click_body(self) -> OutcomesView {
        OutcomesView { flipped: true }
    }

    pub fn close(self) -> OutcomesView {
        OutcomesView { flipped: false }
    }
}

/// Card flip states keyed by item id; missing entries are front/edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardViews {
    views: HashMap<String, CardView>,
}

impl CardViews {
    pub fn get(&self, item_id: &str) -> CardView {
        self.views.get(item_id).copied().unwrap_or_default()
    }

    pub fn update(&mut self, item_id: &str, f: impl FnOnce(CardView) -> CardView) {
        let next = f(self.get(item_id));
        if next == CardView::default() {
            self.views.remove(item_id);
        } else {
            self.views.insert(item_id.to_string(), next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        assert_eq!(ViewMode::default(), ViewMode::Roadmap);
        assert_eq!(DataMode::default(), DataMode::Expectation);
        let card = CardView::default();
        assert!(!card.flipped);
        assert_eq!(card.mode, CardMode::Edit);
    }

    #[test]
    fn test_click_body_toggles_and_resets_to_edit() {
        let reading = CardView::default().view_report(true);
        assert!(reading.is_reading());

        let front = reading.click_body(true);
        assert!(!front.flipped);

        let back = front.click_body(true);
        assert!(back.flipped);
        assert_eq!(back.mode, CardMode::Edit);
    }

    #[test]
    fn test_view_report_from_back_edit() {
        let card = CardView::default().click_body(true).view_report(true);
        assert!(card.flipped);
        assert_eq!(card.mode, CardMode::Read);
    }

    #[test]
    fn test_close_forces_front() {
        assert!(!CardView::default().view_report(true).close().flipped);
        assert!(!CardView::default().close().flipped);
    }

    #[test]
    fn test_non_flippable_card_stays_put() {
        let card = CardView::default();
        assert_eq!(card.click_body(false), card);
        assert_eq!(card.view_report(false), card);
    }

    #[test]
    fn test_outcomes_card_flip() {
        let view = OutcomesView::default().click_body();
        assert!(view.flipped);
        assert!(view.click_body().flipped);
        assert!(!view.close().flipped);
    }

    #[test]
    fn test_card_views_keyed_by_item() {
        let mut views = CardViews::default();
        views.update("w1-econ", |v| v.click_body(true));
        assert!(views.get("w1-econ").flipped);
        assert!(!views.get("w1-funnels").flipped);

        views.update("w1-econ", CardView::close);
        assert_eq!(views, CardViews::default());

        views.update("w1-report", |v| v.view_report(true));
        assert!(views.get("w1-report").is_reading());
    }
}
