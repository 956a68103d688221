//! Item Entity
//!
//! A roadmap card: task, KPI, report or risk.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Item type determines display and which edit controls are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Task,
    Kpi,
    Report,
    Risk,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Task => "task",
            ItemType::Kpi => "kpi",
            ItemType::Report => "report",
            ItemType::Risk => "risk",
        }
    }

    /// Card label shown on the front side
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Task => "Задача",
            ItemType::Kpi => "KPI",
            ItemType::Report => "Отчет",
            ItemType::Risk => "Риск",
        }
    }

    /// Only tasks and reports have an editable back side
    pub fn can_flip(&self) -> bool {
        matches!(self, ItemType::Task | ItemType::Report)
    }
}

/// Progress status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "Not Done")]
    NotDone,
}

impl ItemStatus {
    /// Text of the front-side badge; `None` for items still to do
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            ItemStatus::ToDo => None,
            ItemStatus::InProgress => Some("In Progress"),
            ItemStatus::Done => Some("Done"),
            ItemStatus::NotDone => Some("Failed"),
        }
    }
}

/// Client feedback on a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Happy,
    Like,
    Sad,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Happy, Reaction::Like, Reaction::Sad];

    pub fn emoji(&self) -> &'static str {
        match self {
            Reaction::Happy => "🤩",
            Reaction::Like => "👍",
            Reaction::Sad => "😔",
        }
    }
}

/// Transition of the late-delivery flag.
///
/// `lateDuration` only exists while the item is late, so both fields move
/// together through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LateTransition {
    /// Mark as late. `None` keeps the duration already recorded.
    SetLate { duration: Option<String> },
    /// Mark as on time and drop any recorded duration
    ClearLate,
}

/// Partial field set merged into an item; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub status: Option<ItemStatus>,
    /// `Some(None)` clears the report text
    pub report: Option<Option<String>>,
    pub late: Option<LateTransition>,
    /// `Some(None)` clears the reaction
    pub reaction: Option<Option<Reaction>>,
}

impl ItemPatch {
    pub fn status(status: ItemStatus) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    pub fn report(text: impl Into<String>) -> Self {
        let text = text.into();
        let report = if text.is_empty() { None } else { Some(text) };
        Self { report: Some(report), ..Default::default() }
    }

    pub fn late(transition: LateTransition) -> Self {
        Self { late: Some(transition), ..Default::default() }
    }

    pub fn reaction(reaction: Option<Reaction>) -> Self {
        Self { reaction: Some(reaction), ..Default::default() }
    }

    pub fn with_late(mut self, transition: LateTransition) -> Self {
        self.late = Some(transition);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A roadmap card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    /// User-written notes or report content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// KPI lines, KPI cards only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub is_late: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            item_type,
            description: String::new(),
            owner: None,
            deadline: None,
            status: ItemStatus::default(),
            report: None,
            metrics: Vec::new(),
            deliverables: Vec::new(),
            is_late: false,
            late_duration: None,
            reaction: None,
        }
    }

    /// Returns a copy with the patch merged in
    pub fn apply(&self, patch: &ItemPatch) -> Item {
        let mut next = self.clone();
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(report) = &patch.report {
            next.report = report.clone();
        }
        match &patch.late {
            Some(LateTransition::SetLate { duration }) => {
                next.is_late = true;
                if let Some(duration) = duration {
                    next.late_duration = Some(duration.clone());
                }
            }
            Some(LateTransition::ClearLate) => {
                next.is_late = false;
                next.late_duration = None;
            }
            None => {}
        }
        if let Some(reaction) = patch.reaction {
            next.reaction = reaction;
        }
        next
    }

    /// Reaction value after the user clicks `reaction`: same one clears it
    pub fn toggled_reaction(&self, reaction: Reaction) -> Option<Reaction> {
        if self.reaction == Some(reaction) {
            None
        } else {
            Some(reaction)
        }
    }

    /// Done report that was delivered late
    pub fn is_late_report(&self) -> bool {
        self.item_type == ItemType::Report && self.status == ItemStatus::Done && self.is_late
    }

    /// First word of the owner, as shown on the card front
    pub fn owner_short(&self) -> Option<&str> {
        self.owner.as_deref().and_then(|owner| owner.split(' ').next())
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_item() -> Item {
        Item::new("w1-report", "Report", ItemType::Report)
    }

    #[test]
    fn test_item_defaults() {
        let item = Item::new("w1-econ", "Economics", ItemType::Task);
        assert_eq!(item.id(), "w1-econ");
        assert_eq!(item.status, ItemStatus::ToDo);
        assert!(!item.is_late);
        assert!(item.late_duration.is_none());
    }

    #[test]
    fn test_status_defaults_to_todo_when_absent() {
        let item: Item = serde_json::from_str(
            r#"{"id":"x","title":"T","type":"TASK","description":"d"}"#,
        )
        .unwrap();
        assert_eq!(item.status, ItemStatus::ToDo);
        assert_eq!(item.item_type, ItemType::Task);
    }

    #[test]
    fn test_wire_names() {
        let mut item = report_item();
        item.status = ItemStatus::NotDone;
        item.is_late = true;
        item.late_duration = Some("2 дня".to_string());
        item.reaction = Some(Reaction::Like);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "REPORT");
        assert_eq!(json["status"], "Not Done");
        assert_eq!(json["isLate"], true);
        assert_eq!(json["lateDuration"], "2 дня");
        assert_eq!(json["reaction"], "like");
    }

    #[test]
    fn test_apply_keeps_unmentioned_fields() {
        let mut item = report_item();
        item.report = Some("link".to_string());
        let next = item.apply(&ItemPatch::status(ItemStatus::Done));
        assert_eq!(next.status, ItemStatus::Done);
        assert_eq!(next.report.as_deref(), Some("link"));
        assert_eq!(next.title, item.title);
    }

    #[test]
    fn test_clear_late_drops_duration() {
        let item = report_item()
            .apply(&ItemPatch::late(LateTransition::SetLate { duration: Some("1 неделя".into()) }));
        assert!(item.is_late);
        assert_eq!(item.late_duration.as_deref(), Some("1 неделя"));

        let cleared = item.apply(&ItemPatch::late(LateTransition::ClearLate));
        assert!(!cleared.is_late);
        assert!(cleared.late_duration.is_none());
    }

    #[test]
    fn test_set_late_without_duration_keeps_existing() {
        let item = report_item()
            .apply(&ItemPatch::late(LateTransition::SetLate { duration: Some("3 дня".into()) }))
            .apply(&ItemPatch::late(LateTransition::SetLate { duration: None }));
        assert_eq!(item.late_duration.as_deref(), Some("3 дня"));
    }

    #[test]
    fn test_empty_report_text_clears_report() {
        let item = report_item().apply(&ItemPatch::report("draft"));
        assert_eq!(item.report.as_deref(), Some("draft"));
        assert!(item.apply(&ItemPatch::report("")).report.is_none());
    }

    #[test]
    fn test_toggled_reaction() {
        let mut item = report_item();
        assert_eq!(item.toggled_reaction(Reaction::Happy), Some(Reaction::Happy));
        item.reaction = Some(Reaction::Happy);
        assert_eq!(item.toggled_reaction(Reaction::Happy), None);
        assert_eq!(item.toggled_reaction(Reaction::Sad), Some(Reaction::Sad));
    }

    #[test]
    fn test_flip_and_badges() {
        assert!(ItemType::Task.can_flip());
        assert!(ItemType::Report.can_flip());
        assert!(!ItemType::Kpi.can_flip());
        assert!(!ItemType::Risk.can_flip());
        assert_eq!(ItemStatus::NotDone.badge(), Some("Failed"));
        assert_eq!(ItemStatus::ToDo.badge(), None);
    }

    #[test]
    fn test_owner_short() {
        let mut item = report_item();
        item.owner = Some("A-One Agency + Tech".to_string());
        assert_eq!(item.owner_short(), Some("A-One"));
    }
}
