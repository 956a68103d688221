//! Outcome Entity
//!
//! A checklist line closing out a week.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Outcome {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_completed: false,
        }
    }

    pub fn toggled(&self) -> Outcome {
        Outcome {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

impl Entity for Outcome {
    fn id(&self) -> &str {
        &self.id
    }
}
