//! Future Goal Entity
//!
//! Read-only forward-looking block shown below the weeks.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureGoal {
    pub id: String,
    pub title: String,
    pub period: String,
    pub items: Vec<String>,
    pub kpi: Vec<String>,
}

impl Entity for FutureGoal {
    fn id(&self) -> &str {
        &self.id
    }
}
