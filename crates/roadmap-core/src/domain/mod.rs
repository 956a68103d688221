//! Domain Layer
//!
//! Contains all roadmap and metric entities.
//! This layer has NO external dependencies (except serde/serde_json).

mod entity;
mod item;
mod outcome;
mod week;
mod goal;
mod metrics;

pub use entity::{Entity, DomainError, DomainResult, ensure_unique_ids};
pub use item::{Item, ItemType, ItemStatus, Reaction, ItemPatch, LateTransition};
pub use outcome::Outcome;
pub use week::Week;
pub use goal::FutureGoal;
pub use metrics::{MetricKey, DailySnapshot, MetricTotals, ChartPoint};
