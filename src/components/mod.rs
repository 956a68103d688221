//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod roadmap_view;
mod week_row;
mod roadmap_card;
mod status_selector;
mod reaction_bar;
mod outcomes_card;
mod future_goals;
mod dashboard;
mod stat_card;
mod charts;

pub use nav_bar::NavBar;
pub use roadmap_view::RoadmapView;
pub use week_row::WeekRow;
pub use roadmap_card::RoadmapCard;
pub use status_selector::{StatusSelector, ReportTimingSelector};
pub use reaction_bar::ReactionBar;
pub use outcomes_card::OutcomesCard;
pub use future_goals::FutureGoals;
pub use dashboard::Dashboard;
pub use stat_card::StatCard;
pub use charts::{TrafficChart, ActionsChart};
