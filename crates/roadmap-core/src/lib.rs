//! Launch Roadmap Core
//!
//! State model behind the launch roadmap dashboard: the week/item tree with
//! its update rules, the manually entered metrics history, and the view
//! switches around them. Everything is in memory and target independent.

pub mod domain;
pub mod roadmap;
pub mod history;
pub mod view_state;
pub mod input;
pub mod format;
pub mod catalogue;


pub use catalogue::Catalogue;
pub use history::MetricsHistory;
pub use roadmap::Roadmap;
