pub mod day;
pub mod summary;

pub use day::DayGroup;
pub use summary::{OrderStats, RollupSummary};
