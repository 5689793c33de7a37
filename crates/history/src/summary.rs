use model::statistics::{DayGroup, OrderStats, RollupSummary};

pub fn group_stats(group: &DayGroup) -> OrderStats {
    group.stats()
}

/// Rolls per-day statistics up into one summary. Every group counts as a day.
pub fn summarize(groups: &[DayGroup]) -> RollupSummary {
    let mut summary = RollupSummary::default();
    for group in groups {
        summary.add_day(&group_stats(group));
    }
    summary
}
