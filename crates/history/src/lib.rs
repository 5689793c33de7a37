pub mod filter;
pub mod group;
pub mod summary;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use dates::HistoryView;
use filter::HistoryFilter;
use group::{build_day_groups, MissingTimestampPolicy};
use log::info;
use model::{
    errors::HistoryError,
    order::Order,
    statistics::{DayGroup, RollupSummary},
};
use summary::summarize;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    pub view: HistoryView,
    pub policy: MissingTimestampPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReport {
    pub today: NaiveDate,
    pub groups: Vec<DayGroup>,
    pub summary: RollupSummary,
}

#[derive(Clone)]
pub struct OrderHistory {
    clock: Arc<dyn Clock>,
    config: HistoryConfig,
}

impl OrderHistory {
    pub fn new(clock: Arc<dyn Clock>, config: HistoryConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    pub fn day_groups(
        &self,
        orders: &[Order],
        filter: &HistoryFilter,
    ) -> Result<Vec<DayGroup>, HistoryError> {
        self.day_groups_at(orders, filter, self.clock.today())
    }

    pub fn summary(
        &self,
        orders: &[Order],
        filter: &HistoryFilter,
    ) -> Result<RollupSummary, HistoryError> {
        Ok(summarize(&self.day_groups(orders, filter)?))
    }

    pub fn report(
        &self,
        orders: &[Order],
        filter: &HistoryFilter,
    ) -> Result<HistoryReport, HistoryError> {
        let today = self.clock.today();
        let groups = self.day_groups_at(orders, filter, today)?;
        let summary = summarize(&groups);
        info!(
            "History report for {:?} view: {} orders over {} days",
            self.config.view,
            summary.total_orders(),
            summary.days
        );
        Ok(HistoryReport {
            today,
            groups,
            summary,
        })
    }

    // Status filtering happens before grouping so the missing-timestamp policy
    // only sees orders the caller asked for.
    fn day_groups_at(
        &self,
        orders: &[Order],
        filter: &HistoryFilter,
        today: NaiveDate,
    ) -> Result<Vec<DayGroup>, HistoryError> {
        let selected = orders
            .iter()
            .filter(|order| filter.matches_status(order))
            .cloned()
            .collect::<Vec<_>>();
        let mut groups = build_day_groups(
            &selected,
            today,
            self.config.view.anchor(),
            self.config.policy,
        )?;
        groups.retain(|group| filter.matches_day(group.day, today));
        Ok(groups)
    }
}
