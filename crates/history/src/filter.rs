use chrono::NaiveDate;
use dates::range::DateRange;
use model::{order::Order, status::OrderStatus};

/// Narrows a history listing. An empty status list keeps every status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub range: DateRange,
    pub statuses: Vec<OrderStatus>,
}

impl HistoryFilter {
    pub fn with_range(range: DateRange) -> Self {
        HistoryFilter {
            range,
            statuses: vec![],
        }
    }

    pub fn with_statuses(mut self, statuses: Vec<OrderStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn matches_status(&self, order: &Order) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&order.status)
    }

    pub fn matches_day(&self, day: NaiveDate, today: NaiveDate) -> bool {
        self.range.contains(day, today)
    }
}
