use chrono::NaiveDate;

use crate::order::Order;

use super::summary::OrderStats;

/// Orders that fall on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub label: String,
    pub orders: Vec<Order>,
}

impl DayGroup {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn stats(&self) -> OrderStats {
        self.orders.iter().collect()
    }
}
