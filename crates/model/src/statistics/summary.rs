use crate::{decimal::Decimal, order::Order, status::OrderStatus};

/// Counters and money totals over a set of orders.
///
/// Money is only taken from delivered orders.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: u32,
    pub pending: u32,
    pub confirmed: u32,
    pub preparing: u32,
    pub ready: u32,
    pub out_for_delivery: u32,
    pub delivered: u32,
    pub cancelled: u32,
    pub revenue: Decimal,
    pub commission: Decimal,
}

impl OrderStats {
    pub fn extend(&mut self, order: &Order) {
        self.total += 1;
        match order.status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Confirmed => self.confirmed += 1,
            OrderStatus::Preparing => self.preparing += 1,
            OrderStatus::Ready => self.ready += 1,
            OrderStatus::OutForDelivery => self.out_for_delivery += 1,
            OrderStatus::Delivered => {
                self.delivered += 1;
                self.revenue += order.total_amount;
                self.commission += order.commission_or_zero();
            }
            OrderStatus::Cancelled => self.cancelled += 1,
        }
    }

    pub fn merge(&mut self, other: &OrderStats) {
        self.total += other.total;
        self.pending += other.pending;
        self.confirmed += other.confirmed;
        self.preparing += other.preparing;
        self.ready += other.ready;
        self.out_for_delivery += other.out_for_delivery;
        self.delivered += other.delivered;
        self.cancelled += other.cancelled;
        self.revenue += other.revenue;
        self.commission += other.commission;
    }

    pub fn active(&self) -> u32 {
        self.pending + self.confirmed + self.preparing + self.ready
    }

    pub fn completed(&self) -> u32 {
        self.delivered + self.cancelled
    }

    pub fn net_earnings(&self) -> Decimal {
        self.revenue - self.commission
    }

    pub fn average_order_value(&self) -> Decimal {
        self.revenue.div_count(self.delivered)
    }

    pub fn completion_rate(&self) -> f64 {
        rate(self.delivered, self.total)
    }

    pub fn cancellation_rate(&self) -> f64 {
        rate(self.cancelled, self.total)
    }

    pub fn count(&self, status: OrderStatus) -> u32 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::OutForDelivery => self.out_for_delivery,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

impl<'a> FromIterator<&'a Order> for OrderStats {
    fn from_iter<I: IntoIterator<Item = &'a Order>>(iter: I) -> Self {
        let mut stats = OrderStats::default();
        for order in iter {
            stats.extend(order);
        }
        stats
    }
}

/// Statistics rolled up over several days.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RollupSummary {
    pub days: u32,
    pub totals: OrderStats,
}

impl RollupSummary {
    pub fn add_day(&mut self, day: &OrderStats) {
        self.days += 1;
        self.totals.merge(day);
    }

    pub fn total_orders(&self) -> u32 {
        self.totals.total
    }

    pub fn delivered_orders(&self) -> u32 {
        self.totals.delivered
    }

    pub fn cancelled_orders(&self) -> u32 {
        self.totals.cancelled
    }

    pub fn active_orders(&self) -> u32 {
        self.totals.active()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.totals.revenue
    }

    pub fn total_commission(&self) -> Decimal {
        self.totals.commission
    }

    pub fn net_earnings(&self) -> Decimal {
        self.totals.net_earnings()
    }

    // Ratios come from the summed counters, never from per-day ratios.
    pub fn completion_rate(&self) -> f64 {
        self.totals.completion_rate()
    }

    pub fn cancellation_rate(&self) -> f64 {
        self.totals.cancellation_rate()
    }

    pub fn average_order_value(&self) -> Decimal {
        self.totals.average_order_value()
    }

    pub fn orders_per_day(&self) -> f64 {
        rate(self.totals.total, self.days)
    }

    pub fn revenue_per_day(&self) -> Decimal {
        self.totals.revenue.div_count(self.days)
    }
}

fn rate(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
