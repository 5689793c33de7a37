use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{decimal::Decimal, ids::OrderId, status::OrderStatus};

/// Which timestamp places an order on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    CreatedAt,
    DeliveredAt,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::CreatedAt => write!(f, "created_at"),
            Anchor::DeliveredAt => write!(f, "delivered_at"),
        }
    }
}

/// A customer order as delivered by the order-management backend.
///
/// Timestamps keep the UTC offset they were recorded with; calendar days are
/// always taken in that offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Decimal>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<FixedOffset>>,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        status: OrderStatus,
        total_amount: Decimal,
        created_at: DateTime<FixedOffset>,
    ) -> Order {
        Order {
            id: id.into(),
            status,
            total_amount,
            commission: None,
            created_at,
            delivered_at: None,
        }
    }

    pub fn with_commission(mut self, commission: Decimal) -> Order {
        self.commission = Some(commission);
        self
    }

    pub fn with_delivered_at(mut self, delivered_at: DateTime<FixedOffset>) -> Order {
        self.delivered_at = Some(delivered_at);
        self
    }

    pub fn timestamp(&self, anchor: Anchor) -> Option<DateTime<FixedOffset>> {
        match anchor {
            Anchor::CreatedAt => Some(self.created_at),
            Anchor::DeliveredAt => self.delivered_at,
        }
    }

    /// Whether the order must carry the `anchor` timestamp. Only delivered
    /// orders have a delivery time.
    pub fn requires_timestamp(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::CreatedAt => true,
            Anchor::DeliveredAt => self.is_delivered(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    pub fn commission_or_zero(&self) -> Decimal {
        self.commission.unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Order, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn orders_from_json(json: &str) -> Result<Vec<Order>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn orders_to_json(orders: &[Order]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(orders)
}
