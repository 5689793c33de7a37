use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _};

#[derive(
    EnumIter, EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn list() -> Vec<OrderStatus> {
        OrderStatus::iter().collect()
    }

    /// Still waiting on the kitchen side.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending
                | OrderStatus::Confirmed
                | OrderStatus::Preparing
                | OrderStatus::Ready
        )
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn info(&self) -> &'static StatusInfo {
        &STATUS_TABLE[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

/// Presentation metadata for a status.
#[derive(Debug, PartialEq, Eq)]
pub struct StatusInfo {
    pub status: OrderStatus,
    pub label: &'static str,
    /// RGB hex.
    pub color: &'static str,
    pub icon: &'static str,
}

// Indexed by discriminant.
const STATUS_TABLE: [StatusInfo; 7] = [
    StatusInfo {
        status: OrderStatus::Pending,
        label: "Pending",
        color: "#FF9800",
        icon: "⏳",
    },
    StatusInfo {
        status: OrderStatus::Confirmed,
        label: "Confirmed",
        color: "#2196F3",
        icon: "✅",
    },
    StatusInfo {
        status: OrderStatus::Preparing,
        label: "Preparing",
        color: "#9C27B0",
        icon: "🍳",
    },
    StatusInfo {
        status: OrderStatus::Ready,
        label: "Ready",
        color: "#4CAF50",
        icon: "📦",
    },
    StatusInfo {
        status: OrderStatus::OutForDelivery,
        label: "Out for delivery",
        color: "#3F51B5",
        icon: "🚚",
    },
    StatusInfo {
        status: OrderStatus::Delivered,
        label: "Delivered",
        color: "#009688",
        icon: "🏁",
    },
    StatusInfo {
        status: OrderStatus::Cancelled,
        label: "Cancelled",
        color: "#F44336",
        icon: "❌",
    },
];
