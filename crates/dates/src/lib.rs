pub use chrono;

pub mod label;
pub mod range;

use chrono::NaiveDate;
use model::order::{Anchor, Order};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Calendar day an order belongs to under `anchor`.
///
/// The day is read in the offset the timestamp was recorded with. `None` when
/// the order has no value for the anchor field.
pub fn day_key(order: &Order, anchor: Anchor) -> Option<NaiveDate> {
    order.timestamp(anchor).map(|ts| ts.date_naive())
}

/// Who is looking at the history. Each view groups by a fixed anchor.
#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HistoryView {
    #[default]
    Vendor,
    Customer,
    Driver,
}

impl HistoryView {
    pub fn anchor(&self) -> Anchor {
        match self {
            HistoryView::Vendor | HistoryView::Customer => Anchor::CreatedAt,
            HistoryView::Driver => Anchor::DeliveredAt,
        }
    }
}
