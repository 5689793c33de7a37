use thiserror::Error;

use crate::{ids::OrderId, order::Anchor};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Order {order_id} has no {anchor} timestamp")]
    MissingTimestamp { order_id: OrderId, anchor: Anchor },
}
