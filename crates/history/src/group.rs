use std::collections::BTreeMap;

use chrono::NaiveDate;
use dates::{day_key, label::day_label};
use log::{debug, warn};
use model::{
    errors::HistoryError,
    order::{Anchor, Order},
    statistics::DayGroup,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What to do with an order that has no value for the anchor timestamp.
#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MissingTimestampPolicy {
    /// Leave the order out of every group.
    #[default]
    Skip,
    /// Abort with [`HistoryError::MissingTimestamp`].
    Fail,
}

/// Buckets `orders` by calendar day, most recent day first.
///
/// Orders keep their input order inside a group. Labels are computed against
/// `today` on every call. Orders that never carry the anchor timestamp (an
/// undelivered order under [`Anchor::DeliveredAt`]) are left out without
/// consulting `policy`.
pub fn build_day_groups(
    orders: &[Order],
    today: NaiveDate,
    anchor: Anchor,
    policy: MissingTimestampPolicy,
) -> Result<Vec<DayGroup>, HistoryError> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Order>> = BTreeMap::new();
    let mut skipped = 0;
    let mut not_applicable = 0;
    for order in orders {
        let Some(day) = day_key(order, anchor) else {
            if !order.requires_timestamp(anchor) {
                not_applicable += 1;
                continue;
            }
            match policy {
                MissingTimestampPolicy::Skip => {
                    warn!("Order {} has no {} timestamp, skipping", order.id, anchor);
                    skipped += 1;
                    continue;
                }
                MissingTimestampPolicy::Fail => {
                    return Err(HistoryError::MissingTimestamp {
                        order_id: order.id.clone(),
                        anchor,
                    });
                }
            }
        };
        by_day.entry(day).or_default().push(order.clone());
    }

    let groups = by_day
        .into_iter()
        .rev()
        .map(|(day, orders)| DayGroup {
            day,
            label: day_label(day, today),
            orders,
        })
        .collect::<Vec<_>>();
    debug!(
        "Grouped {} orders into {} days ({} skipped, {} without {})",
        orders.len() - skipped - not_applicable,
        groups.len(),
        skipped,
        not_applicable,
        anchor
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{DateTime, FixedOffset, TimeZone as _};
    use model::{decimal::Decimal, ids::OrderId, status::OrderStatus};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, hour: u32) -> DateTime<FixedOffset> {
        use chrono::Datelike as _;
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, 0, 0)
            .unwrap()
    }

    fn order(id: &str, day: NaiveDate, hour: u32) -> Order {
        Order::new(id, OrderStatus::Pending, Decimal::int(10), at(day, hour))
    }

    #[test]
    fn test_empty_input() {
        let groups = build_day_groups(
            &[],
            date(2024, 3, 15),
            Anchor::CreatedAt,
            MissingTimestampPolicy::Fail,
        )
        .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_groups_sorted_and_labeled() {
        let today = date(2024, 3, 15);
        let orders = vec![
            order("a", date(2024, 3, 13), 9),
            order("b", today, 8),
            order("c", date(2024, 3, 14), 18),
            order("d", today, 7),
            order("e", date(2023, 11, 2), 12),
            order("f", date(2024, 1, 20), 12),
        ];
        let groups =
            build_day_groups(&orders, today, Anchor::CreatedAt, MissingTimestampPolicy::Skip)
                .unwrap();

        let labels = groups.iter().map(|g| g.label.as_str()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Today", "Yesterday", "Wednesday", "Jan 20", "Nov 2, 2023"]
        );
        for pair in groups.windows(2) {
            assert!(pair[0].day > pair[1].day);
        }

        // Encounter order inside the group, not time order.
        let today_ids = groups[0]
            .orders
            .iter()
            .map(|o| o.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(today_ids, vec!["b", "d"]);
    }

    #[test]
    fn test_every_order_exactly_once() {
        let today = date(2024, 3, 15);
        let mut orders = Vec::new();
        for idx in 0..60u32 {
            let day = date(2024, 3, 1 + idx % 15);
            orders.push(order(&format!("o{}", idx), day, idx % 24));
        }
        let groups =
            build_day_groups(&orders, today, Anchor::CreatedAt, MissingTimestampPolicy::Skip)
                .unwrap();

        let mut seen = HashSet::new();
        let mut count = 0;
        for group in &groups {
            for order in &group.orders {
                assert_eq!(day_key(order, Anchor::CreatedAt), Some(group.day));
                assert!(seen.insert(order.id.clone()));
                count += 1;
            }
        }
        assert_eq!(count, orders.len());
        assert_eq!(groups.len(), 15);
    }

    fn delivered(id: &str, day: NaiveDate, hour: u32) -> Order {
        Order::new(id, OrderStatus::Delivered, Decimal::int(10), at(day, hour))
    }

    #[test]
    fn test_missing_delivery_skipped() {
        let today = date(2024, 3, 15);
        let complete = delivered("a", today, 9).with_delivered_at(at(today, 10));
        let missing = delivered("b", today, 9);
        let groups = build_day_groups(
            &[complete, missing],
            today,
            Anchor::DeliveredAt,
            MissingTimestampPolicy::Skip,
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].orders.len(), 1);
        assert_eq!(groups[0].orders[0].id, OrderId::new("a"));
    }

    #[test]
    fn test_missing_delivery_fails() {
        let today = date(2024, 3, 15);
        let err = build_day_groups(
            &[delivered("x", today, 9)],
            today,
            Anchor::DeliveredAt,
            MissingTimestampPolicy::Fail,
        )
        .unwrap_err();
        assert_eq!(
            err,
            HistoryError::MissingTimestamp {
                order_id: OrderId::new("x"),
                anchor: Anchor::DeliveredAt,
            }
        );
    }

    #[test]
    fn test_undelivered_orders_ignore_policy() {
        let today = date(2024, 3, 15);
        let cancelled = Order::new("c", OrderStatus::Cancelled, Decimal::zero(), at(today, 8));
        let on_the_way = Order::new("w", OrderStatus::OutForDelivery, Decimal::int(5), at(today, 8));
        let orders = vec![
            delivered("d", today, 9).with_delivered_at(at(today, 10)),
            cancelled,
            on_the_way,
        ];
        let groups =
            build_day_groups(&orders, today, Anchor::DeliveredAt, MissingTimestampPolicy::Fail)
                .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].orders.len(), 1);
        assert_eq!(groups[0].orders[0].id, OrderId::new("d"));
    }

    #[test]
    fn test_delivery_anchor_moves_order() {
        let today = date(2024, 3, 15);
        let late = order("a", date(2024, 3, 14), 23).with_delivered_at(at(today, 0));
        let groups = build_day_groups(
            &[late.clone()],
            today,
            Anchor::DeliveredAt,
            MissingTimestampPolicy::Fail,
        )
        .unwrap();
        assert_eq!(groups[0].label, "Today");

        let groups =
            build_day_groups(&[late], today, Anchor::CreatedAt, MissingTimestampPolicy::Fail)
                .unwrap();
        assert_eq!(groups[0].label, "Yesterday");
    }
}
