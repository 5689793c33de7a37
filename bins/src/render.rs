use history::HistoryReport;
use model::{
    statistics::{DayGroup, OrderStats, RollupSummary},
    status::OrderStatus,
};

pub fn render_report(report: &HistoryReport) -> String {
    if report.groups.is_empty() {
        return "📭 No orders".to_string();
    }
    let mut msg = String::new();
    for group in &report.groups {
        msg.push_str(&render_group(group));
        msg.push_str("\n\n");
    }
    msg.push_str(&render_summary(&report.summary));
    msg
}

fn render_group(group: &DayGroup) -> String {
    let stats = group.stats();
    let mut msg = format!(
        "📅 {} ({})\n{}",
        group.label,
        group.day.format("%Y-%m-%d"),
        render_stats(&stats)
    );
    for order in &group.orders {
        let info = order.status.info();
        msg.push_str(&format!(
            "\n  {} {} {} _{}_",
            info.icon, order.id, order.total_amount, info.label
        ));
    }
    msg
}

fn render_stats(stats: &OrderStats) -> String {
    let by_status = OrderStatus::list()
        .into_iter()
        .filter(|status| stats.count(*status) > 0)
        .map(|status| format!("{}{}", status.info().icon, stats.count(status)))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "🧾 Orders: {} [{}]\n💰 Revenue: {} Commission: {} Net: {}",
        stats.total,
        by_status,
        stats.revenue,
        stats.commission,
        stats.net_earnings()
    )
}

fn render_summary(summary: &RollupSummary) -> String {
    format!(
        "📊 Total over {} {}\n{}\n✅ Completion: {:.1}% ❌ Cancellation: {:.1}%\n🧮 Average order: {}\n📈 Per day: {:.2} orders, {} revenue",
        summary.days,
        if summary.days == 1 { "day" } else { "days" },
        render_stats(&summary.totals),
        summary.completion_rate() * 100.0,
        summary.cancellation_rate() * 100.0,
        summary.average_order_value(),
        summary.orders_per_day(),
        summary.revenue_per_day(),
    )
}
