mod render;

use std::sync::Arc;

use eyre::{eyre, Context};
use history::{filter::HistoryFilter, OrderHistory, SystemClock};
use log::info;
use model::order::orders_from_json;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = env::Env::load()?;
    pretty_env_logger::init();
    color_eyre::install()?;

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("Usage: order-history <orders.json>"))?;
    info!("reading orders from {}", path);
    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let orders = orders_from_json(&json).context("Failed to decode orders")?;

    let history = OrderHistory::new(Arc::new(SystemClock), env.history_config());
    let filter = HistoryFilter::with_range(env.range());
    let report = history
        .report(&orders, &filter)
        .context("Failed to build order history")?;

    println!("{}", render::render_report(&report));
    Ok(())
}
