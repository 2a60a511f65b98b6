use crate::schema::{Order, Product};
use crate::MarketRecord;

fn top_price(summary: &[Order]) -> f64 {
    summary.first().map_or(0.0, |order| order.price_per_unit)
}

impl From<Product> for MarketRecord {
    fn from(product: Product) -> Self {
        Self {
            sell_summary_top: top_price(&product.sell_summary),
            buy_summary_top: top_price(&product.buy_summary),
            buy_moving_week: product.quick_status.buy_moving_week,
            product_id: product.quick_status.product_id,
        }
    }
}
