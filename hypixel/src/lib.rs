//! Client for the Hypixel SkyBlock bazaar API.
//! It includes the wire schema, the endpoint list, and an HTTP client that turns
//! a bazaar snapshot into flat market records.
mod conversion;
mod endpoint;
mod error;
mod http;
pub mod schema;

pub use endpoint::Endpoint;
pub use error::Error;
pub use http::{HttpClient, DEFAULT_BASE_URL};

pub type Result<T> = std::result::Result<T, Error>;

/// One bazaar product as seen by the flipper, taken verbatim from a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketRecord {
    pub product_id: String,
    /// Top price of `sell_summary`, 0 when the summary is empty.
    pub sell_summary_top: f64,
    /// Top price of `buy_summary`, 0 when the summary is empty.
    pub buy_summary_top: f64,
    pub buy_moving_week: f64,
}
