//! Wire types of the Hypixel API responses.
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Deserialize, Debug)]
pub struct KeyResponse {
    pub success: bool,
    pub cause: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BazaarResponse {
    pub last_updated: i64,
    pub products: Products,
}

/// The `products` object, keyed by product id, flattened in document order.
#[derive(Debug)]
pub struct Products(pub Vec<Product>);

impl<'de> Deserialize<'de> for Products {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProductsVisitor;

        impl<'de> Visitor<'de> for ProductsVisitor {
            type Value = Products;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of product id to product")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Products, A::Error> {
                let mut products = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((_id, product)) = map.next_entry::<String, Product>()? {
                    products.push(product);
                }
                Ok(Products(products))
            }
        }

        deserializer.deserialize_map(ProductsVisitor)
    }
}

#[derive(Deserialize, Debug)]
pub struct Product {
    pub sell_summary: Vec<Order>,
    pub buy_summary: Vec<Order>,
    pub quick_status: QuickStatus,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub price_per_unit: f64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuickStatus {
    pub product_id: String,
    pub buy_moving_week: f64,
}
