use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product offered by the shop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Absent until the product has been persisted.
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, image_url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }

    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
