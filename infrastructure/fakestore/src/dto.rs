use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartLine, RemoteCartRecord};
use business::domain::product::model::{Product, Rating};
use business::domain::shared::value_objects::ShopperId;

/// Wire shape of a product rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDto {
    pub rate: f64,
    pub count: u64,
}

/// Wire shape of a catalog product as served by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<RatingDto>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product::from_gateway(
            self.id,
            self.title,
            self.price,
            self.description,
            self.category,
            self.image,
            self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        )
    }
}

/// One product reference inside a remote cart payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineDto {
    #[serde(rename = "productId")]
    pub product_id: u64,
    pub quantity: i64,
}

/// Wire shape of a cart record (`GET /carts/user/{id}` element, `POST /carts`
/// body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCartDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<CartLineDto>,
}

impl RemoteCartDto {
    /// Maps to the domain record. Lines with a non-positive quantity are
    /// dropped at the boundary; a missing date sorts as oldest.
    pub fn into_domain(self) -> RemoteCartRecord {
        RemoteCartRecord {
            id: self.id,
            shopper_id: ShopperId::new(self.user_id),
            date: self.date.unwrap_or(DateTime::UNIX_EPOCH),
            lines: self
                .products
                .into_iter()
                .filter_map(|line| {
                    u32::try_from(line.quantity).ok().filter(|q| *q > 0).map(|quantity| CartLine {
                        product_id: line.product_id,
                        quantity,
                    })
                })
                .collect(),
        }
    }

    pub fn from_domain(record: &RemoteCartRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.shopper_id.value(),
            date: Some(record.date),
            products: record
                .lines
                .iter()
                .map(|line| CartLineDto {
                    product_id: line.product_id,
                    quantity: i64::from(line.quantity),
                })
                .collect(),
        }
    }
}
