use poem_openapi::Object;

use business::domain::product::model::{Product, Rating};

/// Customer rating aggregate.
#[derive(Debug, Clone, Object)]
pub struct RatingResponse {
    /// Average rating, 0 to 5
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            rate: rating.rate,
            count: rating.count,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product description
    pub description: String,
    /// Category name
    pub category: String,
    /// Product image URL
    pub image: String,
    /// Customer rating, when the upstream provides one
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<RatingResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            category: product.category,
            image: product.image,
            rating: product.rating.map(|r| r.into()),
        }
    }
}
