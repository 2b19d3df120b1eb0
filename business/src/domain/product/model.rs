/// Customer rating aggregate as reported by the upstream catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog product. Immutable once fetched from the upstream API; cart
/// items reference products by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Option<Rating>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn from_gateway(
        id: u64,
        title: String,
        price: f64,
        description: String,
        category: String,
        image: String,
        rating: Option<Rating>,
    ) -> Self {
        Self {
            id,
            title,
            // Prices are never negative; malformed upstream values become 0.
            price: price.max(0.0),
            description,
            category,
            image,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_gateway_fields() {
        let product = Product::from_gateway(
            3,
            "Mens Cotton Jacket".to_string(),
            55.99,
            "great outerwear jackets".to_string(),
            "men's clothing".to_string(),
            "https://example.test/jacket.jpg".to_string(),
            Some(Rating {
                rate: 4.7,
                count: 500,
            }),
        );

        assert_eq!(product.id, 3);
        assert_eq!(product.price, 55.99);
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn should_clamp_negative_price_to_zero() {
        let product = Product::from_gateway(
            1,
            "Broken".to_string(),
            -9.99,
            String::new(),
            "misc".to_string(),
            String::new(),
            None,
        );

        assert_eq!(product.price, 0.0);
    }
}
