//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainResult, ValidationError};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a validated product with a fresh id.
    pub fn new(name: &str, price: f64) -> DomainResult<Self> {
        let product = Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Re-check invariants, e.g. after fields were changed in place.
    ///
    /// Order matters: id, then name, then price.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_nil() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ValidationError::PriceRequired);
        }
        if self.price < 0.0 || !self.price.is_finite() {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}

/// Product response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let p = Product::new("Product 1", 10.5).unwrap();

        assert!(!p.id.is_nil());
        assert_eq!(p.name, "Product 1");
        assert_eq!(p.price, 10.5);
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            Product::new("", 10.5).unwrap_err(),
            ValidationError::NameRequired
        );
    }

    #[test]
    fn test_price_required() {
        assert_eq!(
            Product::new("Product 1", 0.0).unwrap_err(),
            ValidationError::PriceRequired
        );
        assert_eq!(
            Product::new("Product 1", -0.0).unwrap_err(),
            ValidationError::PriceRequired
        );
    }

    #[test]
    fn test_invalid_price() {
        for price in [-10.5, -0.01, f64::MIN, f64::NEG_INFINITY, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Product::new("Product 1", price).unwrap_err(),
                ValidationError::InvalidPrice,
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn test_positive_prices_accepted() {
        for price in [0.01, 1.0, 10.5, 99_999.99, f64::MIN_POSITIVE] {
            let p = Product::new("Widget", price).unwrap();
            assert!(!p.id.is_nil());
        }
    }

    #[test]
    fn test_name_checked_before_price() {
        assert_eq!(
            Product::new("", -1.0).unwrap_err(),
            ValidationError::NameRequired
        );
    }

    #[test]
    fn test_validate() {
        let mut p = Product::new("Product 1", 10.5).unwrap();
        assert!(p.validate().is_ok());

        p.price = -3.0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::InvalidPrice);

        p.price = 3.0;
        p.name.clear();
        assert_eq!(p.validate().unwrap_err(), ValidationError::NameRequired);

        p.id = Uuid::nil();
        assert_eq!(p.validate().unwrap_err(), ValidationError::IdRequired);
    }
}
