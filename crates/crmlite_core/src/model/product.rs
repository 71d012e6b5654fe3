//! Product record and price/quantity validation.

use crate::model::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned stable product identifier.
pub type ProductId = i64;

/// Canonical product record.
///
/// # Invariants
/// - `price >= 0` and `quantity >= 0` at all times.
/// - `quantity` is the only field mutated after creation, and only by the
///   replenishment operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// Creation input for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl NewProduct {
    /// Pure non-negativity checks, price first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice);
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NewProduct;
    use crate::model::ValidationError;
    use rust_decimal::Decimal;

    fn input(price: Decimal, quantity: i64) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn accepts_non_negative_price_and_quantity() {
        assert!(input(Decimal::ZERO, 0).validate().is_ok());
        assert!(input(Decimal::new(1999, 2), 5).validate().is_ok());
    }

    #[test]
    fn rejects_negative_price_before_quantity() {
        let err = input(Decimal::new(-1, 2), -3).validate().unwrap_err();
        assert_eq!(err, ValidationError::NegativePrice);
    }

    #[test]
    fn rejects_negative_quantity() {
        let err = input(Decimal::ZERO, -1).validate().unwrap_err();
        assert_eq!(err, ValidationError::NegativeQuantity);
    }

    #[test]
    fn product_serde_roundtrip_preserves_decimal_price() {
        let product = super::Product {
            id: 3,
            name: "Widget".to_string(),
            price: Decimal::new(12995, 2),
            quantity: 7,
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: super::Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
        assert_eq!(back.price, Decimal::new(12995, 2));
    }
}
