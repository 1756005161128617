//! Field validation for product payloads.
//!
//! Order matters: on create, presence of all four fields is checked before
//! `price`, and `price` before `quantity`. On update the supplied fields are
//! checked `price`, `quantity`, `name`, `unit`. Nothing here touches the store.

use serde_json::Value;

use super::error::ProductError;
use super::model::{NewProduct, ProductChanges, ProductPayload};

/// `price` must be a JSON number, zero or greater.
pub fn validate_price(value: &Value) -> Result<f64, ProductError> {
    value
        .as_f64()
        .filter(|price| *price >= 0.0)
        .ok_or(ProductError::InvalidPrice)
}

/// `quantity` must be a whole JSON number between zero and the column's
/// upper bound. `5.0` counts as whole.
pub fn validate_quantity(value: &Value) -> Result<i32, ProductError> {
    value
        .as_f64()
        .filter(|q| q.fract() == 0.0 && *q >= 0.0 && *q <= f64::from(i32::MAX))
        .map(|q| q as i32)
        .ok_or(ProductError::InvalidQuantity)
}

fn non_empty(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// A supplied `name` or `unit` must still be a non-empty string.
fn label(value: Option<Value>, invalid: ProductError) -> Result<Option<String>, ProductError> {
    match value {
        None => Ok(None),
        supplied => non_empty(supplied).map(Some).ok_or(invalid),
    }
}

impl TryFrom<ProductPayload> for NewProduct {
    type Error = ProductError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let (Some(name), Some(unit), Some(price), Some(quantity)) = (
            non_empty(payload.name),
            non_empty(payload.unit),
            payload.price,
            payload.quantity,
        ) else {
            return Err(ProductError::MissingFields);
        };

        Ok(Self {
            name,
            unit,
            price: validate_price(&price)?,
            quantity: validate_quantity(&quantity)?,
        })
    }
}

impl TryFrom<ProductPayload> for ProductChanges {
    type Error = ProductError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            price: payload.price.as_ref().map(validate_price).transpose()?,
            quantity: payload.quantity.as_ref().map(validate_quantity).transpose()?,
            name: label(payload.name, ProductError::InvalidName)?,
            unit: label(payload.unit, ProductError::InvalidUnit)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: Value) -> ProductPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(validate_price(&json!(0)), Ok(0.0));
        assert_eq!(validate_price(&json!(1200.5)), Ok(1200.5));
        assert_eq!(validate_price(&json!(-10)), Err(ProductError::InvalidPrice));
        assert_eq!(validate_price(&json!("12")), Err(ProductError::InvalidPrice));
        assert_eq!(validate_price(&json!(null)), Err(ProductError::InvalidPrice));
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(validate_quantity(&json!(0)), Ok(0));
        assert_eq!(validate_quantity(&json!(10)), Ok(10));
        assert_eq!(validate_quantity(&json!(5.0)), Ok(5));
        assert_eq!(validate_quantity(&json!(5.5)), Err(ProductError::InvalidQuantity));
        assert_eq!(validate_quantity(&json!(-1)), Err(ProductError::InvalidQuantity));
        assert_eq!(validate_quantity(&json!(3_000_000_000u64)), Err(ProductError::InvalidQuantity));
        assert_eq!(validate_quantity(&json!("3")), Err(ProductError::InvalidQuantity));
    }

    #[test]
    fn test_create_requires_all_fields_first() {
        // Missing quantity wins over the invalid price.
        let err = NewProduct::try_from(payload(json!({
            "name": "Test", "unit": "unit", "price": -10
        })))
        .unwrap_err();
        assert_eq!(err, ProductError::MissingFields);
    }

    #[test]
    fn test_create_accepts_zero_price_and_quantity() {
        let product = NewProduct::try_from(payload(json!({
            "name": "Sample", "unit": "unit", "price": 0, "quantity": 0
        })))
        .unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_create_checks_price_before_quantity() {
        let err = NewProduct::try_from(payload(json!({
            "name": "Test", "unit": "unit", "price": -1, "quantity": 1.5
        })))
        .unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice);
    }

    #[test]
    fn test_null_counts_as_supplied() {
        let err = NewProduct::try_from(payload(json!({
            "name": "Test", "unit": "unit", "price": null, "quantity": 1
        })))
        .unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice);

        let err = ProductChanges::try_from(payload(json!({ "quantity": null }))).unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity);
    }

    #[test]
    fn test_changes_reject_blank_labels() {
        let err = ProductChanges::try_from(payload(json!({ "name": "" }))).unwrap_err();
        assert_eq!(err, ProductError::InvalidName);

        let err = ProductChanges::try_from(payload(json!({ "unit": 3 }))).unwrap_err();
        assert_eq!(err, ProductError::InvalidUnit);

        // Price is reported before a bad name.
        let err = ProductChanges::try_from(payload(json!({ "name": null, "price": -1 }))).unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice);
    }

    #[test]
    fn test_changes_validate_supplied_fields_only() {
        let changes = ProductChanges::try_from(payload(json!({ "price": 75.0 }))).unwrap();
        assert_eq!(
            changes,
            ProductChanges {
                price: Some(75.0),
                ..Default::default()
            }
        );

        let err = ProductChanges::try_from(payload(json!({ "quantity": -3 }))).unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity);

        assert!(ProductChanges::try_from(payload(json!({}))).unwrap().is_empty());
    }
}
