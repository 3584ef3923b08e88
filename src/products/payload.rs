use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::errors::ApiError;

/// Maximum product name length accepted at the API boundary.
pub const MAX_NAME_LEN: usize = 100;

/// Upper bound of the decimal(10,2) price column.
fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductInput {
    /// Display name; trimmed, angle brackets stripped.
    #[schema(example = "USB-C cable 2m")]
    pub name: String,
    /// Unit price; accepts a JSON number or a numeric string.
    #[schema(example = "9.99")]
    pub price: Decimal,
    /// Units in stock.
    #[schema(example = 120)]
    pub stock: i64,
}

/// Validated, normalized product fields ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    /// Sanitized name.
    pub name: String,
    /// Price rounded to two fractional digits.
    pub price: Decimal,
    /// Stock within the column range.
    pub stock: i32,
}

impl ProductInput {
    /// Validate and normalize the payload.
    ///
    /// Collects every violation so the caller gets the full error list in
    /// one round trip. Angle brackets are stripped from the name before the
    /// length check, matching how the service has always sanitized markup.
    ///
    /// # Errors
    ///
    /// [`ApiError::ValidationFailed`] with one message per violated rule.
    pub fn validate(&self) -> Result<ValidProduct, ApiError> {
        let mut errors = Vec::new();

        let name = self.name.replace(['<', '>'], "");
        let name = name.trim();
        if name.is_empty() {
            errors.push("Product name is required and cannot be empty".to_string());
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push("Product name cannot exceed 100 characters".to_string());
        }

        if self.price < Decimal::ZERO {
            errors.push("Price must be a positive number".to_string());
        } else if self.price > max_price() {
            errors.push("Price cannot exceed 99999999.99".to_string());
        }

        let stock = i32::try_from(self.stock).ok().filter(|s| *s >= 0);
        if stock.is_none() {
            if self.stock < 0 {
                errors.push("Stock must be a positive integer".to_string());
            } else {
                errors.push("Stock value is too large".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(ApiError::validation_failed(errors));
        }

        Ok(ValidProduct {
            name: name.to_owned(),
            price: self.price.round_dp(2),
            stock: stock.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: &str, stock: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price: price.parse().unwrap(),
            stock,
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        let valid = input("  USB-C cable  ", "9.99", 120).validate().unwrap();
        assert_eq!(valid.name, "USB-C cable");
        assert_eq!(valid.price, Decimal::new(999, 2));
        assert_eq!(valid.stock, 120);
    }

    #[test]
    fn strips_angle_brackets_from_the_name() {
        let valid = input("<b>cable</b>", "1.00", 1).validate().unwrap();
        assert_eq!(valid.name, "bcable/b");
    }

    #[test]
    fn rejects_blank_names() {
        let err = input("   ", "1.00", 1).validate().unwrap_err();
        match err {
            ApiError::ValidationFailed { errors } => {
                assert_eq!(errors, vec!["Product name is required and cannot be empty"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_names_longer_than_the_column() {
        let err = input(&"x".repeat(101), "1.00", 1).validate().unwrap_err();
        match err {
            ApiError::ValidationFailed { errors } => {
                assert_eq!(errors, vec!["Product name cannot exceed 100 characters"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_price_and_negative_stock_together() {
        let err = input("cable", "-0.01", -1).validate().unwrap_err();
        match err {
            ApiError::ValidationFailed { errors } => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("Price"));
                assert!(errors[1].contains("Stock"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_price_above_the_column_maximum() {
        let err = input("cable", "100000000.00", 1).validate().unwrap_err();
        match err {
            ApiError::ValidationFailed { errors } => {
                assert_eq!(errors, vec!["Price cannot exceed 99999999.99"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_stock_above_i32() {
        let err = input("cable", "1.00", i64::from(i32::MAX) + 1)
            .validate()
            .unwrap_err();
        match err {
            ApiError::ValidationFailed { errors } => {
                assert_eq!(errors, vec!["Stock value is too large"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn price_is_rounded_to_two_fractional_digits() {
        let valid = input("cable", "9.999", 1).validate().unwrap();
        assert_eq!(valid.price, Decimal::new(1000, 2));
    }
}
