//! Field checks shared by add and update.

use super::error::ProductError;
use crate::model::{NewProduct, ProductField, ProductUpdate};
use regex::Regex;
use std::sync::OnceLock;

/// Borrowed view of the fields to check. `None` means "not supplied".
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    price: Option<f64>,
    thumbnail: Option<&'a str>,
    stock: Option<f64>,
    code: Option<&'a str>,
}

impl<'a> From<&'a NewProduct> for Fields<'a> {
    fn from(p: &'a NewProduct) -> Self {
        Self {
            title: Some(&p.title),
            description: Some(&p.description),
            price: Some(p.price),
            thumbnail: Some(&p.thumbnail),
            stock: Some(p.stock),
            code: Some(&p.code),
        }
    }
}

impl<'a> From<&'a ProductUpdate> for Fields<'a> {
    fn from(u: &'a ProductUpdate) -> Self {
        Self {
            title: u.title.as_deref(),
            description: u.description.as_deref(),
            price: u.price,
            thumbnail: u.thumbnail.as_deref(),
            stock: u.stock,
            code: u.code.as_deref(),
        }
    }
}

fn code_pattern() -> &'static Regex {
    static CODE: OnceLock<Regex> = OnceLock::new();
    CODE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid code regex"))
}

/// Whether `code` is a non-empty run of ASCII letters, digits and spaces.
pub fn is_valid_code(code: &str) -> bool {
    code_pattern().is_match(code)
}

fn require_text(field: ProductField, value: Option<&str>) -> Result<(), ProductError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ProductError::InvalidField(field)),
        _ => Ok(()),
    }
}

fn require_number(field: ProductField, value: Option<f64>) -> Result<(), ProductError> {
    match value {
        Some(v) if !v.is_finite() => Err(ProductError::InvalidField(field)),
        _ => Ok(()),
    }
}

/// Checks the supplied fields in order: title, description, price, thumbnail,
/// stock, code. The first failure is returned.
pub(crate) fn validate(fields: Fields<'_>) -> Result<(), ProductError> {
    require_text(ProductField::Title, fields.title)?;
    require_text(ProductField::Description, fields.description)?;
    require_number(ProductField::Price, fields.price)?;
    require_text(ProductField::Thumbnail, fields.thumbnail)?;
    require_number(ProductField::Stock, fields.stock)?;
    match fields.code {
        Some(code) if !is_valid_code(code) => Err(ProductError::InvalidField(ProductField::Code)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn valid() -> NewProduct {
        NewProduct::new("t", "d", 200.0, "img", "abc123", 25.0)
    }

    fn failing_field(product: &NewProduct) -> Option<ProductField> {
        match validate(product.into()) {
            Ok(()) => None,
            Err(ProductError::InvalidField(field)) => Some(field),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert_eq!(failing_field(&valid()), None);
    }

    #[test]
    fn test_blank_text_fields_rejected() {
        let mut p = valid();
        p.title = "   ".into();
        assert_eq!(failing_field(&p), Some(ProductField::Title));

        let mut p = valid();
        p.description = "".into();
        assert_eq!(failing_field(&p), Some(ProductField::Description));

        let mut p = valid();
        p.thumbnail = "\t\n".into();
        assert_eq!(failing_field(&p), Some(ProductField::Thumbnail));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let mut p = valid();
        p.price = f64::NAN;
        assert_eq!(failing_field(&p), Some(ProductField::Price));

        let mut p = valid();
        p.stock = f64::INFINITY;
        assert_eq!(failing_field(&p), Some(ProductField::Stock));
    }

    #[test]
    fn test_first_failure_wins() {
        let p = NewProduct::new("", "", f64::NAN, "", "bad-code!", f64::NAN);
        assert_eq!(failing_field(&p), Some(ProductField::Title));

        let p = NewProduct::new("t", "d", 1.0, "img", "bad-code!", f64::NAN);
        assert_eq!(failing_field(&p), Some(ProductField::Stock));
    }

    #[test]
    fn test_code_character_set() {
        assert!(is_valid_code("abc123"));
        assert!(is_valid_code("ABC 123"));
        assert!(is_valid_code(" "));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("abc-123"));
        assert!(!is_valid_code("ñandú"));
        assert!(!is_valid_code("abc\n"));
    }

    #[test]
    fn test_update_checks_only_supplied_fields() {
        let update = ProductUpdate::new(ProductId(1)).with_stock(40.0);
        assert!(validate((&update).into()).is_ok());

        let update = ProductUpdate::new(ProductId(1)).with_code("no/slashes");
        assert!(matches!(
            validate((&update).into()),
            Err(ProductError::InvalidField(ProductField::Code))
        ));
    }
}
