//! Represents a product in the catalog.
//!
//! # Persistence
//! Products are serialized to the backing store with their fields in declaration
//! order (`id`, `title`, `description`, `price`, `thumbnail`, `code`, `stock`).
//! Whole `price` and `stock` values are written without a fractional part, and
//! numeric strings such as `"200"` are read back as numbers.
//!
//! See [`ProductManager`](crate::manager::ProductManager) for:
//! - Creation parameters ([`NewProduct`])
//! - Update parameters ([`ProductUpdate`])
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Assigned by the manager and never reused within a manager's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_number", deserialize_with = "deserialize_number")]
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    #[serde(serialize_with = "serialize_number", deserialize_with = "deserialize_number")]
    pub stock: f64,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Plain(f64),
        Text(String),
    }

    match Number::deserialize(deserializer)? {
        Number::Plain(value) => Ok(value),
        Number::Text(text) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(serde::de::Error::custom(format!("not a number: {text:?}"))),
        },
    }
}

impl Product {
    /// Builds the stored record for a validated [`NewProduct`].
    pub fn new(id: ProductId, params: NewProduct) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            price: params.price,
            thumbnail: params.thumbnail,
            code: params.code,
            stock: params.stock,
        }
    }

    /// Merges an update onto this record field by field.
    ///
    /// Fields left as `None` in the update keep their current value. The id is
    /// never touched.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(thumbnail) = update.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: f64,
}

impl NewProduct {
    /// Creates a new creation payload.
    ///
    /// # Arguments
    /// * `title` - Display title, must not be blank
    /// * `description` - Free text, must not be blank
    /// * `price` - Unit price, must be a finite number
    /// * `thumbnail` - Image path or URL, must not be blank
    /// * `code` - Business identifier, letters, digits and spaces only
    /// * `stock` - Available stock, must be a finite number
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }
}

/// DTO for Product updates.
///
/// Every field except `id` is optional; absent fields keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<f64>,
}

impl ProductUpdate {
    /// An update for `id` that changes nothing yet.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            price: None,
            thumbnail: None,
            code: None,
            stock: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_stock(mut self, stock: f64) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// A full record replaces every field of the stored one.
impl From<Product> for ProductUpdate {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: Some(product.title),
            description: Some(product.description),
            price: Some(product.price),
            thumbnail: Some(product.thumbnail),
            code: Some(product.code),
            stock: Some(product.stock),
        }
    }
}

/// The validated fields of a product, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Title,
    Description,
    Price,
    Thumbnail,
    Stock,
    Code,
}

impl Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProductField::Title => "title",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Thumbnail => "thumbnail",
            ProductField::Stock => "stock",
            ProductField::Code => "code",
        };
        f.write_str(name)
    }
}
