use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

pub const NAME_MAX_LEN: u64 = 100;
pub const DESCRIPTION_MAX_LEN: u64 = 500;
pub const CATEGORY_MAX_LEN: u64 = 50;

/// Smallest accepted price at the request boundary (one cent).
///
/// The entity layer is looser and accepts zero; see [`validate_price`].
fn min_price() -> Decimal {
    Decimal::new(1, 2)
}

/// Request-boundary validator for price fields
fn validate_min_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if *price < min_price() {
        let mut err = validator::ValidationError::new("range");
        err.message = Some("Price must be at least 0.01".into());
        err.add_param("min".into(), &"0.01");
        return Err(err);
    }
    Ok(())
}

/// Product entity - one row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by storage
    pub id: i32,
    /// Display name, trimmed, 1-100 characters
    pub name: String,
    /// Free-form description (may be empty)
    pub description: String,
    /// Unit price; serialized as a decimal string ("9.99")
    pub price: Decimal,
    /// Units on hand, never negative
    pub stock: i32,
    /// Category label (may be empty)
    pub category: String,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[validate(custom(function = validate_min_price))]
    pub price: Decimal,
    #[serde(deserialize_with = "de_stock")]
    #[validate(range(min = 0))]
    pub stock: i32,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub category: String,
}

/// DTO for partially updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(custom(function = validate_min_price))]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "de_opt_stock")]
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

/// Accepts a JSON integer or an integer string for stock; anything else is
/// a deserialization error, not a silent coercion.
#[derive(Deserialize)]
#[serde(untagged)]
enum StockInput {
    Int(i64),
    Text(String),
}

impl StockInput {
    fn parse<E: serde::de::Error>(self) -> Result<i32, E> {
        match self {
            StockInput::Int(n) => {
                i32::try_from(n).map_err(|_| E::custom("Stock is out of range"))
            }
            StockInput::Text(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| E::custom("Stock must be an integer")),
        }
    }
}

fn de_stock<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    StockInput::deserialize(deserializer)?.parse()
}

fn de_opt_stock<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StockInput>::deserialize(deserializer)?
        .map(StockInput::parse)
        .transpose()
}

/// Entity-level name validator: trims, then rejects empty and over-long
/// names. Returns the trimmed value that gets stored.
pub(crate) fn validate_name(name: &str) -> ProductResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProductError::Validation("Name cannot be empty".to_string()));
    }
    if trimmed.chars().count() > NAME_MAX_LEN as usize {
        return Err(ProductError::Validation(
            "Name cannot be longer than 100 characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Entity-level price validator. Accepts zero; the request boundary is
/// stricter and already rejected anything below 0.01.
pub(crate) fn validate_price(price: Decimal) -> ProductResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(ProductError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }
    Ok(price)
}

/// Entity-level stock validator
pub(crate) fn validate_stock(stock: i32) -> ProductResult<i32> {
    if stock < 0 {
        return Err(ProductError::Validation(
            "Stock cannot be negative".to_string(),
        ));
    }
    Ok(stock)
}

impl Product {
    /// Construct a validated product from a CreateProduct DTO.
    ///
    /// Runs the entity-level validators fail-fast; the first failing
    /// validator's message becomes the error. The id stays zero until
    /// storage assigns the real key.
    pub fn new(input: CreateProduct) -> ProductResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: 0,
            name: validate_name(&input.name)?,
            description: input.description,
            price: validate_price(input.price)?,
            stock: validate_stock(input.stock)?,
            category: input.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, re-validating every supplied field.
    ///
    /// All validators run before any field is assigned, so a failed update
    /// leaves the product untouched. `updated_at` refreshes whenever the
    /// update succeeds, regardless of which fields were supplied.
    pub fn apply_update(&mut self, update: UpdateProduct) -> ProductResult<()> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let price = update.price.map(validate_price).transpose()?;
        let stock = update.stock.map(validate_stock).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
