use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One concrete combination of option values with its own price, stock,
/// SKU and enabled flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    /// One value per option, in option order, e.g. `["Red", "S"]`.
    pub combination: Vec<String>,
    /// Decimal string exactly as entered, e.g. `"299.00"`.
    pub price: String,
    /// Empty when the variant is not on sale.
    #[serde(default)]
    pub sale_price: String,
    /// Integer string exactly as entered.
    pub stock: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Variant {
    #[must_use]
    pub fn key(&self) -> CombinationKey {
        CombinationKey::from(self.combination.as_slice())
    }

    /// Parsed stock, or `None` when the stored text is not an integer.
    #[must_use]
    pub fn stock_count(&self) -> Option<i64> {
        self.stock.trim().parse().ok()
    }

    #[must_use]
    pub fn with_price(self, price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_sale_price(self, sale_price: impl Into<String>) -> Self {
        Self {
            sale_price: sale_price.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_stock(self, stock: impl Into<String>) -> Self {
        Self {
            stock: stock.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_sku(self, sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_enabled(self, is_enabled: bool) -> Self {
        Self { is_enabled, ..self }
    }

    /// Writes `value` into the bulk-editable `field`.
    #[must_use]
    pub fn with_field(self, field: VariantField, value: impl Into<String>) -> Self {
        match field {
            VariantField::Price => self.with_price(value),
            VariantField::SalePrice => self.with_sale_price(value),
            VariantField::Stock => self.with_stock(value),
        }
    }
}

/// Identity of a variant across regenerations: the ordered option values.
///
/// Compared element-wise, so `["a-b", "c"]` and `["a", "b-c"]` are distinct
/// keys even though both join to `"a-b-c"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey(Vec<String>);

impl CombinationKey {
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[String]> for CombinationKey {
    fn from(values: &[String]) -> Self {
        Self(values.to_vec())
    }
}

impl From<Vec<String>> for CombinationKey {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

/// Variant fields that can be written across all enabled variants at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantField {
    Price,
    SalePrice,
    Stock,
}

impl fmt::Display for VariantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantField::Price => write!(f, "price"),
            VariantField::SalePrice => write!(f, "salePrice"),
            VariantField::Stock => write!(f, "stock"),
        }
    }
}

impl FromStr for VariantField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price" => Ok(VariantField::Price),
            "salePrice" | "sale_price" | "sale-price" => Ok(VariantField::SalePrice),
            "stock" => Ok(VariantField::Stock),
            other => Err(CoreError::InvalidVariantField(other.to_string())),
        }
    }
}
