//! Add/edit product session.
//!
//! A [`ProductEditor`] owns the option registry and variant store for one
//! product while it is being edited. Structural option changes regenerate
//! the variants immediately; renames and kind switches do not.

use crate::catalog::Product;
use crate::generator::VariantDefaults;
use crate::options::{OptionKind, OptionRegistry, ProductOption};
use crate::store::VariantStore;
use crate::variant::VariantField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEditor {
    name: String,
    sku: String,
    total_stock: String,
    defaults: VariantDefaults,
    options: OptionRegistry,
    variants: VariantStore,
}

impl ProductEditor {
    /// Empty session for creating a product. `defaults` supplies the
    /// fallback price and SKU prefix; its base and sale price are kept.
    #[must_use]
    pub fn new(defaults: VariantDefaults) -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            total_stock: "0".to_string(),
            defaults,
            options: OptionRegistry::new(),
            variants: VariantStore::new(),
        }
    }

    /// Session for editing `product`. Its variants are kept as loaded until
    /// the first regeneration; the option registry starts empty.
    #[must_use]
    pub fn from_product(product: &Product, defaults: VariantDefaults) -> Self {
        Self {
            name: product.name.clone(),
            sku: format!("SKU-{}", product.id),
            total_stock: product.stock.to_string(),
            defaults: VariantDefaults {
                base_price: product.price.clone(),
                ..defaults
            },
            options: OptionRegistry::new(),
            variants: VariantStore::from_variants(product.variants.clone()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn set_sku(&mut self, sku: &str) {
        self.sku = sku.to_string();
    }

    #[must_use]
    pub fn total_stock(&self) -> &str {
        &self.total_stock
    }

    pub fn set_total_stock(&mut self, total_stock: &str) {
        self.total_stock = total_stock.to_string();
    }

    #[must_use]
    pub fn base_price(&self) -> &str {
        &self.defaults.base_price
    }

    /// Changes the price seeded into new variants and regenerates.
    /// Existing combinations keep their stored price.
    pub fn set_base_price(&mut self, price: &str) {
        self.defaults.base_price = price.to_string();
        self.regenerate();
    }

    #[must_use]
    pub fn sale_price(&self) -> &str {
        &self.defaults.sale_price
    }

    pub fn set_sale_price(&mut self, sale_price: &str) {
        self.defaults.sale_price = sale_price.to_string();
        self.regenerate();
    }

    #[must_use]
    pub fn defaults(&self) -> &VariantDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn options(&self) -> &OptionRegistry {
        &self.options
    }

    #[must_use]
    pub fn variants(&self) -> &VariantStore {
        &self.variants
    }

    /// Appends a blank option. Variants are left as they are until the
    /// option receives values.
    ///
    /// Until the next structural change the store still holds the variants
    /// of the previous option set, not the (empty) product of the current
    /// options.
    pub fn add_option(&mut self) -> String {
        self.options.add_option()
    }

    pub fn push_option(&mut self, option: ProductOption) -> String {
        let id = self.options.push_option(option);
        self.regenerate();
        id
    }

    pub fn rename_option(&mut self, option_id: &str, name: &str) -> bool {
        self.options.rename_option(option_id, name)
    }

    pub fn set_option_kind(&mut self, option_id: &str, kind: OptionKind) -> bool {
        self.options.set_option_kind(option_id, kind)
    }

    pub fn add_value(&mut self, option_id: &str, raw_value: &str) -> Option<String> {
        let value_id = self.options.add_value(option_id, raw_value)?;
        self.regenerate();
        Some(value_id)
    }

    pub fn remove_value(&mut self, option_id: &str, value_id: &str) -> bool {
        let removed = self.options.remove_value(option_id, value_id);
        if removed {
            self.regenerate();
        }
        removed
    }

    pub fn remove_option(&mut self, option_id: &str) -> bool {
        let removed = self.options.remove_option(option_id);
        if removed {
            self.regenerate();
        }
        removed
    }

    pub fn regenerate(&mut self) {
        self.variants.regenerate(self.options.options(), &self.defaults);
    }

    pub fn apply_bulk(&mut self, field: VariantField, value: &str) -> usize {
        self.variants.apply_bulk(field, value)
    }

    pub fn set_variant_enabled(&mut self, variant_id: &str, is_enabled: bool) -> bool {
        self.variants.set_enabled(variant_id, is_enabled)
    }

    pub fn set_variant_price(&mut self, variant_id: &str, price: &str) -> bool {
        self.variants.set_price(variant_id, price)
    }

    pub fn set_variant_sale_price(&mut self, variant_id: &str, sale_price: &str) -> bool {
        self.variants.set_sale_price(variant_id, sale_price)
    }

    pub fn set_variant_stock(&mut self, variant_id: &str, stock: &str) -> bool {
        self.variants.set_stock(variant_id, stock)
    }

    pub fn set_variant_sku(&mut self, variant_id: &str, sku: &str) -> bool {
        self.variants.set_sku(variant_id, sku)
    }

    #[must_use]
    pub fn variant_stock_total(&self) -> i64 {
        self.variants.stock_total()
    }
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
