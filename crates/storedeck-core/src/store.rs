use serde::{Deserialize, Serialize};

use crate::generator::{generate_variants, VariantDefaults};
use crate::options::ProductOption;
use crate::variant::{CombinationKey, Variant, VariantField};

/// Materialized variants of the product being edited, in generation order.
///
/// Edits addressed to an unknown variant id are ignored and report `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantStore {
    variants: Vec<Variant>,
}

impl VariantStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_variants(variants: Vec<Variant>) -> Self {
        Self { variants }
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn into_variants(self) -> Vec<Variant> {
        self.variants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn get(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    #[must_use]
    pub fn find_by_key(&self, key: &CombinationKey) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.key() == key)
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.variants.iter().filter(|v| v.is_enabled).count()
    }

    /// Sum of all variant stock values that parse as integers.
    #[must_use]
    pub fn stock_total(&self) -> i64 {
        self.variants.iter().filter_map(Variant::stock_count).sum()
    }

    /// Replace the contents with a fresh generation pass over `options`,
    /// keeping records whose combination still exists.
    pub fn regenerate(&mut self, options: &[ProductOption], defaults: &VariantDefaults) {
        self.variants = generate_variants(options, &self.variants, defaults);
    }

    /// Write `value` to `field` on every enabled variant. Disabled variants
    /// are left untouched. Returns how many variants were written.
    pub fn apply_bulk(&mut self, field: VariantField, value: &str) -> usize {
        let mut written = 0;
        for slot in self.variants.iter_mut().filter(|v| v.is_enabled) {
            *slot = slot.clone().with_field(field, value);
            written += 1;
        }
        tracing::debug!(%field, value, written, "applied bulk edit");
        written
    }

    pub fn set_enabled(&mut self, variant_id: &str, is_enabled: bool) -> bool {
        self.update(variant_id, |v| v.with_enabled(is_enabled))
    }

    pub fn set_price(&mut self, variant_id: &str, price: &str) -> bool {
        self.update(variant_id, |v| v.with_price(price))
    }

    pub fn set_sale_price(&mut self, variant_id: &str, sale_price: &str) -> bool {
        self.update(variant_id, |v| v.with_sale_price(sale_price))
    }

    pub fn set_stock(&mut self, variant_id: &str, stock: &str) -> bool {
        self.update(variant_id, |v| v.with_stock(stock))
    }

    pub fn set_sku(&mut self, variant_id: &str, sku: &str) -> bool {
        self.update(variant_id, |v| v.with_sku(sku))
    }

    fn update<F>(&mut self, variant_id: &str, edit: F) -> bool
    where
        F: FnOnce(Variant) -> Variant,
    {
        match self.variants.iter_mut().find(|v| v.id == variant_id) {
            Some(slot) => {
                *slot = edit(slot.clone());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(id: &str, combination: &[&str], is_enabled: bool) -> Variant {
        Variant {
            id: id.to_string(),
            combination: combination.iter().map(|c| (*c).to_string()).collect(),
            price: "10.00".to_string(),
            sale_price: String::new(),
            stock: "5".to_string(),
            is_enabled,
            sku: format!("SKU-{id}"),
            image: None,
        }
    }

    fn three_variants() -> VariantStore {
        VariantStore::from_variants(vec![
            make_variant("a", &["Red"], true),
            make_variant("b", &["Blue"], false),
            make_variant("c", &["Green"], true),
        ])
    }

    #[test]
    fn apply_bulk_skips_disabled_variants() {
        let mut store = three_variants();
        let untouched = store.get("b").cloned().unwrap();

        let written = store.apply_bulk(VariantField::Price, "49.99");

        assert_eq!(written, 2);
        assert_eq!(store.get("a").unwrap().price, "49.99");
        assert_eq!(store.get("c").unwrap().price, "49.99");
        assert_eq!(store.get("b").unwrap(), &untouched);
    }

    #[test]
    fn apply_bulk_leaves_identity_fields_alone() {
        let mut store = three_variants();
        store.apply_bulk(VariantField::Stock, "12");
        let a = store.get("a").unwrap();
        assert_eq!(a.stock, "12");
        assert_eq!(a.sku, "SKU-a");
        assert_eq!(a.combination, vec!["Red"]);
        assert_eq!(a.price, "10.00");
    }

    #[test]
    fn apply_bulk_accepts_non_numeric_text() {
        let mut store = three_variants();
        store.apply_bulk(VariantField::SalePrice, "call us");
        assert_eq!(store.get("a").unwrap().sale_price, "call us");
    }

    #[test]
    fn apply_bulk_on_empty_store_writes_nothing() {
        let mut store = VariantStore::new();
        assert_eq!(store.apply_bulk(VariantField::Price, "1.00"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn set_enabled_toggles_only_the_flag() {
        let mut store = three_variants();
        assert!(store.set_enabled("b", true));
        let b = store.get("b").unwrap();
        assert!(b.is_enabled);
        assert_eq!(b.price, "10.00");
        assert_eq!(store.enabled_count(), 3);
    }

    #[test]
    fn per_field_setters_update_one_variant() {
        let mut store = three_variants();
        assert!(store.set_price("a", "11.00"));
        assert!(store.set_sale_price("a", "9.00"));
        assert!(store.set_stock("a", "2"));
        assert!(store.set_sku("a", "RED-1"));

        let a = store.get("a").unwrap();
        assert_eq!(
            (a.price.as_str(), a.sale_price.as_str(), a.stock.as_str(), a.sku.as_str()),
            ("11.00", "9.00", "2", "RED-1")
        );
        assert_eq!(store.get("c").unwrap(), &make_variant("c", &["Green"], true));
    }

    #[test]
    fn edits_to_missing_variant_are_noops() {
        let mut store = three_variants();
        let before = store.clone();
        assert!(!store.set_price("zzz", "1.00"));
        assert!(!store.set_stock("zzz", "1"));
        assert!(!store.set_enabled("zzz", false));
        assert_eq!(store, before);
    }

    #[test]
    fn stock_total_ignores_unparseable_values() {
        let mut store = three_variants();
        store.set_stock("c", "n/a");
        assert_eq!(store.stock_total(), 10);
    }

    #[test]
    fn find_by_key_matches_combination() {
        let store = three_variants();
        let key = CombinationKey::from(vec!["Blue".to_string()]);
        assert_eq!(store.find_by_key(&key).unwrap().id, "b");
    }

    #[test]
    fn regenerate_replaces_with_generated_variants() {
        let mut store = three_variants();
        let options = vec![ProductOption::with_values("Color", ["Red", "Black"])];
        store.regenerate(&options, &VariantDefaults::default());

        assert_eq!(store.len(), 2);
        assert_eq!(store.variants()[0], make_variant("a", &["Red"], true));
        assert_eq!(store.variants()[1].combination, vec!["Black"]);
        assert!(store.get("b").is_none());
    }

    #[test]
    fn serializes_as_plain_list() {
        let store = VariantStore::from_variants(vec![make_variant("a", &["Red"], true)]);
        let json = serde_json::to_value(&store).expect("serialization failed");
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "a");
    }
}
