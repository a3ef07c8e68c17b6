//! Variant generation: the Cartesian product of option values reconciled
//! against the variants that already exist.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::options::ProductOption;
use crate::variant::{CombinationKey, Variant};
use crate::new_id;

/// Seeding values for variants whose combination did not exist before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDefaults {
    /// Product base price as entered; may be empty.
    pub base_price: String,
    /// Product sale price as entered; may be empty.
    pub sale_price: String,
    /// Used instead of `base_price` while that is empty.
    pub fallback_price: String,
    pub sku_prefix: String,
}

impl Default for VariantDefaults {
    fn default() -> Self {
        Self {
            base_price: String::new(),
            sale_price: String::new(),
            fallback_price: "0.00".to_string(),
            sku_prefix: "SKU".to_string(),
        }
    }
}

impl VariantDefaults {
    #[must_use]
    pub fn seed_price(&self) -> &str {
        if self.base_price.is_empty() {
            &self.fallback_price
        } else {
            &self.base_price
        }
    }
}

/// Every combination of option values, first option varying slowest.
///
/// Returns nothing when `options` is empty or any option has no values;
/// partial combinations are never produced.
#[must_use]
pub fn cartesian_product(options: &[ProductOption]) -> Vec<Vec<String>> {
    if options.is_empty() || options.iter().any(|o| o.values.is_empty()) {
        return Vec::new();
    }

    let mut combos: Vec<Vec<String>> = vec![Vec::new()];
    for option in options {
        let mut next = Vec::with_capacity(combos.len() * option.values.len());
        for partial in &combos {
            for value in &option.values {
                let mut combo = Vec::with_capacity(partial.len() + 1);
                combo.extend_from_slice(partial);
                combo.push(value.value.clone());
                next.push(combo);
            }
        }
        combos = next;
    }
    combos
}

/// Recompute the variant list for `options`.
///
/// A combination whose key matches a variant in `previous` reuses that
/// variant unchanged. Repeated keys are matched in order: the k-th
/// occurrence reuses the k-th previous record with that key. Other combinations get a new
/// variant seeded from `defaults` with stock `"0"`, enabled, and a
/// placeholder SKU unique within this pass. Variants in `previous` whose
/// combination is no longer produced are dropped.
#[must_use]
pub fn generate_variants(
    options: &[ProductOption],
    previous: &[Variant],
    defaults: &VariantDefaults,
) -> Vec<Variant> {
    let combos = cartesian_product(options);

    let mut existing: HashMap<CombinationKey, VecDeque<&Variant>> =
        HashMap::with_capacity(previous.len());
    for variant in previous {
        existing.entry(variant.key()).or_default().push_back(variant);
    }

    let mut taken_skus: HashSet<String> = previous.iter().map(|v| v.sku.clone()).collect();
    let mut seen_keys: HashSet<CombinationKey> = HashSet::with_capacity(combos.len());
    let mut retained = 0usize;

    let variants: Vec<Variant> = combos
        .into_iter()
        .map(|combination| {
            let key = CombinationKey::from(combination.as_slice());
            if !seen_keys.insert(key.clone()) {
                tracing::warn!(
                    combination = %key,
                    "duplicate combination generated; an option has repeated values"
                );
            }

            if let Some(found) = existing.get_mut(&key).and_then(VecDeque::pop_front) {
                retained += 1;
                return found.clone();
            }

            Variant {
                id: new_id(),
                combination,
                price: defaults.seed_price().to_string(),
                sale_price: defaults.sale_price.clone(),
                stock: "0".to_string(),
                is_enabled: true,
                sku: placeholder_sku(&defaults.sku_prefix, &mut taken_skus),
                image: None,
            }
        })
        .collect();

    tracing::debug!(
        options = options.len(),
        total = variants.len(),
        retained,
        created = variants.len() - retained,
        dropped = previous.len().saturating_sub(retained),
        "regenerated variants"
    );

    variants
}

fn placeholder_sku(prefix: &str, taken: &mut HashSet<String>) -> String {
    loop {
        let code = uuid::Uuid::new_v4().simple().to_string();
        let candidate = format!("{prefix}-{}", code[..8].to_ascii_uppercase());
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
