//! Per-category budget limits
//!
//! A budget is a spending ceiling per category, independent of actual spend.
//! The mapping is created with defaults on first use and mutated only by
//! explicit edits, which clamp to zero or above.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::money::Money;

/// Mapping from category to its spending limit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets(BTreeMap<Category, Money>);

impl Budgets {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// The default limits assigned on first use
    pub fn defaults() -> Self {
        let mut map = BTreeMap::new();
        map.insert(Category::Food, Money::from_units(500));
        map.insert(Category::Transport, Money::from_units(200));
        map.insert(Category::Shopping, Money::from_units(300));
        map.insert(Category::Bills, Money::from_units(1000));
        map.insert(Category::Other, Money::from_units(200));
        Self(map)
    }

    /// The limit for a category; absent categories have limit zero
    pub fn limit(&self, category: &Category) -> Money {
        self.0.get(category).copied().unwrap_or_else(Money::zero)
    }

    /// Set the limit for a category, clamping negative values to zero
    pub fn set(&mut self, category: Category, limit: Money) {
        self.0.insert(category, limit.clamp_non_negative());
    }

    /// Iterate over (category, limit) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &Money)> {
        self.0.iter()
    }

    /// Number of categories with an explicit limit
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no limits are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let budgets = Budgets::defaults();
        assert_eq!(budgets.limit(&Category::Food).cents(), 50000);
        assert_eq!(budgets.limit(&Category::Transport).cents(), 20000);
        assert_eq!(budgets.limit(&Category::Shopping).cents(), 30000);
        assert_eq!(budgets.limit(&Category::Bills).cents(), 100000);
        assert_eq!(budgets.limit(&Category::Other).cents(), 20000);
        assert_eq!(budgets.len(), 5);
    }

    #[test]
    fn test_absent_category_has_zero_limit() {
        let budgets = Budgets::defaults();
        let unknown = Category::Custom("gadgets".into());
        assert!(budgets.limit(&unknown).is_zero());
    }

    #[test]
    fn test_set_clamps_negative_to_zero() {
        let mut budgets = Budgets::defaults();
        budgets.set(Category::Food, Money::from_cents(-500));
        assert!(budgets.limit(&Category::Food).is_zero());
    }

    #[test]
    fn test_set_updates_limit() {
        let mut budgets = Budgets::defaults();
        budgets.set(Category::Bills, Money::from_units(1200));
        assert_eq!(budgets.limit(&Category::Bills).cents(), 120000);
    }

    #[test]
    fn test_serde_string_keys() {
        let budgets = Budgets::defaults();
        let json = serde_json::to_string(&budgets).unwrap();
        assert!(json.contains("\"food\":50000"));

        let back: Budgets = serde_json::from_str(&json).unwrap();
        assert_eq!(budgets, back);
    }
}
