use std::collections::BTreeMap;

use dressup_core::{Category, sort_categories};

/// Available wardrobe items keyed by category.
///
/// Item names within a category are kept sorted so listings are stable
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Category, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category with its items. Replaces any earlier entry.
    pub fn insert(&mut self, category: Category, mut items: Vec<String>) {
        items.sort();
        self.entries.insert(category, items);
    }

    /// Categories in wardrobe display order (layer table first).
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.entries.keys().collect();
        sort_categories(&mut categories);
        categories
    }

    /// Items of one category, or `None` if the category is unknown.
    pub fn items(&self, category: &str) -> Option<&[String]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str, item: &str) -> bool {
        self.items(category)
            .is_some_and(|items| items.iter().any(|i| i == item))
    }

    /// Find a category by name, ignoring case.
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.entries
            .keys()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(category, items)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[String])> {
        self.categories().into_iter().map(move |c| {
            let items = self.entries.get(c).map(Vec::as_slice).unwrap_or_default();
            (c, items)
        })
    }
}
