use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Category;

/// The items currently worn: at most one per category.
///
/// Category names are compared ignoring case, matching how item images are
/// looked up; the most recently worn spelling is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    items: BTreeMap<Category, String>,
}

impl Outfit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `item` on in `category`, returning whatever it replaced.
    pub fn wear(&mut self, category: Category, item: impl Into<String>) -> Option<String> {
        let previous = self.take_off(category.as_str());
        self.items.insert(category, item.into());
        previous
    }

    /// Remove the item worn in `category`, if any.
    pub fn take_off(&mut self, category: &str) -> Option<String> {
        let key = self.key_for(category)?.clone();
        self.items.remove(&key)
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        let key = self.key_for(category)?;
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn key_for(&self, category: &str) -> Option<&Category> {
        let wanted = category.to_lowercase();
        self.items.keys().find(|c| c.asset_dir_name() == wanted)
    }

    /// Worn items in stacking order, bottom to top.
    pub fn iter_back_to_front(&self) -> impl Iterator<Item = (&Category, &str)> {
        let mut worn: Vec<(&Category, &str)> =
            self.items.iter().map(|(c, i)| (c, i.as_str())).collect();
        worn.sort_by(|a, b| a.0.draw_cmp(b.0));
        worn.into_iter()
    }
}

impl FromIterator<(Category, String)> for Outfit {
    fn from_iter<I: IntoIterator<Item = (Category, String)>>(iter: I) -> Self {
        let mut outfit = Outfit::new();
        for (category, item) in iter {
            outfit.wear(category, item);
        }
        outfit
    }
}

#[cfg(test)]
#[path = "tests/outfit_tests.rs"]
mod tests;
