use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wardrobe categories in drawing order, back to front.
///
/// This single table drives both the order categories are listed in the
/// wardrobe panel and the z-order of worn layers on the stage.
pub const LAYER_ORDER: [&str; 9] = [
    "BOTTOMS", "TOPS", "HANDS", "FEET", "HEADS", "HAIRS", "EYES", "LIPS", "BANGS",
];

/// A wardrobe slot, named after its asset directory (case as on disk).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory name used when resolving item images.
    ///
    /// Item lookups always use the lowercased category, while display keeps
    /// the case found on disk.
    pub fn asset_dir_name(&self) -> String {
        self.0.to_lowercase()
    }

    /// Position of this category in [`LAYER_ORDER`], matched case-insensitively.
    ///
    /// Categories outside the table have no rank.
    pub fn layer_rank(&self) -> Option<usize> {
        LAYER_ORDER
            .iter()
            .position(|name| name.eq_ignore_ascii_case(&self.0))
    }

    /// Ordering for wardrobe listings: ranked categories in table order,
    /// then everything else alphabetically.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        let key = |c: &Self| (c.layer_rank().is_none(), c.layer_rank(), c.0.clone());
        key(self).cmp(&key(other))
    }

    /// Ordering for the layer stack, bottom to top.
    ///
    /// Unranked categories sit directly above the base model, below every
    /// ranked category, in alphabetical order.
    pub fn draw_cmp(&self, other: &Self) -> Ordering {
        let key = |c: &Self| (c.layer_rank().is_some(), c.layer_rank(), c.0.clone());
        key(self).cmp(&key(other))
    }
}

/// Sort categories into wardrobe display order, see [`Category::display_cmp`].
pub fn sort_categories<C: Borrow<Category>>(categories: &mut [C]) {
    categories.sort_by(|a, b| a.borrow().display_cmp(b.borrow()));
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single wardrobe item: one image asset inside one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub category: Category,
    pub name: String,
}

impl ItemRef {
    pub fn new(category: impl Into<Category>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.name)
    }
}

/// Error returned when a `CATEGORY=ITEM` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRefParseError(pub String);

impl fmt::Display for ItemRefParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected CATEGORY=ITEM, got '{}'", self.0)
    }
}

impl std::error::Error for ItemRefParseError {}

impl std::str::FromStr for ItemRef {
    type Err = ItemRefParseError;

    /// Parse `CATEGORY=ITEM`. Both halves are trimmed and must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, name) = s
            .split_once('=')
            .ok_or_else(|| ItemRefParseError(s.to_string()))?;
        let (category, name) = (category.trim(), name.trim());
        if category.is_empty() || name.is_empty() {
            return Err(ItemRefParseError(s.to_string()));
        }
        Ok(Self::new(category, name))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
