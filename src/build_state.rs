//! In-progress build: at most one part per category.

use serde::Serialize;

use crate::catalog::{Catalog, Part};
use crate::error::{Result, RigError};
use crate::types::{CATEGORY_COUNT, CATEGORY_ORDER, Category};

/// The user's selection, one optional part per category.
///
/// Stored as a fixed table indexed by [`Category::slot`], so a part can only
/// ever sit under its own category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildState {
    slots: [Option<Part>; CATEGORY_COUNT],
}

impl BuildState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `part` under its own category, replacing any earlier choice.
    ///
    /// No compatibility check happens here; callers are expected to offer
    /// only what `compat::eligible_parts` returns. Returns the replaced part.
    pub fn select_part(&mut self, part: Part) -> Option<Part> {
        let slot = part.category.slot();
        tracing::debug!("Selected {} for {}", part.id, part.category);
        self.slots[slot].replace(part)
    }

    /// The part chosen for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&Part> {
        self.slots[category.slot()].as_ref()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Number of categories with a selection.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Selected parts in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Part)> {
        CATEGORY_ORDER
            .iter()
            .filter_map(|c| self.get(*c).map(|p| (*c, p)))
    }

    /// Sum of the prices of every selected part. Zero for an empty build.
    pub fn total_price(&self) -> u64 {
        self.slots
            .iter()
            .flatten()
            .map(|p| u64::from(p.price))
            .sum()
    }

    /// Combined CPU and GPU consumption in watts.
    ///
    /// Display only: the PSU is not checked against this figure.
    pub fn estimated_draw(&self) -> u32 {
        [Category::Cpu, Category::Gpu]
            .iter()
            .filter_map(|c| self.get(*c).and_then(|p| p.wattage))
            .sum()
    }

    /// Build from catalog part ids, applied in the given order.
    ///
    /// A later id replaces an earlier one of the same category. Unknown ids
    /// are an error; compatibility is not checked.
    pub fn from_part_ids<S: AsRef<str>>(catalog: &Catalog, ids: &[S]) -> Result<Self> {
        let mut build = Self::new();
        for id in ids {
            let id = id.as_ref();
            let part = catalog
                .get(id)
                .ok_or_else(|| RigError::catalog(format!("Unknown part id '{}'", id)))?;
            if let Some(previous) = build.select_part(part.clone()) {
                tracing::warn!("'{}' replaces '{}' as {}", part.id, previous.id, part.category);
            }
        }
        Ok(build)
    }
}

/// Serializes as a `{ "<Category>": Part }` map in wizard order.
impl Serialize for BuildState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, part) in self.iter() {
            map.serialize_entry(&category, part)?;
        }
        map.end()
    }
}
