//! Item - one cut panel specification with a quantity.

use super::{ItemType, MaterialType};
use serde::{Deserialize, Serialize};

/// A single panel to be cut, with the number of copies needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display label, e.g. `[Corpus] Bottom`.
    pub name: String,
    /// Panel width in mm.
    pub width: i32,
    /// Panel height (or length) in mm.
    pub height: i32,
    /// Stock thickness in mm.
    pub thickness: i32,
    /// Number of identical panels.
    pub count: u32,
    /// Stock material.
    pub material: MaterialType,
    /// Structural role.
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Identity of an item for aggregation: everything except `count`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub thickness: i32,
    pub material: MaterialType,
    pub item_type: ItemType,
}

impl Item {
    /// Create a single board panel.
    pub fn board(
        name: impl Into<String>,
        width: i32,
        height: i32,
        thickness: i32,
        item_type: ItemType,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            thickness,
            count: 1,
            material: MaterialType::Board,
            item_type,
        }
    }

    /// Create a single HDF panel.
    pub fn hdf(
        name: impl Into<String>,
        width: i32,
        height: i32,
        thickness: i32,
        item_type: ItemType,
    ) -> Self {
        Self {
            material: MaterialType::Hdf,
            ..Self::board(name, width, height, thickness, item_type)
        }
    }

    /// Set the quantity.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Aggregation key of this item.
    pub fn key(&self) -> ItemKey {
        ItemKey {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            thickness: self.thickness,
            material: self.material,
            item_type: self.item_type,
        }
    }

    /// Area of one panel in mm².
    pub fn area_mm2(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// First non-positive dimension, as `(dimension, value)`.
    pub fn non_positive_dimension(&self) -> Option<(&'static str, i32)> {
        [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
        ]
        .into_iter()
        .find(|(_, value)| *value <= 0)
    }

    /// Get display dimensions (width x height x thickness).
    pub fn dimensions_string(&self) -> String {
        format!("{} x {} x {}", self.width, self.height, self.thickness)
    }
}
