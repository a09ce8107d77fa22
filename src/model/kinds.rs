//! Closed enumerations shared by requests and items.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Supported cabinet shapes.
///
/// The wire name (e.g. `ONE_DOOR`) doubles as the canonical display label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinetType {
    /// Single full-width door. Also accepted as `SINGLE_DOOR`.
    #[serde(alias = "SINGLE_DOOR")]
    #[strum(to_string = "ONE_DOOR", serialize = "SINGLE_DOOR")]
    OneDoor,
    /// Pair of equal doors.
    TwoDoors,
    /// Door count taken from the request.
    Doors,
    /// Open carcass without fronts.
    NoDoors,
    /// Drawer bank with per-drawer front heights and depths.
    Drawers,
    /// One full-height drawer.
    OneDrawer,
    /// Three stacked drawers.
    ThreeDrawers,
    /// Built-in oven housing, optionally with a drawer below the oven.
    Oven,
}

impl CabinetType {
    /// Canonical label used when a cabinet has no explicit name.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Whether the cabinet carries hinged doors (and therefore a shelf).
    pub fn has_doors(&self) -> bool {
        matches!(
            self,
            CabinetType::OneDoor | CabinetType::TwoDoors | CabinetType::Doors
        )
    }

    /// Whether the cabinet is built as a drawer bank.
    pub fn is_drawer_bank(&self) -> bool {
        matches!(
            self,
            CabinetType::Drawers | CabinetType::OneDrawer | CabinetType::ThreeDrawers
        )
    }

    /// Number of drawers fixed by the type itself.
    pub fn fixed_drawer_count(&self) -> Option<usize> {
        match self {
            CabinetType::OneDrawer => Some(1),
            CabinetType::ThreeDrawers => Some(3),
            _ => None,
        }
    }
}

/// Panel stock an item is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialType {
    /// Board-grade furniture panel.
    Board,
    /// Thin hardboard backing sheet.
    Hdf,
}

/// Structural role of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Corpus,
    Shelf,
    Front,
    DrawerBox,
    DrawerBottom,
    Back,
    Plinth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cabinet_type_labels_match_wire_names() {
        for cabinet_type in CabinetType::iter() {
            let wire = serde_json::to_value(cabinet_type).unwrap();
            assert_eq!(wire.as_str(), Some(cabinet_type.label().as_str()));
        }
        assert_eq!(CabinetType::ThreeDrawers.label(), "THREE_DRAWERS");
    }

    #[test]
    fn test_cabinet_type_from_str() {
        assert_eq!(CabinetType::from_str("OVEN").unwrap(), CabinetType::Oven);
        assert_eq!(CabinetType::from_str("NO_DOORS").unwrap(), CabinetType::NoDoors);
        assert!(CabinetType::from_str("CORNER").is_err());
    }

    #[test]
    fn test_single_door_alias() {
        assert_eq!(CabinetType::from_str("SINGLE_DOOR").unwrap(), CabinetType::OneDoor);
        let parsed: CabinetType = serde_json::from_str("\"SINGLE_DOOR\"").unwrap();
        assert_eq!(parsed, CabinetType::OneDoor);
        assert_eq!(CabinetType::OneDoor.to_string(), "ONE_DOOR");
    }

    #[test]
    fn test_cabinet_type_families() {
        assert!(CabinetType::Doors.has_doors());
        assert!(!CabinetType::NoDoors.has_doors());
        assert!(CabinetType::OneDrawer.is_drawer_bank());
        assert!(!CabinetType::Oven.is_drawer_bank());
        assert_eq!(CabinetType::ThreeDrawers.fixed_drawer_count(), Some(3));
        assert_eq!(CabinetType::Drawers.fixed_drawer_count(), None);
    }

    #[test]
    fn test_material_and_item_type_wire_names() {
        assert_eq!(serde_json::to_string(&MaterialType::Board).unwrap(), "\"BOARD\"");
        assert_eq!(serde_json::to_string(&MaterialType::Hdf).unwrap(), "\"HDF\"");
        assert_eq!(
            serde_json::to_string(&ItemType::DrawerBottom).unwrap(),
            "\"DRAWER_BOTTOM\""
        );
    }
}
