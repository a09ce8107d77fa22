//! Cabinet - a request with every default resolved and every field validated.

use super::{CabinetType, DrawerConfig};
use serde::Serialize;

/// Plinth fitted below the carcass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plinth {
    /// Baseboard height, always positive.
    pub height: i32,
    /// Plinth drawer between the legs, if requested.
    pub drawer: Option<PlinthDrawer>,
}

/// Plinth drawer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlinthDrawer {
    pub leg_diameter: i32,
}

/// A normalised cabinet ready for a generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    /// Position of the cabinet in the work request.
    pub index: usize,
    pub cabinet_type: CabinetType,
    /// Explicit name, or the type's canonical label.
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub thickness: i32,
    /// Number of identical instances, at least 1.
    pub count: u32,
    /// Door leaves; only meaningful for door cabinets.
    pub door_count: u32,
    /// Drawer layout; filled in for drawer banks, optional for ovens.
    pub drawers: Vec<DrawerConfig>,
    pub oven_drawer: bool,
    pub plinth: Option<Plinth>,
}

impl Cabinet {
    /// Create a cabinet with no options set.
    pub fn new(cabinet_type: CabinetType, width: i32, height: i32, depth: i32, thickness: i32) -> Self {
        Self {
            index: 0,
            cabinet_type,
            name: cabinet_type.label(),
            width,
            height,
            depth,
            thickness,
            count: 1,
            door_count: default_door_count(cabinet_type),
            drawers: Vec::new(),
            oven_drawer: false,
            plinth: None,
        }
    }

    /// Space between the two side panels.
    pub fn inner_width(&self) -> i32 {
        self.width - 2 * self.thickness
    }
}

/// Door leaves implied by the cabinet type alone.
fn default_door_count(cabinet_type: CabinetType) -> u32 {
    match cabinet_type {
        CabinetType::OneDoor => 1,
        CabinetType::TwoDoors => 2,
        CabinetType::Doors => crate::config::DEFAULT_DOOR_COUNT,
        _ => 0,
    }
}
