//! Workshop constants and engine settings.
//!
//! All dimensions are integer millimetres.

use serde::{Deserialize, Serialize};

/// Reveal gap subtracted from door and drawer faces.
pub const FRONT_CLEARANCE: i32 = 4;

/// Height of a top stretcher beam.
pub const TOP_BEAM_HEIGHT: i32 = 100;

/// Gap between stacked drawer fronts.
pub const DRAWER_GAP: i32 = 3;

/// Back panel reduction relative to the carcass (groove allowance).
pub const BACK_CLEARANCE: i32 = 2;

/// HDF back panel thickness.
pub const BACK_THICKNESS: i32 = 3;

/// Shelf width reduction relative to the inner width.
pub const SHELF_WIDTH_CLEARANCE: i32 = 2;

/// Shelf depth reduction relative to the carcass depth.
pub const SHELF_DEPTH_CLEARANCE: i32 = 20;

/// Space taken by drawer slides on both sides together.
pub const SLIDE_CLEARANCE: i32 = 26;

/// Board thickness used for drawer box backs and bottoms.
pub const DRAWER_BOX_THICKNESS: i32 = 16;

/// Lowest drawer box that is still built.
pub const MIN_DRAWER_BOX_HEIGHT: i32 = 80;

/// Drawer box height is this much lower than its front.
pub const DRAWER_BOX_HEIGHT_OFFSET: i32 = 40;

/// Nominal slide length used when a drawer depth is not supplied.
pub const DEFAULT_DRAWER_SLIDE_LENGTH: i32 = 500;

/// Drawer bottom is this much shorter than the slide length.
pub const DRAWER_BOTTOM_SETBACK: i32 = 24;

/// Share of an oven housing's height given to the drawer below the oven.
pub const OVEN_DRAWER_RATIO: f64 = 0.20;

/// Height of the filler panel fitted below an oven without a drawer.
pub const OVEN_FILLER_HEIGHT: i32 = 100;

/// Door count assumed for variable-door cabinets.
pub const DEFAULT_DOOR_COUNT: u32 = 1;

/// Leg diameter assumed when a plinth drawer is requested without one.
pub const DEFAULT_LEG_DIAMETER: i32 = 60;

/// Free space kept between the legs and a plinth drawer.
pub const PLINTH_DRAWER_CLEARANCE: i32 = 10;

/// Plinth drawer widths are rounded down to this step.
pub const PLINTH_DRAWER_WIDTH_STEP: i32 = 50;

/// Narrowest plinth drawer worth building.
pub const MIN_PLINTH_DRAWER_WIDTH: i32 = 300;

/// Tallest plinth drawer box.
pub const MAX_PLINTH_BOX_HEIGHT: i32 = 60;

/// Plinth drawer box height is this much lower than its front.
pub const PLINTH_BOX_HEIGHT_OFFSET: i32 = 20;

/// Deepest plinth drawer box.
pub const MAX_PLINTH_BOX_DEPTH: i32 = 400;

/// Plinth drawer box depth is this much shorter than the cabinet.
pub const PLINTH_BOX_DEPTH_OFFSET: i32 = 100;

/// Largest accepted request dimension (cabinet, drawer, plinth, leg).
pub const MAX_DIMENSION: i32 = 10_000;

/// Thickest accepted board.
pub const MAX_THICKNESS: i32 = 100;

/// Most instances accepted for one cabinet.
pub const MAX_CABINET_COUNT: u32 = 10_000;

/// Plinth rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlinthConfig {
    pub default_leg_diameter: i32,
    pub drawer_clearance: i32,
    pub drawer_width_step: i32,
    pub min_drawer_width: i32,
    pub front_clearance: i32,
    pub max_box_height: i32,
    pub box_height_offset: i32,
    pub max_box_depth: i32,
    pub box_depth_offset: i32,
}

impl Default for PlinthConfig {
    fn default() -> Self {
        Self {
            default_leg_diameter: DEFAULT_LEG_DIAMETER,
            drawer_clearance: PLINTH_DRAWER_CLEARANCE,
            drawer_width_step: PLINTH_DRAWER_WIDTH_STEP,
            min_drawer_width: MIN_PLINTH_DRAWER_WIDTH,
            front_clearance: FRONT_CLEARANCE,
            max_box_height: MAX_PLINTH_BOX_HEIGHT,
            box_height_offset: PLINTH_BOX_HEIGHT_OFFSET,
            max_box_depth: MAX_PLINTH_BOX_DEPTH,
            box_depth_offset: PLINTH_BOX_DEPTH_OFFSET,
        }
    }
}

/// Engine configuration.
///
/// Every field falls back to the workshop constant above, so a partial JSON
/// document only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CutListConfig {
    pub front_clearance: i32,
    pub top_beam_height: i32,
    pub drawer_gap: i32,
    pub back_clearance: i32,
    pub back_thickness: i32,
    pub shelf_width_clearance: i32,
    pub shelf_depth_clearance: i32,
    pub slide_clearance: i32,
    pub drawer_box_thickness: i32,
    pub min_drawer_box_height: i32,
    pub drawer_box_height_offset: i32,
    pub default_drawer_slide_length: i32,
    pub drawer_bottom_setback: i32,
    pub oven_drawer_ratio: f64,
    pub oven_filler_height: i32,
    pub default_door_count: u32,
    /// Upper bound for request dimensions; keeps panel arithmetic within `i32`.
    pub max_dimension: i32,
    pub max_thickness: i32,
    pub max_cabinet_count: u32,
    pub plinth: PlinthConfig,
}

impl Default for CutListConfig {
    fn default() -> Self {
        Self {
            front_clearance: FRONT_CLEARANCE,
            top_beam_height: TOP_BEAM_HEIGHT,
            drawer_gap: DRAWER_GAP,
            back_clearance: BACK_CLEARANCE,
            back_thickness: BACK_THICKNESS,
            shelf_width_clearance: SHELF_WIDTH_CLEARANCE,
            shelf_depth_clearance: SHELF_DEPTH_CLEARANCE,
            slide_clearance: SLIDE_CLEARANCE,
            drawer_box_thickness: DRAWER_BOX_THICKNESS,
            min_drawer_box_height: MIN_DRAWER_BOX_HEIGHT,
            drawer_box_height_offset: DRAWER_BOX_HEIGHT_OFFSET,
            default_drawer_slide_length: DEFAULT_DRAWER_SLIDE_LENGTH,
            drawer_bottom_setback: DRAWER_BOTTOM_SETBACK,
            oven_drawer_ratio: OVEN_DRAWER_RATIO,
            oven_filler_height: OVEN_FILLER_HEIGHT,
            default_door_count: DEFAULT_DOOR_COUNT,
            max_dimension: MAX_DIMENSION,
            max_thickness: MAX_THICKNESS,
            max_cabinet_count: MAX_CABINET_COUNT,
            plinth: PlinthConfig::default(),
        }
    }
}

impl CutListConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> crate::Result<Self> {
        let text = crate::io::read_non_empty(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Drawer box depth used when a request does not supply one.
    pub fn default_drawer_depth(&self, cabinet_depth: i32) -> i32 {
        self.default_drawer_slide_length.min(cabinet_depth) - self.drawer_bottom_setback
    }
}
