//! Plinth (baseboard) panels and the optional plinth drawer.

use crate::config::PlinthConfig;
use crate::model::{Item, ItemType, Plinth};
use tracing::{debug, warn};

/// Widest plinth drawer that fits between the legs, rounded down to the width step.
///
/// Legs sit flush with the cabinet edge, so each one takes a full diameter.
pub fn plinth_drawer_width(width: i32, leg_diameter: i32, config: &PlinthConfig) -> i32 {
    let available = width - 2 * leg_diameter - config.drawer_clearance;
    available.div_euclid(config.drawer_width_step) * config.drawer_width_step
}

/// Plinth items for a cabinet of the given width, depth and board thickness.
///
/// A plinth drawer that would be narrower than `min_drawer_width` always falls
/// back to a plain plinth front. A non-positive plinth height yields nothing.
pub fn plinth_items(
    plinth: &Plinth,
    width: i32,
    depth: i32,
    thickness: i32,
    config: &PlinthConfig,
) -> Vec<Item> {
    if plinth.height <= 0 {
        return Vec::new();
    }

    let Some(drawer) = plinth.drawer else {
        return vec![standard_plinth(plinth.height, width, thickness)];
    };

    let drawer_width = plinth_drawer_width(width, drawer.leg_diameter, config);
    if drawer_width < config.min_drawer_width {
        warn!(
            "Not enough space for plinth drawer (width {}, leg {}, drawer {}), using plain plinth",
            width, drawer.leg_diameter, drawer_width
        );
        return vec![standard_plinth(plinth.height, width, thickness)];
    }

    let front_height = plinth.height - config.front_clearance;
    let box_height = config.max_box_height.min(front_height - config.box_height_offset);
    let box_depth = config.max_box_depth.min(depth - config.box_depth_offset);
    debug!(
        "Plinth drawer {} wide, box {} x {}",
        drawer_width, box_height, box_depth
    );

    vec![
        Item::board(
            "[Plinth drawer] Front",
            width - config.front_clearance,
            front_height,
            thickness,
            ItemType::Plinth,
        ),
        Item::board(
            "[Plinth drawer] Back",
            drawer_width - 2 * thickness,
            box_height,
            thickness,
            ItemType::DrawerBox,
        )
        .with_count(2),
        Item::board(
            "[Plinth drawer] Bottom",
            drawer_width,
            box_depth,
            thickness,
            ItemType::DrawerBottom,
        ),
    ]
}

fn standard_plinth(height: i32, width: i32, thickness: i32) -> Item {
    Item::board("[Plinth] Front", width, height, thickness, ItemType::Plinth)
}
