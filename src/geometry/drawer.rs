//! Drawer front and drawer box dimensions.
//!
//! Drawer sides come with the slide system and are never cut from board, so a
//! drawer contributes a face, a box back and a box bottom only.

use crate::config::CutListConfig;
use crate::model::{DrawerConfig, Item, ItemType};

/// Resolved dimensions of one drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerBox {
    /// Face width.
    pub front_width: i32,
    /// Face height after the inter-drawer gap.
    pub front_height: i32,
    /// Box height, never lower than the minimum box height.
    pub box_height: i32,
    /// Width of the box back, between the slide-mounted sides.
    pub back_width: i32,
    /// Width of the box bottom.
    pub bottom_width: i32,
    /// Depth of the box bottom.
    pub depth: i32,
}

impl DrawerBox {
    /// Compute a drawer for a carcass of `width` with `inner_width` between the sides.
    pub fn new(width: i32, inner_width: i32, drawer: DrawerConfig, config: &CutListConfig) -> Self {
        let front_height = drawer.height - config.drawer_gap;
        let box_height = config
            .min_drawer_box_height
            .max(front_height - config.drawer_box_height_offset);
        let bottom_width = inner_width - config.slide_clearance;

        Self {
            front_width: width - config.front_clearance,
            front_height,
            box_height,
            back_width: bottom_width - 2 * config.drawer_box_thickness,
            bottom_width,
            depth: drawer.depth,
        }
    }

    /// Face, box back and box bottom, labelled with `label` (e.g. `Drawer 2`).
    pub fn items(&self, label: &str, thickness: i32, config: &CutListConfig) -> Vec<Item> {
        vec![
            Item::board(
                format!("[{}] Front", label),
                self.front_width,
                self.front_height,
                thickness,
                ItemType::Front,
            ),
            Item::board(
                format!("[{}] Back", label),
                self.back_width,
                self.box_height,
                config.drawer_box_thickness,
                ItemType::DrawerBox,
            ),
            Item::board(
                format!("[{}] Bottom", label),
                self.bottom_width,
                self.depth,
                config.drawer_box_thickness,
                ItemType::DrawerBottom,
            ),
        ]
    }
}

/// Split `height` into `count` equal drawer fronts, the remainder going to the last one.
pub fn split_drawer_heights(height: i32, count: usize, depth: i32) -> Vec<DrawerConfig> {
    if count == 0 {
        return Vec::new();
    }
    let share = height / count as i32;
    let remainder = height - share * count as i32;
    (0..count)
        .map(|i| {
            let extra = if i + 1 == count { remainder } else { 0 };
            DrawerConfig::new(share + extra, depth)
        })
        .collect()
}
