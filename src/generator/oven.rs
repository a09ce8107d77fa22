//! Built-in oven housing: `OVEN`.

use super::finish;
use crate::config::CutListConfig;
use crate::error::Result;
use crate::geometry::{back_panel, corpus_items, DrawerBox, TopBeams};
use crate::model::{Cabinet, DrawerConfig, Item, ItemType};
use tracing::info;

pub(super) fn oven(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    info!(
        "Generating {} items (drawer: {}) for '{}'",
        cabinet.cabinet_type, cabinet.oven_drawer, cabinet.name
    );

    let mut items = corpus_items(cabinet, TopBeams::FrontAndBack, config);
    items.push(back_panel(cabinet, config));
    items.push(Item::board(
        "[Oven] Shelf",
        cabinet.inner_width(),
        cabinet.depth,
        cabinet.thickness,
        ItemType::Shelf,
    ));

    if cabinet.oven_drawer {
        let depth = cabinet
            .drawers
            .first()
            .map(|drawer| drawer.depth)
            .unwrap_or_else(|| config.default_drawer_depth(cabinet.depth));
        let drawer = DrawerConfig::new(oven_drawer_height(cabinet.height, config), depth);
        let drawer_box = DrawerBox::new(cabinet.width, cabinet.inner_width(), drawer, config);
        items.extend(drawer_box.items("Oven drawer", cabinet.thickness, config));
    } else {
        items.push(Item::board(
            "[Oven] Filler",
            cabinet.width - config.front_clearance,
            config.oven_filler_height,
            cabinet.thickness,
            ItemType::Front,
        ));
    }

    finish(cabinet, items, config)
}

/// Height reserved for the drawer below the oven, rounded to whole millimetres.
pub fn oven_drawer_height(height: i32, config: &CutListConfig) -> i32 {
    (f64::from(height) * config.oven_drawer_ratio).round() as i32
}
