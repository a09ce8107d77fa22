//! Drawer banks: `DRAWERS`, `ONE_DRAWER` and `THREE_DRAWERS`.
//!
//! Normalisation fills in the drawer list for the fixed-count types, so all
//! three share one generator.

use super::finish;
use crate::config::CutListConfig;
use crate::error::{CutListError, Result};
use crate::geometry::{back_panel, corpus_items, DrawerBox, TopBeams};
use crate::model::{Cabinet, Item};
use tracing::{debug, info};

pub(super) fn drawer_bank(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    info!(
        "Generating {} items ({} drawer(s)) for '{}'",
        cabinet.cabinet_type,
        cabinet.drawers.len(),
        cabinet.name
    );

    if cabinet.drawers.is_empty() {
        return Err(CutListError::malformed(
            cabinet.index,
            format!("{} cabinet has no drawers configured", cabinet.cabinet_type),
        ));
    }

    let mut items = corpus_items(cabinet, TopBeams::FrontAndBack, config);
    items.push(back_panel(cabinet, config));

    for (i, drawer) in cabinet.drawers.iter().enumerate() {
        let drawer_box = DrawerBox::new(cabinet.width, cabinet.inner_width(), *drawer, config);
        debug!("Drawer {}: {:?}", i + 1, drawer_box);
        items.extend(drawer_box.items(&format!("Drawer {}", i + 1), cabinet.thickness, config));
    }

    finish(cabinet, items, config)
}
