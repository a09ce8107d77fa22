//! Door cabinets: `ONE_DOOR`, `TWO_DOORS` and `DOORS`.

use super::finish;
use crate::config::CutListConfig;
use crate::error::Result;
use crate::geometry::{back_panel, corpus_items, TopBeams};
use crate::model::{Cabinet, Item, ItemType};
use tracing::info;

pub(super) fn one_door(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    door_cabinet(cabinet, 1, config)
}

pub(super) fn two_doors(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    door_cabinet(cabinet, 2, config)
}

pub(super) fn doors(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    door_cabinet(cabinet, cabinet.door_count, config)
}

fn door_cabinet(cabinet: &Cabinet, door_count: u32, config: &CutListConfig) -> Result<Vec<Item>> {
    info!(
        "Generating {} items ({} door(s)) for '{}'",
        cabinet.cabinet_type, door_count, cabinet.name
    );

    let mut items = corpus_items(cabinet, TopBeams::FrontAndBack, config);
    items.push(back_panel(cabinet, config));
    items.push(Item::board(
        "[Corpus] Shelf",
        cabinet.inner_width() - config.shelf_width_clearance,
        cabinet.depth - config.shelf_depth_clearance,
        cabinet.thickness,
        ItemType::Shelf,
    ));
    items.extend(door_fronts(
        cabinet.width,
        cabinet.height,
        cabinet.thickness,
        door_count,
        config,
    ));

    finish(cabinet, items, config)
}

/// Door leaves splitting the cabinet width into `door_count` equal parts.
///
/// Each leaf is `width / door_count` minus the front clearance.
pub fn door_fronts(
    width: i32,
    height: i32,
    thickness: i32,
    door_count: u32,
    config: &CutListConfig,
) -> Vec<Item> {
    if door_count == 0 {
        return Vec::new();
    }
    let leaves = door_count as i32;
    let leaf_width = (width - leaves * config.front_clearance) / leaves;
    let leaf_height = height - config.front_clearance;

    let names: Vec<String> = match door_count {
        1 => vec!["[Front] Door".to_string()],
        2 => vec![
            "[Front] Door (left)".to_string(),
            "[Front] Door (right)".to_string(),
        ],
        n => (1..=n).map(|i| format!("[Front] Door {}", i)).collect(),
    };

    names
        .into_iter()
        .map(|name| Item::board(name, leaf_width, leaf_height, thickness, ItemType::Front))
        .collect()
}
