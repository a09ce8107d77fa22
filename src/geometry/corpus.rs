//! Carcass panels shared by every cabinet type.

use crate::config::CutListConfig;
use crate::model::{Cabinet, Item, ItemType};

/// Top stretcher layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBeams {
    /// One beam, for open carcasses.
    Single,
    /// Front and back beam, for cabinets carrying fronts.
    FrontAndBack,
}

/// Sides, bottom and top beams.
pub fn corpus_items(cabinet: &Cabinet, beams: TopBeams, config: &CutListConfig) -> Vec<Item> {
    let inner_width = cabinet.inner_width();
    let t = cabinet.thickness;

    let mut items = vec![
        Item::board("[Corpus] Side (left)", cabinet.depth, cabinet.height, t, ItemType::Corpus),
        Item::board("[Corpus] Side (right)", cabinet.depth, cabinet.height, t, ItemType::Corpus),
        Item::board("[Corpus] Bottom", inner_width, cabinet.depth, t, ItemType::Corpus),
    ];

    match beams {
        TopBeams::Single => items.push(Item::board(
            "[Corpus] Top beam",
            inner_width,
            config.top_beam_height,
            t,
            ItemType::Corpus,
        )),
        TopBeams::FrontAndBack => {
            for position in ["front", "back"] {
                items.push(Item::board(
                    format!("[Corpus] Top beam ({})", position),
                    inner_width,
                    config.top_beam_height,
                    t,
                    ItemType::Corpus,
                ));
            }
        }
    }

    items
}

/// HDF back panel, slightly smaller than the carcass.
pub fn back_panel(cabinet: &Cabinet, config: &CutListConfig) -> Item {
    Item::hdf(
        "[Corpus] Back",
        cabinet.width - config.back_clearance,
        cabinet.height - config.back_clearance,
        config.back_thickness,
        ItemType::Back,
    )
}
