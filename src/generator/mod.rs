//! Cabinet generators, one per cabinet type.
//!
//! Every generator returns the aggregated item list of a *single* cabinet
//! instance; the instance count is applied once by the orchestrator.

mod doors;
mod drawers;
mod open;
mod oven;
mod registry;

pub use doors::door_fronts;
pub use oven::oven_drawer_height;
pub use registry::{Generator, GeneratorRegistry};

use crate::config::CutListConfig;
use crate::error::Result;
use crate::geometry::{aggregate_items, check_dimensions, plinth_items};
use crate::model::{Cabinet, CabinetType, Item};

/// Signature shared by all generator functions.
pub type GenerateFn = fn(&Cabinet, &CutListConfig) -> Result<Vec<Item>>;

/// The generator function for a cabinet type.
pub fn handler(cabinet_type: CabinetType) -> GenerateFn {
    match cabinet_type {
        CabinetType::OneDoor => doors::one_door,
        CabinetType::TwoDoors => doors::two_doors,
        CabinetType::Doors => doors::doors,
        CabinetType::NoDoors => open::no_doors,
        CabinetType::Drawers | CabinetType::OneDrawer | CabinetType::ThreeDrawers => {
            drawers::drawer_bank
        }
        CabinetType::Oven => oven::oven,
    }
}

/// Append the plinth, reject impossible panels and merge duplicates.
fn finish(cabinet: &Cabinet, mut items: Vec<Item>, config: &CutListConfig) -> Result<Vec<Item>> {
    if let Some(plinth) = &cabinet.plinth {
        items.extend(plinth_items(
            plinth,
            cabinet.width,
            cabinet.depth,
            cabinet.thickness,
            &config.plinth,
        ));
    }
    check_dimensions(cabinet.index, &items)?;
    Ok(aggregate_items(items))
}
