//! Open cabinet: `NO_DOORS`.

use super::finish;
use crate::config::CutListConfig;
use crate::error::Result;
use crate::geometry::{back_panel, corpus_items, TopBeams};
use crate::model::{Cabinet, Item};
use tracing::info;

pub(super) fn no_doors(cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
    info!("Generating {} items for '{}'", cabinet.cabinet_type, cabinet.name);

    let mut items = corpus_items(cabinet, TopBeams::Single, config);
    items.push(back_panel(cabinet, config));

    finish(cabinet, items, config)
}
