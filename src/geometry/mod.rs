//! Shared panel geometry and item aggregation.

mod aggregate;
mod corpus;
mod drawer;
mod plinth;

pub use aggregate::{aggregate_items, multiply_items};
pub use corpus::{back_panel, corpus_items, TopBeams};
pub use drawer::{split_drawer_heights, DrawerBox};
pub use plinth::{plinth_drawer_width, plinth_items};

use crate::error::{CutListError, Result};
use crate::model::Item;

/// Reject the first item with a non-positive width, height, thickness or count.
///
/// The reported field is `<item name>.<dimension>`.
pub fn check_dimensions(index: usize, items: &[Item]) -> Result<()> {
    for item in items {
        if let Some((dimension, value)) = item.non_positive_dimension() {
            return Err(CutListError::geometry(
                index,
                format!("{}.{}", item.name, dimension),
                value,
            ));
        }
        if item.count == 0 {
            return Err(CutListError::geometry(index, format!("{}.count", item.name), 0));
        }
    }
    Ok(())
}
