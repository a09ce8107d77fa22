//! Work response returned to the client.

use super::{CabinetType, Item};
use serde::{Deserialize, Serialize};

/// Outcome marker of a work response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    #[default]
    Success,
}

/// Aggregated cut list of one requested cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetGroup {
    pub cabinet_name: String,
    pub cabinet_type: CabinetType,
    pub cabinet_count: u32,
    /// Items for all `cabinet_count` instances together.
    pub items: Vec<Item>,
}

impl CabinetGroup {
    /// Total number of panels in this group.
    pub fn panel_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.count)).sum()
    }
}

/// Cut lists for a whole work request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkResponse {
    pub status: ResponseStatus,
    pub cabinet_groups: Vec<CabinetGroup>,
}

impl WorkResponse {
    /// Create a successful response.
    pub fn success(cabinet_groups: Vec<CabinetGroup>) -> Self {
        Self {
            status: ResponseStatus::Success,
            cabinet_groups,
        }
    }

    /// Iterate over every item of every group.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.cabinet_groups.iter().flat_map(|group| group.items.iter())
    }
}
