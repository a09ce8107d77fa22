//! Work request as received from the client.

use serde::{Deserialize, Serialize};

/// A batch of cabinets to compute cut lists for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkRequest {
    /// Cabinets, in client order.
    pub cabins: Vec<CabinetRequest>,
}

/// Front height and box depth of one drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerConfig {
    /// Share of the cabinet height given to this drawer's front, gap included.
    pub height: i32,
    /// Drawer box depth.
    pub depth: i32,
}

impl DrawerConfig {
    pub fn new(height: i32, depth: i32) -> Self {
        Self { height, depth }
    }
}

/// One cabinet as described by the client.
///
/// `cabin_type` stays a raw string here so an unknown type can be reported
/// with the offending value instead of failing JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetRequest {
    pub cabin_type: String,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub thickness: i32,
    pub cabin_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawers: Option<Vec<DrawerConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_oven_drawer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseboard_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plinth_drawer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_diameter: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabinet_name: Option<String>,
    /// Colour configuration chosen in the client; carried but not used for cutting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<serde_json::Value>,
}

impl CabinetRequest {
    /// Create a request with the mandatory fields and one cabinet instance.
    pub fn new(
        cabin_type: impl Into<String>,
        width: i32,
        height: i32,
        depth: i32,
        thickness: i32,
    ) -> Self {
        Self {
            cabin_type: cabin_type.into(),
            width,
            height,
            depth,
            thickness,
            cabin_count: 1,
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.cabin_count = count;
        self
    }

    pub fn with_doors(mut self, door_count: i32) -> Self {
        self.door_count = Some(door_count);
        self
    }

    pub fn with_drawers(mut self, drawers: Vec<DrawerConfig>) -> Self {
        self.drawers = Some(drawers);
        self
    }

    pub fn with_oven_drawer(mut self, has_drawer: bool) -> Self {
        self.has_oven_drawer = Some(has_drawer);
        self
    }

    pub fn with_baseboard(mut self, height: i32) -> Self {
        self.baseboard_height = Some(height);
        self
    }

    pub fn with_plinth_drawer(mut self, leg_diameter: Option<i32>) -> Self {
        self.plinth_drawer = Some(true);
        self.leg_diameter = leg_diameter;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.cabinet_name = Some(name.into());
        self
    }
}
