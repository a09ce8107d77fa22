//! Data model types for cut-list generation.

mod cabinet;
mod item;
mod kinds;
mod request;
mod response;

pub use cabinet::{Cabinet, Plinth, PlinthDrawer};
pub use item::{Item, ItemKey};
pub use kinds::{CabinetType, ItemType, MaterialType};
pub use request::{CabinetRequest, DrawerConfig, WorkRequest};
pub use response::{CabinetGroup, ResponseStatus, WorkResponse};
