//! cutlist-rs - Cut-list engine for modular kitchen cabinets.
//!
//! Turns a batch of cabinet descriptions (type, outer dimensions, board
//! thickness, optional drawers and plinth) into the aggregated list of panels
//! a workshop has to cut, grouped per requested cabinet.
//!
//! # Example
//!
//! ```no_run
//! use cutlist_rs::{generate_cut_list, CabinetRequest, WorkRequest};
//!
//! let request = WorkRequest {
//!     cabins: vec![CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18)],
//! };
//! let response = generate_cut_list(&request).unwrap();
//! for item in response.items() {
//!     println!("{} {}", item.name, item.dimensions_string());
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod io;
pub mod model;
pub mod report;
pub mod service;
pub mod validation;

// Re-exports for convenience
pub use config::{CutListConfig, PlinthConfig};
pub use error::{CutListError, ErrorCode, Result};
pub use generator::{Generator, GeneratorRegistry};
pub use io::{read_work_request, write_work_response};
pub use model::{
    CabinetGroup, CabinetRequest, CabinetType, DrawerConfig, Item, ItemType, MaterialType,
    WorkRequest, WorkResponse,
};
pub use report::{render_cut_list, render_summary, summarize_materials, MaterialSummary};
pub use service::CutListService;
pub use validation::{normalize_request, NormalizedRequest};

/// Compute the cut lists of a work request with the default configuration.
pub fn generate_cut_list(request: &WorkRequest) -> Result<WorkResponse> {
    CutListService::new().generate(request)
}

/// Read a work request file and compute its cut lists.
///
/// This is the high-level file pipeline:
/// 1. Read and decode the request JSON
/// 2. Normalise and validate every cabinet
/// 3. Generate, multiply and aggregate the items
///
/// # Arguments
///
/// * `input_path` - Path to the work request JSON
/// * `config` - Construction constants
pub fn generate_cut_list_file(
    input_path: &std::path::Path,
    config: &CutListConfig,
) -> Result<WorkResponse> {
    let request = read_work_request(input_path)?;
    CutListService::with_config(config.clone()).generate(&request)
}
