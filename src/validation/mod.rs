//! Request validation and default resolution.

mod normalize;

pub use normalize::{normalize_cabinet, normalize_request, NormalizedRequest};
