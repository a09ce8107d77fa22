//! Cut-list service: normalise, dispatch, multiply and aggregate.

use crate::config::CutListConfig;
use crate::error::{CutListError, Result};
use crate::generator::GeneratorRegistry;
use crate::geometry::{aggregate_items, multiply_items};
use crate::model::{Cabinet, CabinetGroup, WorkRequest, WorkResponse};
use crate::validation::normalize_request;
use tracing::{debug, info, warn};

/// Stateless cut-list engine.
///
/// Holds only immutable configuration, so one instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct CutListService {
    registry: GeneratorRegistry,
    config: CutListConfig,
}

impl Default for CutListService {
    fn default() -> Self {
        Self::new()
    }
}

impl CutListService {
    /// Service with the standard generators and default constants.
    pub fn new() -> Self {
        Self::with_config(CutListConfig::default())
    }

    /// Service with the standard generators and custom constants.
    pub fn with_config(config: CutListConfig) -> Self {
        Self {
            registry: GeneratorRegistry::standard(),
            config,
        }
    }

    /// Service with a custom registry.
    pub fn with_registry(registry: GeneratorRegistry, config: CutListConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &CutListConfig {
        &self.config
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Compute the cut lists of every cabinet in `request`.
    ///
    /// The whole request fails on the first invalid cabinet; groups are
    /// returned in request order otherwise.
    pub fn generate(&self, request: &WorkRequest) -> Result<WorkResponse> {
        info!("Generating cut lists for {} cabinet(s)", request.cabins.len());

        let normalized = normalize_request(request, &self.config)?;
        for warning in &normalized.warnings {
            warn!("{}", warning);
        }

        let groups = normalized
            .cabinets
            .iter()
            .map(|cabinet| self.generate_group(cabinet))
            .collect::<Result<Vec<_>>>()?;

        let panels: u64 = groups.iter().map(CabinetGroup::panel_count).sum();
        info!("Generated {} group(s), {} panel(s)", groups.len(), panels);

        Ok(WorkResponse::success(groups))
    }

    /// Cut list of one normalised cabinet, multiplied by its count.
    pub fn generate_group(&self, cabinet: &Cabinet) -> Result<CabinetGroup> {
        let generator = self.registry.resolve(cabinet.index, cabinet.cabinet_type)?;
        let items = generator.generate(cabinet, &self.config)?;

        debug!(
            "Cabinet {} ({}): {} distinct item(s) per unit, count {}",
            cabinet.index,
            cabinet.cabinet_type,
            items.len(),
            cabinet.count
        );

        let items = multiply_items(items, cabinet.count).ok_or_else(|| {
            CutListError::malformed(
                cabinet.index,
                format!("cabinCount {} overflows the panel count", cabinet.count),
            )
        })?;

        Ok(CabinetGroup {
            cabinet_name: cabinet.name.clone(),
            cabinet_type: cabinet.cabinet_type,
            cabinet_count: cabinet.count,
            items: aggregate_items(items),
        })
    }
}
