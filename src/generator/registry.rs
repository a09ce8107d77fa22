//! Generator registry and dispatch by cabinet type.

use super::{handler, GenerateFn};
use crate::config::CutListConfig;
use crate::error::{CutListError, Result};
use crate::model::{Cabinet, CabinetType, Item};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A generator bound to the cabinet type it handles.
#[derive(Clone, Copy)]
pub struct Generator {
    cabinet_type: CabinetType,
    generate: GenerateFn,
}

impl Generator {
    pub fn new(cabinet_type: CabinetType, generate: GenerateFn) -> Self {
        Self {
            cabinet_type,
            generate,
        }
    }

    /// Cabinet type handled by this generator.
    pub fn cabinet_type(&self) -> CabinetType {
        self.cabinet_type
    }

    /// Check if this generator handles `cabinet_type`.
    pub fn supports(&self, cabinet_type: CabinetType) -> bool {
        self.cabinet_type == cabinet_type
    }

    /// Aggregated items of one cabinet instance.
    pub fn generate(&self, cabinet: &Cabinet, config: &CutListConfig) -> Result<Vec<Item>> {
        (self.generate)(cabinet, config)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("cabinet_type", &self.cabinet_type)
            .finish()
    }
}

/// Fixed mapping from cabinet type to generator.
///
/// Keyed by type, so a type can never be claimed by two generators.
#[derive(Debug, Clone, Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<CabinetType, Generator>,
}

impl GeneratorRegistry {
    /// Create a registry with no generators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry covering every cabinet type.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for cabinet_type in CabinetType::iter() {
            registry.register(Generator::new(cabinet_type, handler(cabinet_type)));
        }
        registry
    }

    /// Register a generator, returning the one it replaces.
    pub fn register(&mut self, generator: Generator) -> Option<Generator> {
        self.generators.insert(generator.cabinet_type(), generator)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Iterate over registered generators in type order.
    pub fn generators(&self) -> impl Iterator<Item = &Generator> {
        self.generators.values()
    }

    /// Check if some generator handles `cabinet_type`.
    pub fn supports(&self, cabinet_type: CabinetType) -> bool {
        self.generators.contains_key(&cabinet_type)
    }

    /// Generator for a cabinet type; `index` locates the cabinet in the request.
    pub fn resolve(&self, index: usize, cabinet_type: CabinetType) -> Result<&Generator> {
        self.generators
            .get(&cabinet_type)
            .ok_or_else(|| CutListError::UnsupportedCabinetType {
                index,
                cabinet_type: cabinet_type.to_string(),
            })
    }

    /// Parse a wire type name and resolve its generator.
    pub fn resolve_name(&self, index: usize, name: &str) -> Result<&Generator> {
        let cabinet_type =
            CabinetType::from_str(name.trim()).map_err(|_| CutListError::UnsupportedCabinetType {
                index,
                cabinet_type: name.to_string(),
            })?;
        self.resolve(index, cabinet_type)
    }
}
