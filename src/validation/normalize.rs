//! Request normalisation: default resolution and validation before dispatch.
//!
//! Generators receive a [`Cabinet`] in which every optional field has been
//! resolved, so they never look at raw client input.

use crate::config::CutListConfig;
use crate::error::{CutListError, Result};
use crate::geometry::split_drawer_heights;
use crate::model::{
    Cabinet, CabinetRequest, CabinetType, DrawerConfig, Plinth, PlinthDrawer, WorkRequest,
};
use std::str::FromStr;

/// Normalised cabinets with the warnings raised on the way.
#[derive(Debug, Default)]
pub struct NormalizedRequest {
    /// One cabinet per requested cabinet, in request order.
    pub cabinets: Vec<Cabinet>,
    /// Ignored or inconsistent optional fields.
    pub warnings: Vec<String>,
}

/// Normalise every cabinet of a work request.
///
/// Stops at the first invalid cabinet; nothing is returned for the others.
pub fn normalize_request(request: &WorkRequest, config: &CutListConfig) -> Result<NormalizedRequest> {
    let mut result = NormalizedRequest::default();

    for (index, cabinet) in request.cabins.iter().enumerate() {
        let cabinet = normalize_cabinet(index, cabinet, config, &mut result.warnings)?;
        result.cabinets.push(cabinet);
    }

    Ok(result)
}

/// Normalise a single cabinet request at position `index`.
pub fn normalize_cabinet(
    index: usize,
    request: &CabinetRequest,
    config: &CutListConfig,
    warnings: &mut Vec<String>,
) -> Result<Cabinet> {
    let cabinet_type = CabinetType::from_str(request.cabin_type.trim()).map_err(|_| {
        CutListError::UnsupportedCabinetType {
            index,
            cabinet_type: request.cabin_type.clone(),
        }
    })?;

    for (field, value) in [
        ("width", request.width),
        ("height", request.height),
        ("depth", request.depth),
    ] {
        check_range(index, field, value, config.max_dimension)?;
    }
    check_range(index, "thickness", request.thickness, config.max_thickness)?;

    if request.cabin_count < 1 || request.cabin_count as u32 > config.max_cabinet_count {
        return Err(CutListError::malformed(
            index,
            format!(
                "cabinCount must be between 1 and {}, got {}",
                config.max_cabinet_count, request.cabin_count
            ),
        ));
    }

    let mut cabinet = Cabinet::new(
        cabinet_type,
        request.width,
        request.height,
        request.depth,
        request.thickness,
    );
    cabinet.index = index;
    cabinet.count = request.cabin_count as u32;
    if let Some(name) = request.cabinet_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            cabinet.name = name.to_string();
        }
    }

    cabinet.door_count = resolve_door_count(index, cabinet_type, request, config, warnings)?;
    cabinet.drawers = resolve_drawers(index, cabinet_type, request, config, warnings)?;

    let oven_drawer = request.has_oven_drawer.unwrap_or(false);
    if cabinet_type == CabinetType::Oven {
        cabinet.oven_drawer = oven_drawer;
    } else if oven_drawer {
        warnings.push(format!(
            "Cabinet {}: hasOvenDrawer ignored for {}",
            index, cabinet_type
        ));
    }

    cabinet.plinth = resolve_plinth(index, request, config, warnings)?;

    Ok(cabinet)
}

fn resolve_door_count(
    index: usize,
    cabinet_type: CabinetType,
    request: &CabinetRequest,
    config: &CutListConfig,
    warnings: &mut Vec<String>,
) -> Result<u32> {
    match cabinet_type {
        CabinetType::Doors => {
            let door_count = request
                .door_count
                .unwrap_or(config.default_door_count as i32);
            if door_count < 1 {
                return Err(CutListError::malformed(
                    index,
                    format!("doorCount must be at least 1, got {}", door_count),
                ));
            }
            // Every leaf keeps at least 1 mm after its clearance.
            if door_count > request.width / (config.front_clearance.max(0) + 1) {
                return Err(CutListError::geometry(index, "doorCount", door_count));
            }
            Ok(door_count as u32)
        }
        CabinetType::OneDoor => Ok(1),
        CabinetType::TwoDoors => Ok(2),
        _ => {
            if request.door_count.is_some() {
                warnings.push(format!(
                    "Cabinet {}: doorCount ignored for {}",
                    index, cabinet_type
                ));
            }
            Ok(0)
        }
    }
}

fn resolve_drawers(
    index: usize,
    cabinet_type: CabinetType,
    request: &CabinetRequest,
    config: &CutListConfig,
    warnings: &mut Vec<String>,
) -> Result<Vec<DrawerConfig>> {
    let requested = request.drawers.clone().unwrap_or_default();

    for (i, drawer) in requested.iter().enumerate() {
        check_range(
            index,
            &format!("drawers[{}].height", i),
            drawer.height,
            config.max_dimension,
        )?;
        check_range(
            index,
            &format!("drawers[{}].depth", i),
            drawer.depth,
            config.max_dimension,
        )?;
    }

    match cabinet_type {
        CabinetType::Drawers => {
            if requested.is_empty() {
                return Err(CutListError::malformed(
                    index,
                    "DRAWERS cabinet requires a drawer configuration",
                ));
            }
            Ok(requested)
        }
        CabinetType::OneDrawer | CabinetType::ThreeDrawers => {
            let expected = cabinet_type.fixed_drawer_count().unwrap_or(1);
            if requested.is_empty() {
                let depth = config.default_drawer_depth(request.depth);
                return Ok(split_drawer_heights(request.height, expected, depth));
            }
            if requested.len() != expected {
                return Err(CutListError::malformed(
                    index,
                    format!(
                        "{} cabinet expects {} drawer(s), got {}",
                        cabinet_type,
                        expected,
                        requested.len()
                    ),
                ));
            }
            Ok(requested)
        }
        CabinetType::Oven => {
            if request.has_oven_drawer.unwrap_or(false) {
                return Ok(requested);
            }
            if !requested.is_empty() {
                warnings.push(format!(
                    "Cabinet {}: drawers ignored for OVEN without hasOvenDrawer",
                    index
                ));
            }
            Ok(Vec::new())
        }
        _ => {
            if !requested.is_empty() {
                warnings.push(format!(
                    "Cabinet {}: drawers ignored for {}",
                    index, cabinet_type
                ));
            }
            Ok(Vec::new())
        }
    }
}

fn resolve_plinth(
    index: usize,
    request: &CabinetRequest,
    config: &CutListConfig,
    warnings: &mut Vec<String>,
) -> Result<Option<Plinth>> {
    let height = request.baseboard_height.unwrap_or(0);
    let wants_drawer = request.plinth_drawer.unwrap_or(false);

    if height > config.max_dimension {
        return Err(CutListError::geometry(index, "baseboardHeight", height));
    }
    if height <= 0 {
        if wants_drawer {
            warnings.push(format!(
                "Cabinet {}: plinthDrawer ignored without a baseboard height",
                index
            ));
        }
        return Ok(None);
    }

    let drawer = if wants_drawer {
        let leg_diameter = request
            .leg_diameter
            .unwrap_or(config.plinth.default_leg_diameter);
        check_range(index, "legDiameter", leg_diameter, config.max_dimension)?;
        Some(PlinthDrawer { leg_diameter })
    } else {
        None
    };

    Ok(Some(Plinth { height, drawer }))
}

/// Accept `value` in `1..=max`, naming `field` otherwise.
fn check_range(index: usize, field: &str, value: i32, max: i32) -> Result<()> {
    if value <= 0 || value > max {
        return Err(CutListError::geometry(index, field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn normalize(request: &CabinetRequest) -> Result<Cabinet> {
        normalize_cabinet(0, request, &CutListConfig::default(), &mut Vec::new())
    }

    fn normalize_with_warnings(request: &CabinetRequest) -> (Cabinet, Vec<String>) {
        let mut warnings = Vec::new();
        let cabinet =
            normalize_cabinet(0, request, &CutListConfig::default(), &mut warnings).unwrap();
        (cabinet, warnings)
    }

    // ==================== type and dimension tests ====================

    #[test]
    fn test_minimal_request() {
        let cabinet = normalize(&CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18)).unwrap();
        assert_eq!(cabinet, Cabinet::new(CabinetType::OneDoor, 600, 720, 560, 18));
    }

    #[test]
    fn test_unknown_type() {
        let err = normalize(&CabinetRequest::new("CORNER", 600, 720, 560, 18)).unwrap_err();
        match err {
            CutListError::UnsupportedCabinetType { cabinet_type, .. } => {
                assert_eq!(cabinet_type, "CORNER")
            }
            other => panic!("Expected UnsupportedCabinetType, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_dimensions() {
        let err = normalize(&CabinetRequest::new("ONE_DOOR", 600, 720, 0, 18)).unwrap_err();
        match err {
            CutListError::InvalidCabinetGeometry { field, value, .. } => {
                assert_eq!(field, "depth");
                assert_eq!(value, 0);
            }
            other => panic!("Expected InvalidCabinetGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_count_is_malformed() {
        let request = CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18).with_count(0);
        assert!(matches!(
            normalize(&request).unwrap_err(),
            CutListError::MalformedRequest { .. }
        ));
    }

    #[test]
    fn test_cabinet_name() {
        let named = CabinetRequest::new("OVEN", 600, 720, 560, 18).with_name("  Oven tower ");
        assert_eq!(normalize(&named).unwrap().name, "Oven tower");

        let blank = CabinetRequest::new("OVEN", 600, 720, 560, 18).with_name("   ");
        assert_eq!(normalize(&blank).unwrap().name, "OVEN");
    }

    // ==================== door tests ====================

    #[test]
    fn test_door_count_defaults_to_one() {
        let cabinet = normalize(&CabinetRequest::new("DOORS", 600, 720, 560, 18)).unwrap();
        assert_eq!(cabinet.door_count, 1);

        let cabinet =
            normalize(&CabinetRequest::new("DOORS", 900, 720, 560, 18).with_doors(3)).unwrap();
        assert_eq!(cabinet.door_count, 3);
    }

    #[test]
    fn test_zero_doors_is_malformed() {
        let request = CabinetRequest::new("DOORS", 600, 720, 560, 18).with_doors(0);
        assert!(matches!(
            normalize(&request).unwrap_err(),
            CutListError::MalformedRequest { .. }
        ));
    }

    #[test]
    fn test_door_count_ignored_for_drawers() {
        let request = CabinetRequest::new("ONE_DRAWER", 600, 720, 560, 18).with_doors(2);
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert_eq!(cabinet.door_count, 0);
        assert_eq!(warnings.len(), 1);
    }

    // ==================== drawer tests ====================

    #[test]
    fn test_drawer_bank_requires_drawers() {
        let err = normalize(&CabinetRequest::new("DRAWERS", 600, 720, 560, 18)).unwrap_err();
        assert!(matches!(err, CutListError::MalformedRequest { index: 0, .. }));

        let empty = CabinetRequest::new("DRAWERS", 600, 720, 560, 18).with_drawers(Vec::new());
        assert!(normalize(&empty).is_err());
    }

    #[test]
    fn test_fixed_drawer_types_synthesize_drawers() {
        let cabinet = normalize(&CabinetRequest::new("THREE_DRAWERS", 600, 720, 560, 18)).unwrap();
        assert_eq!(cabinet.drawers, vec![DrawerConfig::new(240, 476); 3]);

        let cabinet = normalize(&CabinetRequest::new("ONE_DRAWER", 600, 720, 560, 18)).unwrap();
        assert_eq!(cabinet.drawers, vec![DrawerConfig::new(720, 476)]);
    }

    #[test]
    fn test_fixed_drawer_types_check_drawer_count() {
        let request = CabinetRequest::new("THREE_DRAWERS", 600, 720, 560, 18)
            .with_drawers(vec![DrawerConfig::new(360, 450); 2]);
        assert!(matches!(
            normalize(&request).unwrap_err(),
            CutListError::MalformedRequest { .. }
        ));
    }

    #[test]
    fn test_invalid_drawer_dimension() {
        let request = CabinetRequest::new("DRAWERS", 600, 720, 560, 18)
            .with_drawers(vec![DrawerConfig::new(360, 450), DrawerConfig::new(360, -1)]);
        match normalize(&request).unwrap_err() {
            CutListError::InvalidCabinetGeometry { field, .. } => {
                assert_eq!(field, "drawers[1].depth")
            }
            other => panic!("Expected InvalidCabinetGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_drawers_ignored_for_doors() {
        let request = CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18)
            .with_drawers(vec![DrawerConfig::new(360, 450)]);
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert!(cabinet.drawers.is_empty());
        assert!(warnings[0].contains("drawers ignored"));
    }

    // ==================== oven tests ====================

    #[test]
    fn test_oven_drawer_flag() {
        let request = CabinetRequest::new("OVEN", 600, 720, 560, 18).with_oven_drawer(true);
        assert!(normalize(&request).unwrap().oven_drawer);

        let request = CabinetRequest::new("NO_DOORS", 600, 720, 560, 18).with_oven_drawer(true);
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert!(!cabinet.oven_drawer);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_oven_drawers_ignored_without_drawer_flag() {
        let request = CabinetRequest::new("OVEN", 600, 720, 560, 18)
            .with_drawers(vec![DrawerConfig::new(150, 400)]);
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert!(cabinet.drawers.is_empty());
        assert!(warnings[0].contains("hasOvenDrawer"));

        let request = request.with_oven_drawer(true);
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert_eq!(cabinet.drawers, vec![DrawerConfig::new(150, 400)]);
        assert!(warnings.is_empty());
    }

    // ==================== plinth tests ====================

    #[test]
    fn test_no_baseboard_means_no_plinth() {
        let cabinet = normalize(&CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18)).unwrap();
        assert_eq!(cabinet.plinth, None);

        let request = CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18).with_baseboard(-10);
        assert_eq!(normalize(&request).unwrap().plinth, None);
    }

    #[test]
    fn test_plinth_drawer_without_baseboard_warns() {
        let request =
            CabinetRequest::new("ONE_DOOR", 800, 720, 560, 18).with_plinth_drawer(Some(50));
        let (cabinet, warnings) = normalize_with_warnings(&request);
        assert_eq!(cabinet.plinth, None);
        assert!(warnings[0].contains("plinthDrawer"));
    }

    #[test]
    fn test_plinth_drawer_default_leg() {
        let request = CabinetRequest::new("ONE_DOOR", 800, 720, 560, 18)
            .with_baseboard(100)
            .with_plinth_drawer(None);
        assert_eq!(
            normalize(&request).unwrap().plinth,
            Some(Plinth {
                height: 100,
                drawer: Some(PlinthDrawer { leg_diameter: 60 }),
            })
        );
    }

    #[test]
    fn test_invalid_leg_diameter() {
        let request = CabinetRequest::new("ONE_DOOR", 800, 720, 560, 18)
            .with_baseboard(100)
            .with_plinth_drawer(Some(0));
        match normalize(&request).unwrap_err() {
            CutListError::InvalidCabinetGeometry { field, .. } => assert_eq!(field, "legDiameter"),
            other => panic!("Expected InvalidCabinetGeometry, got {:?}", other),
        }
    }

    // ==================== bounds tests ====================

    fn geometry_field(request: &CabinetRequest) -> String {
        match normalize(request).unwrap_err() {
            CutListError::InvalidCabinetGeometry { field, .. } => field,
            other => panic!("Expected InvalidCabinetGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let huge = 1_500_000_000;
        assert_eq!(
            geometry_field(&CabinetRequest::new("NO_DOORS", huge, 720, 560, 18)),
            "width"
        );
        assert_eq!(
            geometry_field(&CabinetRequest::new("NO_DOORS", 600, huge, 560, 18)),
            "height"
        );
        assert_eq!(
            geometry_field(&CabinetRequest::new("NO_DOORS", 600, 720, huge, 18)),
            "depth"
        );
        assert_eq!(
            geometry_field(&CabinetRequest::new("NO_DOORS", 600, 720, 560, huge)),
            "thickness"
        );
        assert_eq!(
            geometry_field(&CabinetRequest::new("NO_DOORS", 600, 720, 560, 101)),
            "thickness"
        );
    }

    #[test]
    fn test_oversized_plinth_is_rejected() {
        let request = CabinetRequest::new("NO_DOORS", 600, 720, 560, 18).with_baseboard(i32::MAX);
        assert_eq!(geometry_field(&request), "baseboardHeight");

        let request = CabinetRequest::new("NO_DOORS", 600, 720, 560, 18)
            .with_baseboard(100)
            .with_plinth_drawer(Some(1_500_000_000));
        assert_eq!(geometry_field(&request), "legDiameter");
    }

    #[test]
    fn test_oversized_drawer_is_rejected() {
        let request = CabinetRequest::new("DRAWERS", 600, 720, 560, 18)
            .with_drawers(vec![DrawerConfig::new(i32::MAX, 450)]);
        assert_eq!(geometry_field(&request), "drawers[0].height");
    }

    #[test]
    fn test_door_count_limited_by_width() {
        // 600 / (4 + 1) leaves of at least 1 mm
        let request = CabinetRequest::new("DOORS", 600, 720, 560, 18).with_doors(120);
        assert_eq!(normalize(&request).unwrap().door_count, 120);

        let request = CabinetRequest::new("DOORS", 600, 720, 560, 18).with_doors(121);
        assert_eq!(geometry_field(&request), "doorCount");

        let request = CabinetRequest::new("DOORS", 600, 720, 560, 18).with_doors(1_000_000_000);
        assert_eq!(geometry_field(&request), "doorCount");
    }

    #[test]
    fn test_cabinet_count_is_capped() {
        let config = CutListConfig::default();
        let request = CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18)
            .with_count(config.max_cabinet_count as i32);
        assert!(normalize(&request).is_ok());

        let request = CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18).with_count(i32::MAX);
        assert!(matches!(
            normalize(&request).unwrap_err(),
            CutListError::MalformedRequest { .. }
        ));
    }

    // ==================== normalize_request tests ====================

    #[test]
    fn test_normalize_request_indexes_cabinets() {
        let request = WorkRequest {
            cabins: vec![
                CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18),
                CabinetRequest::new("OVEN", 600, 720, 560, 18),
            ],
        };
        let normalized = normalize_request(&request, &CutListConfig::default()).unwrap();
        assert_eq!(normalized.cabinets.len(), 2);
        assert_eq!(normalized.cabinets[1].index, 1);
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_normalize_request_reports_failing_index() {
        let request = WorkRequest {
            cabins: vec![
                CabinetRequest::new("ONE_DOOR", 600, 720, 560, 18),
                CabinetRequest::new("SPICE_RACK", 150, 720, 560, 18),
            ],
        };
        let err = normalize_request(&request, &CutListConfig::default()).unwrap_err();
        assert_eq!(err.cabinet_index(), Some(1));
    }
}
