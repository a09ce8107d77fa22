//! Terminal reports: cut-list tables and material totals.

use crate::model::{MaterialType, WorkResponse};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Panel totals for one stock sheet kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub material: MaterialType,
    pub thickness: i32,
    pub panel_count: u64,
    pub area_mm2: i64,
}

impl MaterialSummary {
    pub fn area_m2(&self) -> f64 {
        self.area_mm2 as f64 / 1_000_000.0
    }
}

/// Totals per `(material, thickness)`, ordered by material then thickness.
pub fn summarize_materials(response: &WorkResponse) -> Vec<MaterialSummary> {
    let mut totals: BTreeMap<(MaterialType, i32), (u64, i64)> = BTreeMap::new();

    for item in response.items() {
        let entry = totals.entry((item.material, item.thickness)).or_default();
        entry.0 += u64::from(item.count);
        entry.1 += item.area_mm2() * i64::from(item.count);
    }

    totals
        .into_iter()
        .map(|((material, thickness), (panel_count, area_mm2))| MaterialSummary {
            material,
            thickness,
            panel_count,
            area_mm2,
        })
        .collect()
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            header
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

/// One table per cabinet group.
pub fn render_cut_list(response: &WorkResponse) -> String {
    let mut out = String::new();

    for group in &response.cabinet_groups {
        out.push_str(&format!(
            "{} ({}) x{}\n",
            group.cabinet_name, group.cabinet_type, group.cabinet_count
        ));

        let mut table = new_table(&["Part", "W x H x T", "Qty", "Material", "Type"]);
        for item in &group.items {
            table.add_row(vec![
                Cell::new(&item.name),
                Cell::new(item.dimensions_string()),
                Cell::new(item.count),
                Cell::new(item.material),
                Cell::new(item.item_type),
            ]);
        }
        if let Some(col) = table.column_mut(2) {
            col.set_cell_alignment(CellAlignment::Right);
        }

        out.push_str(&table.to_string());
        out.push_str("\n\n");
    }

    out
}

/// Material totals table.
pub fn render_summary(summary: &[MaterialSummary]) -> String {
    let mut table = new_table(&["Material", "Thickness", "Panels", "Area (m²)"]);

    for row in summary {
        table.add_row(vec![
            Cell::new(row.material),
            Cell::new(row.thickness),
            Cell::new(row.panel_count),
            Cell::new(format!("{:.3}", row.area_m2())),
        ]);
    }
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}
