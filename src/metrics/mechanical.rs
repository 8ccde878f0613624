// src/metrics/mechanical.rs

use std::collections::HashMap;

use serde::Serialize;

use crate::models::MechanicalItem;
use crate::utils::numeric::{parse_quantity, parse_weight};

/// Accumulated weight of one material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialWeight {
	pub material: String,
	pub weight: f64,
}

/// One slice of the material distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialShare {
	pub material: String,
	pub weight: f64,
	pub percentage: f64,
}

/// Weight metrics of a mechanical table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MechanicalSummary {
	pub total_weight: f64,
	/// In order of first appearance. Callers should not rely on that order.
	pub by_material: Vec<MaterialWeight>,
}

impl MechanicalSummary {
	pub fn percentage_of(&self, weight: f64) -> f64 {
		percentage(weight, self.total_weight)
	}

	pub fn shares(&self) -> Vec<MaterialShare> {
		self.by_material
			.iter()
			.map(|entry| MaterialShare {
				material: entry.material.clone(),
				weight: entry.weight,
				percentage: self.percentage_of(entry.weight),
			})
			.collect()
	}

	pub fn material_weight(&self, material: &str) -> Option<f64> {
		self.by_material
			.iter()
			.find(|entry| entry.material == material)
			.map(|entry| entry.weight)
	}
}

/// Sums `qty * weight` over `items`, in total and per material.
///
/// Rows with a blank material still count toward the total but are left out of
/// the per-material breakdown.
pub fn aggregate<'a>(items: impl IntoIterator<Item = &'a MechanicalItem>) -> MechanicalSummary {
	let mut summary = MechanicalSummary::default();
	let mut slots: HashMap<&str, usize> = HashMap::new();

	for item in items {
		let line_weight = parse_quantity(&item.qty) * parse_weight(&item.weight);
		summary.total_weight += line_weight;

		if item.material.trim().is_empty() {
			continue;
		}

		match slots.get(item.material.as_str()) {
			Some(&idx) => summary.by_material[idx].weight += line_weight,
			None => {
				slots.insert(item.material.as_str(), summary.by_material.len());
				summary.by_material.push(MaterialWeight {
					material: item.material.clone(),
					weight: line_weight,
				});
			}
		}
	}

	summary
}

/// `weight` as a percentage of `total`; 0 whenever the ratio is undefined.
pub fn percentage(weight: f64, total: f64) -> f64 {
	if total == 0.0 {
		return 0.0;
	}
	let value = weight / total * 100.0;
	if value.is_finite() {
		value
	} else {
		0.0
	}
}
