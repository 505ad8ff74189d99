use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub cuisine: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub municipality: String,
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub rating: f64,
	#[serde(default)]
	pub price_range: String,
	#[serde(default)]
	pub coordinates: Option<Coordinates>,
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub open_hours: String,
	#[serde(default)]
	pub specialties: Vec<String>,
}

/// Card shown in the horizontal "nearby" list and in search results.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FilteredEstablishment {
	pub id: String,
	pub name: String,
	pub cuisine: String,
	pub location: String,
	pub image: String,
	pub rating: f64,
	pub price_range: String,
}

/// On-disk shape of the reference data file.
#[derive(Debug, Deserialize)]
pub struct ReferenceDataFile {
	pub establishments: Vec<Establishment>,
	#[serde(default)]
	pub destinations: HashMap<String, Vec<String>>,
}

/// Immutable establishments plus destination phrases, sorted longest phrase first.
#[derive(Debug, Default)]
pub struct ReferenceData {
	pub establishments: Vec<Establishment>,
	pub destinations: Vec<(String, Vec<String>)>,
	pub index: HashMap<String, usize>,
}
