use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};

use crate::{
	api::CustomError,
	models::{Establishment, ReferenceData, ReferenceDataFile},
};

impl ReferenceData {
	pub fn load(path: impl AsRef<Path>) -> Result<Self, CustomError> {
		let path = path.as_ref();
		let raw = std::fs::read_to_string(path)?;
		let file: ReferenceDataFile = serde_json::from_str(&raw)?;
		let data = Self::new(file.establishments, file.destinations)?;

		info!(
			"Loaded {} establishments and {} destinations from {}",
			data.establishments.len(),
			data.destinations.len(),
			path.display()
		);

		Ok(data)
	}

	pub fn new(
		establishments: Vec<Establishment>,
		destinations: HashMap<String, Vec<String>>,
	) -> Result<Self, CustomError> {
		let mut index = HashMap::with_capacity(establishments.len());
		for (position, establishment) in establishments.iter().enumerate() {
			if index.insert(establishment.id.clone(), position).is_some() {
				return Err(CustomError::InvalidReferenceData(format!(
					"duplicate establishment id '{}'",
					establishment.id
				)));
			}
		}

		let mut destinations: Vec<(String, Vec<String>)> = destinations
			.into_iter()
			.map(|(phrase, ids)| (phrase.trim().to_lowercase(), ids))
			.filter(|(phrase, _)| !phrase.is_empty())
			.collect();
		// longest phrase first so "temple of leah" is tried before "temple"
		destinations.sort_by(|(a, _), (b, _)| {
			b.chars()
				.count()
				.cmp(&a.chars().count())
				.then_with(|| a.cmp(b))
		});
		if let Some(pair) = destinations.windows(2).find(|pair| pair[0].0 == pair[1].0) {
			return Err(CustomError::InvalidReferenceData(format!(
				"duplicate destination phrase '{}'",
				pair[0].0
			)));
		}

		for (phrase, ids) in &destinations {
			for id in ids.iter().filter(|id| !index.contains_key(*id)) {
				warn!("Destination '{}' references unknown establishment '{}'", phrase, id);
			}
		}

		Ok(Self {
			establishments,
			destinations,
			index,
		})
	}

	pub fn find_establishment(&self, id: &str) -> Option<&Establishment> {
		self.index
			.get(id)
			.and_then(|position| self.establishments.get(*position))
	}
}
