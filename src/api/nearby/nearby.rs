use log::debug;

use crate::models::{Establishment, ReferenceData};

const CITY_WIDE_MUNICIPALITY: &str = "cebu city";

/// Restaurants worth showing next to an attraction, most specific match first:
/// curated destination phrase, keyword in location/municipality, municipality
/// alone, anything in Cebu City, then the best rated overall.
pub fn get_nearby_restaurants<'a>(
	data: &'a ReferenceData,
	location_text: &str,
	limit: usize,
) -> Vec<&'a Establishment> {
	if limit == 0 {
		return Vec::new();
	}

	let text = location_text.to_lowercase();
	let tokens = tokenize(&text);

	let by_destination = by_destination(data, &text);
	if !by_destination.is_empty() {
		debug!("nearby '{}': destination match", location_text);
		return truncate(by_destination, limit);
	}

	let by_keyword = matching(data, &tokens, |e| {
		format!("{} {}", e.location, e.municipality).to_lowercase()
	});
	if !by_keyword.is_empty() {
		debug!("nearby '{}': keyword match", location_text);
		return truncate(by_keyword, limit);
	}

	let by_municipality = matching(data, &tokens, |e| e.municipality.to_lowercase());
	if !by_municipality.is_empty() {
		debug!("nearby '{}': municipality match", location_text);
		return truncate(by_municipality, limit);
	}

	let city_wide = restaurants_by_municipality(data, CITY_WIDE_MUNICIPALITY);
	if !city_wide.is_empty() {
		debug!("nearby '{}': city-wide fallback", location_text);
		return truncate(city_wide, limit);
	}

	debug!("nearby '{}': featured fallback", location_text);
	featured_restaurants(data, limit)
}

/// Highest rated first; equal ratings keep reference order.
pub fn featured_restaurants(data: &ReferenceData, limit: usize) -> Vec<&Establishment> {
	let mut ranked: Vec<&Establishment> = data.establishments.iter().collect();
	ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
	truncate(ranked, limit)
}

pub fn restaurants_by_municipality<'a>(
	data: &'a ReferenceData,
	municipality: &str,
) -> Vec<&'a Establishment> {
	let needle = municipality.trim().to_lowercase();
	data.establishments
		.iter()
		.filter(|e| e.municipality.to_lowercase().contains(&needle))
		.collect()
}

/// Case-insensitive match over name, cuisine, location, municipality and
/// specialties. A blank query returns everything.
pub fn search_restaurants<'a>(data: &'a ReferenceData, query: &str) -> Vec<&'a Establishment> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return data.establishments.iter().collect();
	}

	data.establishments
		.iter()
		.filter(|e| {
			[&e.name, &e.cuisine, &e.location, &e.municipality]
				.into_iter()
				.chain(e.specialties.iter())
				.any(|field| field.to_lowercase().contains(&needle))
		})
		.collect()
}

fn by_destination<'a>(data: &'a ReferenceData, text: &str) -> Vec<&'a Establishment> {
	let Some((_, ids)) = data
		.destinations
		.iter()
		.find(|(phrase, _)| text.contains(phrase.as_str()))
	else {
		return Vec::new();
	};

	ids.iter()
		.filter_map(|id| data.find_establishment(id))
		.collect()
}

fn matching<'a, F>(data: &'a ReferenceData, tokens: &[String], haystack: F) -> Vec<&'a Establishment>
where
	F: Fn(&Establishment) -> String,
{
	if tokens.is_empty() {
		return Vec::new();
	}

	data.establishments
		.iter()
		.filter(|e| {
			let text = haystack(e);
			tokens.iter().any(|token| text.contains(token.as_str()))
		})
		.collect()
}

fn tokenize(text: &str) -> Vec<String> {
	text.split(|c: char| c.is_whitespace() || c == ',')
		.filter(|token| token.chars().count() > 2)
		.map(str::to_string)
		.collect()
}

fn truncate(mut list: Vec<&Establishment>, limit: usize) -> Vec<&Establishment> {
	list.truncate(limit);
	list
}
