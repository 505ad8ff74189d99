use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct NearbyOptions {
	pub location: Option<String>,
	pub limit: Option<usize>,
}

#[derive(Deserialize, Debug)]
pub struct SearchOptions {
	pub query: Option<String>,
	pub municipality: Option<String>,
	pub page: Option<usize>,
	pub limit: Option<usize>,
}
