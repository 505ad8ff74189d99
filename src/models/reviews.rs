use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
	pub id: String,
	pub place_id: String,
	#[serde(default)]
	pub place_name: String,
	#[serde(default)]
	pub place_location: String,
	#[serde(default)]
	pub place_image: Option<String>,
	pub rating: u8,
	#[serde(default)]
	pub comment: String,
	pub date: String,
	#[serde(default)]
	pub likes: u32,
	#[serde(default)]
	pub helpful: u32,
	pub user_id: String,
	#[serde(default)]
	pub user_email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedPlace {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddReviewSchema {
	pub place: ReviewedPlace,
	pub rating: u8,
	#[serde(default)]
	pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewSchema {
	pub rating: u8,
	#[serde(default)]
	pub comment: String,
}
