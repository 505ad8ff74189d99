use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Any attraction, beach or restaurant object the client wants to keep.
/// Everything except `id` is carried through untouched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Place {
	pub id: String,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Favorite {
	pub id: String,
	#[serde(rename = "dateAdded")]
	pub date_added: String,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}
