use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuthUser {
	pub id: String,
	pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
	pub sub: String,
	#[serde(default)]
	pub email: Option<String>,
	pub iat: usize,
	pub exp: usize,
}
