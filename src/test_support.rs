use std::collections::HashMap;

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::{
	api::{MemoryStore, Storage},
	config::Config,
	models::{Establishment, ReferenceData, TokenClaims},
	AppState,
};

pub const TEST_SECRET: &str = "test-secret";

pub fn establishment(id: &str, location: &str, municipality: &str, rating: f64) -> Establishment {
	Establishment {
		id: id.to_string(),
		name: format!("Restaurant {}", id),
		description: String::new(),
		cuisine: "Filipino".to_string(),
		location: location.to_string(),
		municipality: municipality.to_string(),
		image: format!("{}.jpg", id),
		rating,
		price_range: "₱₱".to_string(),
		coordinates: None,
		address: String::new(),
		open_hours: "10:00 AM - 10:00 PM".to_string(),
		specialties: vec!["lechon".to_string()],
	}
}

pub fn sample_reference() -> ReferenceData {
	ReferenceData::new(
		vec![
			establishment("r1", "Colon Street", "Cebu City", 4.5),
			establishment("r2", "Busay", "Cebu City", 4.7),
			establishment("r3", "Panagsama Beach", "Moalboal", 4.3),
			establishment("r4", "Tan-awan", "Oslob", 4.6),
		],
		HashMap::from([
			("basilica".to_string(), vec!["r1".to_string()]),
			(
				"temple of leah".to_string(),
				vec!["r2".to_string(), "r1".to_string()],
			),
		]),
	)
	.expect("sample reference data")
}

pub fn test_config() -> Config {
	Config {
		host: "127.0.0.1".to_string(),
		port: 0,
		storage_dir: Storage::IN_MEMORY.to_string(),
		reference_data_path: String::new(),
		jwt_secret: TEST_SECRET.to_string(),
		nearby_limit: 5,
	}
}

pub fn test_state() -> AppState {
	AppState::new(
		sample_reference(),
		Storage::Memory(MemoryStore::new()),
		test_config(),
	)
}

pub fn token_for(user_id: &str, email: &str) -> String {
	let now = chrono::Utc::now().timestamp() as usize;
	let claims = TokenClaims {
		sub: user_id.to_string(),
		email: Some(email.to_string()),
		iat: now,
		exp: now + 3600,
	};

	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(TEST_SECRET.as_ref()),
	)
	.expect("encode test token")
}

pub fn bearer(user_id: &str) -> (String, String) {
	(
		"Authorization".to_string(),
		format!("Bearer {}", token_for(user_id, &format!("{}@example.ph", user_id))),
	)
}
