use log::warn;

#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub storage_dir: String,
	pub reference_data_path: String,
	pub jwt_secret: String,
	pub nearby_limit: usize,
}

impl Config {
	pub fn init() -> Config {
		let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
		let port = parse_or("PORT", 8000);
		let storage_dir = std::env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".to_string());
		let reference_data_path = std::env::var("REFERENCE_DATA_PATH")
			.unwrap_or_else(|_| "data/cebu_restaurants.json".to_string());
		let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
		let nearby_limit = parse_or("NEARBY_LIMIT", 5);

		Config {
			host,
			port,
			storage_dir,
			reference_data_path,
			jwt_secret,
			nearby_limit,
		}
	}
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
	match std::env::var(key) {
		Ok(raw) => raw.parse().unwrap_or_else(|_| {
			warn!("Invalid {} value '{}', using default", key, raw);
			default
		}),
		Err(_) => default,
	}
}
