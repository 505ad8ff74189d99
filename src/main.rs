mod api;
mod config;
mod controllers;
mod jwt_auth;
mod models;
mod utils;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use api::{
	AuthProvider, FavoritesStore, ReviewsStore, Storage, StoreContext, UserScopedStore,
};
use config::Config;
use dotenv::dotenv;
use log::{error, info};
use models::ReferenceData;

use core::fmt;
use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	status: String,
	message: String,
}

impl fmt::Display for ErrorResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = serde_json::to_string(&self).map_err(|_| fmt::Error)?;
		write!(f, "{}", json)
	}
}

pub struct AppState {
	reference: ReferenceData,
	stores: StoreContext<Storage>,
	env: Config,
}

impl AppState {
	pub fn new(reference: ReferenceData, storage: Storage, env: Config) -> Self {
		AppState {
			reference,
			stores: StoreContext::new(Arc::new(storage)),
			env,
		}
	}

	pub fn favorites<A: AuthProvider>(&self, auth: A) -> FavoritesStore<Storage, A> {
		UserScopedStore::favorites(self.stores.clone(), auth)
	}

	pub fn reviews<A: AuthProvider>(&self, auth: A) -> ReviewsStore<Storage, A> {
		UserScopedStore::reviews(self.stores.clone(), auth)
	}
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "actix_web=info,cebu_guide_core=info");
	}
	dotenv().ok();
	env_logger::init();

	let config = Config::init();

	let reference = match ReferenceData::load(&config.reference_data_path) {
		Ok(reference) => reference,
		Err(err) => {
			error!(
				"Failed to load reference data from {}: {}",
				config.reference_data_path, err
			);
			std::process::exit(1);
		}
	};

	let storage = match Storage::open(&config.storage_dir).await {
		Ok(storage) => storage,
		Err(err) => {
			error!("Failed to open storage at {}: {}", config.storage_dir, err);
			std::process::exit(1);
		}
	};

	let bind = (config.host.clone(), config.port);
	let state = web::Data::new(AppState::new(reference, storage, config));

	info!("Server started successfully on {}:{}", bind.0, bind.1);

	HttpServer::new(move || {
		App::new()
			.app_data(state.clone())
			.configure(controllers::config)
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind(bind)?
	.run()
	.await
}
