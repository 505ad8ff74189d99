use crate::{api::AuthProvider, jwt_auth::Identity, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use log::info;
use serde_json::json;

/// Called once after sign-in: claims any pre-namespacing favorites and reviews
/// for the signed-in user. Guests get nothing migrated.
#[post("/session")]
pub async fn start_session_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	let favorites_migrated = data.favorites(identity.clone()).migrate_legacy().await;
	let reviews_migrated = data.reviews(identity.clone()).migrate_legacy().await;

	if favorites_migrated || reviews_migrated {
		info!(
			"Session for {} claimed legacy data (favorites: {}, reviews: {})",
			identity.current_user_id(),
			favorites_migrated,
			reviews_migrated
		);
	}

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"user_id": identity.current_user_id(),
			"favorites_migrated": favorites_migrated,
			"reviews_migrated": reviews_migrated
		})
	});

	HttpResponse::Ok().json(json_response)
}
