use crate::{jwt_auth::Identity, models::Place, AppState};
use actix_web::{
	delete, get, post,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;

#[get("/favorites")]
pub async fn get_favorites_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	let favorites = data.favorites(identity).get_all().await;

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"favorites_count": favorites.len(),
			"favorites": &favorites
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/favorites/count")]
pub async fn count_favorites_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	let favorites_count = data.favorites(identity).count().await;

	HttpResponse::Ok().json(json!({
		"status":  "success",
		"data": json!({ "favorites_count": favorites_count })
	}))
}

#[get("/favorite/{id}")]
pub async fn is_favorite_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let place_id = path.into_inner();
	let is_favorite = data.favorites(identity).contains(&place_id).await;

	HttpResponse::Ok().json(json!({
		"status":  "success",
		"data": json!({ "id": place_id, "is_favorite": is_favorite })
	}))
}

#[post("/favorites")]
pub async fn add_favorite_handler(
	body: web::Json<Place>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let place = body.into_inner();
	let place_id = place.id.clone();

	if !data.favorites(identity).add_favorite(place).await {
		let message = format!("{} was not added to favorites", place_id);
		return HttpResponse::Conflict().json(json!({"status": "fail","message": message}));
	}

	HttpResponse::Created().json(json!({
		"status":  "success",
		"data": json!({ "id": place_id })
	}))
}

#[delete("/favorite/{id}")]
pub async fn remove_favorite_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let place_id = path.into_inner();

	if !data.favorites(identity).remove(&place_id).await {
		let message = format!("{} is not a favorite", place_id);
		return HttpResponse::NotFound().json(json!({"status": "fail","message": message}));
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[delete("/favorites")]
pub async fn clear_favorites_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	if !data.favorites(identity).clear().await {
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": "Favorites could not be cleared"}));
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}
