use crate::{
	api::is_valid_rating,
	jwt_auth::Identity,
	models::{AddReviewSchema, UpdateReviewSchema},
	AppState,
};
use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;

fn invalid_rating(rating: u8) -> HttpResponse {
	let message = format!("Rating must be between 1 and 5, got {}", rating);
	HttpResponse::BadRequest().json(json!({"status": "fail","message": message}))
}

fn review_not_found(review_id: &str) -> HttpResponse {
	let message = format!("Review {} not found", review_id);
	HttpResponse::NotFound().json(json!({"status": "fail","message": message}))
}

#[get("/reviews")]
pub async fn get_reviews_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	let reviews = data.reviews(identity).get_all().await;

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"reviews_count": reviews.len(),
			"reviews": &reviews
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/reviews/place/{place_id}")]
pub async fn get_place_review_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let place_id = path.into_inner();
	let review = data.reviews(identity).review_for_place(&place_id).await;

	HttpResponse::Ok().json(json!({
		"status":  "success",
		"data": json!({ "review": review })
	}))
}

#[post("/reviews")]
pub async fn add_review_handler(
	body: web::Json<AddReviewSchema>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	if !is_valid_rating(body.rating) {
		return invalid_rating(body.rating);
	}

	match data
		.reviews(identity)
		.upsert_by_place(&body.place, body.rating, &body.comment)
		.await
	{
		Some(review) => HttpResponse::Created().json(json!({
			"status":  "success",
			"data": json!({ "review": review })
		})),
		None => HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": "Review could not be saved"})),
	}
}

#[put("/review/{id}")]
pub async fn update_review_handler(
	path: Path<String>,
	body: web::Json<UpdateReviewSchema>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let review_id = path.into_inner();

	if !is_valid_rating(body.rating) {
		return invalid_rating(body.rating);
	}

	if !data
		.reviews(identity)
		.update_review(&review_id, body.rating, &body.comment)
		.await
	{
		return review_not_found(&review_id);
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[delete("/review/{id}")]
pub async fn delete_review_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let review_id = path.into_inner();

	if !data.reviews(identity).remove(&review_id).await {
		return review_not_found(&review_id);
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[post("/review/{id}/like")]
pub async fn like_review_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let review_id = path.into_inner();

	if !data.reviews(identity).increment_like(&review_id).await {
		return review_not_found(&review_id);
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[post("/review/{id}/helpful")]
pub async fn helpful_review_handler(
	path: Path<String>,
	identity: Identity,
	data: web::Data<AppState>,
) -> impl Responder {
	let review_id = path.into_inner();

	if !data.reviews(identity).increment_helpful(&review_id).await {
		return review_not_found(&review_id);
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[delete("/reviews")]
pub async fn clear_reviews_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
	if !data.reviews(identity).clear().await {
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": "Reviews could not be cleared"}));
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}
