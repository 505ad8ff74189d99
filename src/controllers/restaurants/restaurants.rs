use crate::{
	api::{featured_restaurants, get_nearby_restaurants, search_restaurants},
	models::{FilteredEstablishment, NearbyOptions, SearchOptions},
	utils::{filter_establishment_record, paginate},
	AppState,
};
use actix_web::{
	get,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;

#[get("/restaurants/nearby")]
pub async fn get_nearby_restaurants_handler(
	opts: web::Query<NearbyOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let location = opts.location.clone().unwrap_or_default();
	let limit = opts.limit.unwrap_or(data.env.nearby_limit);

	let restaurants = get_nearby_restaurants(&data.reference, &location, limit);

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"restaurants": &restaurants.into_iter().map(filter_establishment_record).collect::<Vec<FilteredEstablishment>>(),
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/restaurants/featured")]
pub async fn get_featured_restaurants_handler(
	opts: web::Query<NearbyOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let limit = opts.limit.unwrap_or(data.env.nearby_limit);
	let restaurants = featured_restaurants(&data.reference, limit);

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"restaurants": &restaurants.into_iter().map(filter_establishment_record).collect::<Vec<FilteredEstablishment>>(),
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/restaurants")]
pub async fn get_restaurants_handler(
	opts: web::Query<SearchOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let mut restaurants = search_restaurants(&data.reference, opts.query.as_deref().unwrap_or(""));

	if let Some(municipality) = opts.municipality.as_deref() {
		let municipality = municipality.trim().to_lowercase();
		restaurants.retain(|e| e.municipality.to_lowercase().contains(&municipality));
	}

	let restaurants_count = restaurants.len();
	let page = paginate(&restaurants, opts.page, opts.limit);

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"restaurants": &page.into_iter().map(filter_establishment_record).collect::<Vec<FilteredEstablishment>>(),
			"restaurants_count": &restaurants_count
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/restaurant/{id}")]
pub async fn get_restaurant_handler(path: Path<String>, data: web::Data<AppState>) -> impl Responder {
	let restaurant_id = path.into_inner();

	let Some(restaurant) = data.reference.find_establishment(&restaurant_id) else {
		let message = format!("Restaurant {} not found", restaurant_id);
		return HttpResponse::NotFound().json(json!({"status": "fail","message": message}));
	};

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"restaurant": restaurant
		})
	});

	HttpResponse::Ok().json(json_response)
}
