use actix_web::web;

use crate::controllers::favorites::{
	add_favorite_handler, clear_favorites_handler, count_favorites_handler,
	get_favorites_handler, is_favorite_handler, remove_favorite_handler,
};
use crate::controllers::restaurants::{
	get_featured_restaurants_handler, get_nearby_restaurants_handler, get_restaurant_handler,
	get_restaurants_handler,
};
use crate::controllers::reviews::{
	add_review_handler, clear_reviews_handler, delete_review_handler, get_place_review_handler,
	get_reviews_handler, helpful_review_handler, like_review_handler, update_review_handler,
};
use crate::controllers::session::start_session_handler;

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		.service(get_nearby_restaurants_handler)
		.service(get_featured_restaurants_handler)
		.service(get_restaurants_handler)
		.service(get_restaurant_handler)
		.service(start_session_handler)
		.service(get_favorites_handler)
		.service(count_favorites_handler)
		.service(is_favorite_handler)
		.service(add_favorite_handler)
		.service(remove_favorite_handler)
		.service(clear_favorites_handler)
		.service(get_reviews_handler)
		.service(get_place_review_handler)
		.service(add_review_handler)
		.service(update_review_handler)
		.service(delete_review_handler)
		.service(like_review_handler)
		.service(helpful_review_handler)
		.service(clear_reviews_handler);

	conf.service(scope);
}
