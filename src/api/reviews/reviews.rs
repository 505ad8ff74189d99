use chrono::{SecondsFormat, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::{
	api::{
		AuthProvider, KeyValueStore, ScopedRecord, StoreContext, UserScopedStore, GUEST_ID,
	},
	models::{Review, ReviewedPlace},
};

pub const REVIEWS_KEY: &str = "reviews";

pub type ReviewsStore<S, A> = UserScopedStore<Review, S, A>;

impl ScopedRecord for Review {
	fn record_id(&self) -> &str {
		&self.id
	}
}

pub fn is_valid_rating(rating: u8) -> bool {
	(1..=5).contains(&rating)
}

fn timestamp() -> String {
	Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reviews are kept newest first, one per place.
impl<S, A> UserScopedStore<Review, S, A>
where
	S: KeyValueStore,
	A: AuthProvider,
{
	pub fn reviews(ctx: StoreContext<S>, auth: A) -> Self {
		Self::new(REVIEWS_KEY, ctx, auth)
	}

	/// Replaces any earlier review of the same place and puts the new one first.
	pub async fn upsert_by_place(
		&self,
		place: &ReviewedPlace,
		rating: u8,
		comment: &str,
	) -> Option<Review> {
		if !is_valid_rating(rating) {
			warn!("Rejected review of {} with rating {}", place.id, rating);
			return None;
		}

		let author = self.auth().current_user();
		let review = Review {
			id: Uuid::now_v7().to_string(),
			place_id: place.id.clone(),
			place_name: place.name.clone(),
			place_location: place.location.clone(),
			place_image: place.image.clone(),
			rating,
			comment: comment.to_string(),
			date: timestamp(),
			likes: 0,
			helpful: 0,
			user_id: author
				.as_ref()
				.map(|user| user.id.clone())
				.unwrap_or_else(|| GUEST_ID.to_string()),
			user_email: author.and_then(|user| user.email),
		};

		let saved = self
			.transform(|reviews| {
				reviews.retain(|r| r.place_id != review.place_id);
				reviews.insert(0, review.clone());
				Some(review)
			})
			.await;

		if let Some(review) = &saved {
			info!("Saved review {} of {}", review.id, review.place_id);
		}

		saved
	}

	/// Edits rating and comment in place and refreshes the date.
	pub async fn update_review(&self, review_id: &str, rating: u8, comment: &str) -> bool {
		if !is_valid_rating(rating) {
			warn!("Rejected update of {} with rating {}", review_id, rating);
			return false;
		}

		self.transform(|reviews| {
			let review = reviews.iter_mut().find(|r| r.id == review_id)?;
			review.rating = rating;
			review.comment = comment.to_string();
			review.date = timestamp();
			Some(())
		})
		.await
		.is_some()
	}

	pub async fn increment_like(&self, review_id: &str) -> bool {
		self.transform(|reviews| {
			let review = reviews.iter_mut().find(|r| r.id == review_id)?;
			review.likes = review.likes.saturating_add(1);
			Some(())
		})
		.await
		.is_some()
	}

	pub async fn increment_helpful(&self, review_id: &str) -> bool {
		self.transform(|reviews| {
			let review = reviews.iter_mut().find(|r| r.id == review_id)?;
			review.helpful = review.helpful.saturating_add(1);
			Some(())
		})
		.await
		.is_some()
	}

	pub async fn review_for_place(&self, place_id: &str) -> Option<Review> {
		self.load()
			.await
			.into_iter()
			.find(|review| review.place_id == place_id)
	}
}
