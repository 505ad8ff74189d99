use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info};

use crate::{
	api::{AuthProvider, KeyValueStore, ScopedRecord, StoreContext, UserScopedStore},
	models::{Favorite, Place},
};

pub const FAVORITES_KEY: &str = "favorites";

pub type FavoritesStore<S, A> = UserScopedStore<Favorite, S, A>;

impl ScopedRecord for Favorite {
	fn record_id(&self) -> &str {
		&self.id
	}
}

impl Favorite {
	pub fn from_place(place: Place, date_added: DateTime<Utc>) -> Self {
		let mut fields = place.fields;
		fields.remove("dateAdded");

		Favorite {
			id: place.id,
			date_added: date_added.to_rfc3339_opts(SecondsFormat::Millis, true),
			fields,
		}
	}
}

impl<S, A> UserScopedStore<Favorite, S, A>
where
	S: KeyValueStore,
	A: AuthProvider,
{
	pub fn favorites(ctx: StoreContext<S>, auth: A) -> Self {
		Self::new(FAVORITES_KEY, ctx, auth)
	}

	/// Stamps `dateAdded` and stores the place. False if it is already a favorite
	/// or could not be saved.
	pub async fn add_favorite(&self, place: Place) -> bool {
		let id = place.id.clone();
		let added = self.add(Favorite::from_place(place, Utc::now())).await;

		if added {
			info!("Added {} to {}", id, self.storage_key());
		} else {
			debug!("{} not added to {}", id, self.storage_key());
		}

		added
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::MemoryStore;
	use crate::models::AuthUser;
	use serde_json::json;
	use std::sync::Arc;

	fn place(value: serde_json::Value) -> Place {
		serde_json::from_value(value).unwrap()
	}

	fn favorites_for(
		ctx: &StoreContext<MemoryStore>,
		id: &str,
	) -> FavoritesStore<MemoryStore, Option<AuthUser>> {
		UserScopedStore::favorites(
			ctx.clone(),
			Some(AuthUser {
				id: id.to_string(),
				email: None,
			}),
		)
	}

	#[test]
	fn from_place_keeps_fields_and_stamps_date() {
		let added = DateTime::parse_from_rfc3339("2026-03-01T08:30:00Z")
			.unwrap()
			.with_timezone(&Utc);
		let favorite = Favorite::from_place(
			place(json!({
				"id": "kawasan-falls",
				"name": "Kawasan Falls",
				"location": "Badian",
				"rating": 4.8,
				"dateAdded": "stale"
			})),
			added,
		);

		assert_eq!(favorite.date_added, "2026-03-01T08:30:00.000Z");
		let value = serde_json::to_value(&favorite).unwrap();
		assert_eq!(
			value,
			json!({
				"id": "kawasan-falls",
				"name": "Kawasan Falls",
				"location": "Badian",
				"rating": 4.8,
				"dateAdded": "2026-03-01T08:30:00.000Z"
			})
		);
	}

	#[tokio::test]
	async fn add_favorite_is_set_like() {
		let ctx = StoreContext::new(Arc::new(MemoryStore::new()));
		let favorites = favorites_for(&ctx, "uid-1");

		assert!(favorites.add_favorite(place(json!({"id": "sirao", "name": "Sirao Garden"}))).await);
		assert!(!favorites.add_favorite(place(json!({"id": "sirao", "name": "Other"}))).await);
		assert!(favorites.contains("sirao").await);

		let all = favorites.get_all().await;
		assert_eq!(all.len(), 1);
		assert_eq!(all[0].fields["name"], "Sirao Garden");
		assert!(!all[0].date_added.is_empty());
	}

	#[tokio::test]
	async fn favorites_are_kept_per_user() {
		let ctx = StoreContext::new(Arc::new(MemoryStore::new()));
		favorites_for(&ctx, "uid-1")
			.add_favorite(place(json!({"id": "tops"})))
			.await;

		assert_eq!(favorites_for(&ctx, "uid-1").count().await, 1);
		assert_eq!(favorites_for(&ctx, "uid-2").count().await, 0);
		assert!(ctx.storage.get("favorites_uid-1").await.unwrap().is_some());
	}
}
