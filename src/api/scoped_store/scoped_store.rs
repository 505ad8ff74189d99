use std::marker::PhantomData;
use std::sync::Arc;

use log::{error, info, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::api::{AuthProvider, CustomError, KeyLocks, KeyValueStore, MigrationLedger};

/// A record kept in a user-scoped list, identified by a string id.
pub trait ScopedRecord: Serialize + DeserializeOwned + Clone {
	fn record_id(&self) -> &str;
}

/// Storage plus the process-wide lock table and migration ledger. Cloned into
/// every store so all of them agree on which keys are busy.
#[derive(Debug)]
pub struct StoreContext<S> {
	pub storage: Arc<S>,
	pub locks: KeyLocks,
	pub ledger: MigrationLedger,
}

impl<S> StoreContext<S> {
	pub fn new(storage: Arc<S>) -> Self {
		Self {
			storage,
			locks: KeyLocks::new(),
			ledger: MigrationLedger::new(),
		}
	}
}

impl<S> Clone for StoreContext<S> {
	fn clone(&self) -> Self {
		Self {
			storage: self.storage.clone(),
			locks: self.locks.clone(),
			ledger: self.ledger.clone(),
		}
	}
}

/// List of records stored under `<base_key>_<user id>` (or `_guest`).
///
/// Nothing is cached between calls: every operation reads the list back from
/// storage, and every mutation is a single locked read-modify-write. Storage
/// and serialization failures are logged and turn into empty reads or
/// rejected writes; they never reach the caller.
pub struct UserScopedStore<T, S, A> {
	base_key: &'static str,
	ctx: StoreContext<S>,
	auth: A,
	_record: PhantomData<T>,
}

impl<T, S, A> UserScopedStore<T, S, A>
where
	T: ScopedRecord,
	S: KeyValueStore,
	A: AuthProvider,
{
	pub fn new(base_key: &'static str, ctx: StoreContext<S>, auth: A) -> Self {
		Self {
			base_key,
			ctx,
			auth,
			_record: PhantomData,
		}
	}

	/// Recomputed on every call, the signed-in user may change at any time.
	pub fn storage_key(&self) -> String {
		format!("{}_{}", self.base_key, self.auth.current_user_id())
	}

	pub(crate) fn auth(&self) -> &A {
		&self.auth
	}

	/// Moves pre-namespacing data into the signed-in user's key. Only runs when
	/// a user is signed in, their key is empty and the legacy key has data; the
	/// first user to get here claims the legacy list. Returns whether anything
	/// was moved.
	pub async fn migrate_legacy(&self) -> bool {
		if self.auth.current_user().is_none() {
			return false;
		}
		let key = self.storage_key();
		self.migrate_into(&key).await
	}

	pub async fn load(&self) -> Vec<T> {
		let key = self.storage_key();
		self.ensure_migrated(&key).await;

		self.read(&key).await.unwrap_or_else(|e| {
			error!("Failed to load {}: {}", key, e);
			Vec::new()
		})
	}

	pub async fn get_all(&self) -> Vec<T> {
		self.load().await
	}

	pub async fn contains(&self, id: &str) -> bool {
		self.load().await.iter().any(|record| record.record_id() == id)
	}

	pub async fn count(&self) -> usize {
		self.load().await.len()
	}

	/// Appends unless a record with the same id is already stored.
	pub async fn add(&self, record: T) -> bool {
		self.transform(|records| {
			if records.iter().any(|r| r.record_id() == record.record_id()) {
				return None;
			}
			records.push(record);
			Some(())
		})
		.await
		.is_some()
	}

	pub async fn remove(&self, id: &str) -> bool {
		self.transform(|records| {
			let position = records.iter().position(|r| r.record_id() == id)?;
			records.remove(position);
			Some(())
		})
		.await
		.is_some()
	}

	/// Overwrites the list with `[]` without reading it, so a list that no
	/// longer parses can still be reset.
	pub async fn clear(&self) -> bool {
		let key = self.storage_key();
		self.ensure_migrated(&key).await;

		let _guard = self.ctx.locks.lock(&key).await;

		match self.write(&key, &[]).await {
			Ok(()) => true,
			Err(e) => {
				error!("Failed to clear {}: {}", key, e);
				false
			}
		}
	}

	/// Read, apply `change`, write, all under the key's lock. `change` returning
	/// `None` means "nothing to do" and skips the write. Also `None` when the
	/// list cannot be read or the write fails.
	pub async fn transform<R, F>(&self, change: F) -> Option<R>
	where
		F: FnOnce(&mut Vec<T>) -> Option<R>,
	{
		let key = self.storage_key();
		self.ensure_migrated(&key).await;

		let _guard = self.ctx.locks.lock(&key).await;

		let mut records = match self.read(&key).await {
			Ok(records) => records,
			Err(e) => {
				error!("Failed to load {} for update: {}", key, e);
				return None;
			}
		};

		let outcome = change(&mut records)?;

		match self.write(&key, &records).await {
			Ok(()) => Some(outcome),
			Err(e) => {
				error!("Failed to save {}: {}", key, e);
				None
			}
		}
	}

	async fn ensure_migrated(&self, key: &str) {
		if self.auth.current_user().is_some() && !self.ctx.ledger.is_checked(key) {
			self.migrate_into(key).await;
		}
	}

	async fn migrate_into(&self, key: &str) -> bool {
		match self.try_migrate(key).await {
			Ok(moved) => {
				self.ctx.ledger.mark_checked(key);
				moved
			}
			Err(e) => {
				warn!("Legacy migration into {} failed, will retry: {}", key, e);
				false
			}
		}
	}

	async fn try_migrate(&self, key: &str) -> Result<bool, CustomError> {
		// legacy key first, then the user key; nothing else holds both
		let _legacy_guard = self.ctx.locks.lock(self.base_key).await;
		let _guard = self.ctx.locks.lock(key).await;

		if self.ctx.storage.get(key).await?.is_some() {
			return Ok(false);
		}
		let Some(legacy) = self.ctx.storage.get(self.base_key).await? else {
			return Ok(false);
		};

		self.ctx.storage.set(key, &legacy).await?;
		self.ctx.storage.delete(self.base_key).await?;

		info!("Migrated legacy {} data into {}", self.base_key, key);
		Ok(true)
	}

	async fn read(&self, key: &str) -> Result<Vec<T>, CustomError> {
		match self.ctx.storage.get(key).await? {
			Some(raw) => Ok(serde_json::from_str(&raw)?),
			None => Ok(Vec::new()),
		}
	}

	async fn write(&self, key: &str, records: &[T]) -> Result<(), CustomError> {
		let raw = serde_json::to_string(records)?;
		self.ctx.storage.set(key, &raw).await
	}
}
