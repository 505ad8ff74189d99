use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per storage key. Every read-modify-write of a key holds
/// its guard from the read until the write lands.
///
/// Entries nobody holds or waits on are dropped on the next `lock` call, so
/// the map stays as large as the set of keys in flight.
#[derive(Debug, Clone, Default)]
pub struct KeyLocks {
	inner: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl KeyLocks {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
		let lock = {
			let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
			// a held guard or a pending waiter owns a clone of the Arc
			locks.retain(|k, lock| k == key || Arc::strong_count(lock) > 1);
			locks.entry(key.to_string()).or_default().clone()
		};
		lock.lock_owned().await
	}
}

/// Storage keys whose legacy migration already ran in this process.
///
/// Entries are never evicted: the set grows by one key per user namespace
/// seen since startup. Forgetting a key would only cost one extra legacy
/// lookup on that key's next load.
#[derive(Debug, Clone, Default)]
pub struct MigrationLedger {
	checked: Arc<Mutex<HashSet<String>>>,
}

impl MigrationLedger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_checked(&self, key: &str) -> bool {
		self.checked
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.contains(key)
	}

	pub fn mark_checked(&self, key: &str) {
		self.checked
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(key.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn same_key_is_exclusive() {
		let locks = KeyLocks::new();
		let guard = locks.lock("favorites_uid-1").await;

		let held = locks.inner.lock().unwrap().get("favorites_uid-1").cloned().unwrap();
		assert!(held.try_lock().is_err());

		drop(guard);
		assert!(held.try_lock().is_ok());
	}

	#[tokio::test]
	async fn idle_keys_are_dropped() {
		let locks = KeyLocks::new();
		drop(locks.lock("favorites_uid-1").await);
		let held = locks.lock("favorites_uid-2").await;
		assert_eq!(locks.inner.lock().unwrap().len(), 1);

		let _other = locks.lock("reviews_uid-1").await;
		assert_eq!(locks.inner.lock().unwrap().len(), 2);
		assert!(locks.inner.lock().unwrap().contains_key("favorites_uid-2"));
		drop(held);
	}

	#[tokio::test]
	async fn different_keys_do_not_block_each_other() {
		let locks = KeyLocks::new();
		let _a = locks.lock("favorites_uid-1").await;
		let _b = locks.lock("favorites_uid-2").await;
		let _c = locks.clone().lock("reviews_uid-1").await;
	}

	#[test]
	fn ledger_remembers_checked_keys() {
		let ledger = MigrationLedger::new();
		assert!(!ledger.is_checked("reviews_uid-1"));
		ledger.mark_checked("reviews_uid-1");
		assert!(ledger.is_checked("reviews_uid-1"));
		assert!(ledger.clone().is_checked("reviews_uid-1"));
		assert!(!ledger.is_checked("favorites_uid-1"));
	}
}
