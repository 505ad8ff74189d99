use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::api::CustomError;

/// Device-local string store. Values written by this crate are JSON arrays.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
	async fn get(&self, key: &str) -> Result<Option<String>, CustomError>;
	async fn set(&self, key: &str, value: &str) -> Result<(), CustomError>;
	async fn delete(&self, key: &str) -> Result<(), CustomError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	async fn get(&self, key: &str) -> Result<Option<String>, CustomError> {
		Ok(self.entries.read().await.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), CustomError> {
		self.entries
			.write()
			.await
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<(), CustomError> {
		self.entries.write().await.remove(key);
		Ok(())
	}
}

/// One file per key under `root`. File names are the URL-encoded key, so user
/// ids can never escape the directory.
#[derive(Debug, Clone)]
pub struct FileStore {
	root: PathBuf,
}

impl FileStore {
	pub async fn open(root: impl Into<PathBuf>) -> Result<Self, CustomError> {
		let root = root.into();
		tokio::fs::create_dir_all(&root).await?;
		info!("File storage opened at {}", root.display());
		Ok(Self { root })
	}

	fn path_for(&self, key: &str) -> PathBuf {
		self.root.join(format!("{}.json", urlencoding::encode(key)))
	}
}

impl KeyValueStore for FileStore {
	async fn get(&self, key: &str) -> Result<Option<String>, CustomError> {
		match tokio::fs::read_to_string(self.path_for(key)).await {
			Ok(value) => Ok(Some(value)),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e.into()),
		}
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), CustomError> {
		let path = self.path_for(key);
		// write-then-rename so a crash never leaves a half-written list behind
		let tmp = self.root.join(format!(
			".{}.{}.tmp",
			urlencoding::encode(key),
			Uuid::new_v4()
		));
		tokio::fs::write(&tmp, value).await?;
		if let Err(e) = tokio::fs::rename(&tmp, &path).await {
			let _ = tokio::fs::remove_file(&tmp).await;
			return Err(e.into());
		}
		debug!("stored {} bytes under {}", value.len(), key);
		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<(), CustomError> {
		match tokio::fs::remove_file(self.path_for(key)).await {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
			Err(e) => Err(e.into()),
		}
	}
}

/// Backend picked from `STORAGE_DIR`; `:memory:` keeps everything in process.
#[derive(Debug)]
pub enum Storage {
	File(FileStore),
	Memory(MemoryStore),
}

impl Storage {
	pub const IN_MEMORY: &'static str = ":memory:";

	pub async fn open(dir: &str) -> Result<Self, CustomError> {
		if dir == Self::IN_MEMORY {
			info!("Using in-memory storage, data will not survive a restart");
			return Ok(Storage::Memory(MemoryStore::new()));
		}
		Ok(Storage::File(FileStore::open(dir).await?))
	}
}

impl KeyValueStore for Storage {
	async fn get(&self, key: &str) -> Result<Option<String>, CustomError> {
		match self {
			Storage::File(store) => store.get(key).await,
			Storage::Memory(store) => store.get(key).await,
		}
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), CustomError> {
		match self {
			Storage::File(store) => store.set(key, value).await,
			Storage::Memory(store) => store.set(key, value).await,
		}
	}

	async fn delete(&self, key: &str) -> Result<(), CustomError> {
		match self {
			Storage::File(store) => store.delete(key).await,
			Storage::Memory(store) => store.delete(key).await,
		}
	}
}
