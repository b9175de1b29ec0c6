//! Durable client-side key-value storage.
//!
//! Values are JSON documents stored under fixed keys, the way a browser keeps them in
//! `localStorage`. Reads through [`read_or_default`] never fail: a missing, unreadable or
//! malformed value degrades to the type's default and a warning is logged.

use std::{
	collections::HashMap,
	fs, io,
	path::{Path, PathBuf},
	sync::{Mutex, PoisonError},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub const RECENT_SEARCHES_KEY: &str = "whgg-recent-searches";
pub const LAST_SEARCH_KEY: &str = "whgg-last-search";

/// STORAGE_FILE_NAME is the name of the file holding every stored key
pub const STORAGE_FILE_NAME: &str = "storage.json";

#[derive(Error, Debug)]
pub enum StorageError {
	#[error("storage file I/O error: {source}; path: '{}'", .path.display())]
	Io {
		path: Box<Path>,
		#[source]
		source: io::Error,
	},
	#[error("storage value is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("storage document must be a JSON object: <path='{}'>", .0.display())]
	NotAnObject(Box<Path>),
}

impl StorageError {
	fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
		Self::Io {
			path: path.as_ref().into(),
			source,
		}
	}
}

pub trait KeyValueStorage: Send + Sync {
	fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;

	/// Replaces the value under `key` in a single write
	fn write(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

pub fn read_or_default<T>(storage: &dyn KeyValueStorage, key: &str) -> T
where
	T: DeserializeOwned + Default,
{
	match storage.read(key) {
		Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
			warn!(%key, "Discarding malformed stored value: {e:#}");
			T::default()
		}),
		Ok(None) => T::default(),
		Err(e) => {
			warn!(%key, "Failed to read stored value, using default: {e:#}");
			T::default()
		}
	}
}

pub fn write_value<T: Serialize>(
	storage: &dyn KeyValueStorage,
	key: &str,
	value: &T,
) -> Result<(), StorageError> {
	storage.write(key, serde_json::to_value(value)?)
}

/// Process-local storage, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
	values: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStorage for MemoryStorage {
	fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
		Ok(self
			.values
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.get(key)
			.cloned())
	}

	fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
		self.values
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(key.to_string(), value);

		Ok(())
	}
}

/// All keys kept in one JSON object on disk.
///
/// Writes go to a sibling temporary file which is then renamed over the document, so
/// readers see either the previous or the new state.
#[derive(Debug)]
pub struct JsonFileStorage {
	path: PathBuf,
	lock: Mutex<()>,
}

impl JsonFileStorage {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: Mutex::new(()),
		}
	}

	pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
		Self::new(data_dir.as_ref().join(STORAGE_FILE_NAME))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load(&self) -> Result<Map<String, Value>, StorageError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
			Err(e) => return Err(StorageError::io(&self.path, e)),
		};

		match serde_json::from_str(&contents)? {
			Value::Object(map) => Ok(map),
			_ => Err(StorageError::NotAnObject(self.path.as_path().into())),
		}
	}

	fn store(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
		}

		let tmp_path = self.path.with_extension("json.tmp");
		fs::write(&tmp_path, serde_json::to_vec_pretty(document)?)
			.map_err(|e| StorageError::io(&tmp_path, e))?;
		fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

		debug!(path = %self.path.display(), "Saved storage document");

		Ok(())
	}
}

impl KeyValueStorage for JsonFileStorage {
	fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
		let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

		Ok(self.load()?.remove(key))
	}

	fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
		let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

		let mut document = self.load().unwrap_or_else(|e| {
			warn!("Replacing unreadable storage document: {e:#}");
			Map::new()
		});
		document.insert(key.to_string(), value);

		self.store(&document)
	}
}
