use super::Backend;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// Browser `localStorage`, through `gloo-storage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl Backend for LocalBackend {
	fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		match LocalStorage::get::<T>(key) {
			Ok(value) => Some(value),
			Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
			Err(err) => {
				log::debug!(target: "storage", "discarding unreadable value at {key:?}: {err:?}");
				None
			}
		}
	}

	fn set<T: Serialize>(&self, key: &str, value: &T) {
		if let Err(err) = LocalStorage::set(key, value) {
			log::warn!(target: "storage", "failed to write {key:?}: {err:?}");
		}
	}

	fn get_raw(&self, key: &str) -> Option<String> {
		LocalStorage::raw().get_item(key).ok().flatten()
	}

	fn set_raw(&self, key: &str, value: &str) {
		if let Err(err) = LocalStorage::raw().set_item(key, value) {
			log::warn!(target: "storage", "failed to write {key:?}: {err:?}");
		}
	}
}
