use super::Backend;
use serde::{de::DeserializeOwned, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

/// In-memory stand-in for `localStorage`, storing the same serialized text.
#[derive(Debug, Default)]
pub struct MemoryBackend(RefCell<BTreeMap<String, String>>);

impl Backend for MemoryBackend {
	fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		let raw = self.get_raw(key)?;
		serde_json::from_str(&raw).ok()
	}

	fn set<T: Serialize>(&self, key: &str, value: &T) {
		if let Ok(raw) = serde_json::to_string(value) {
			self.set_raw(key, &raw);
		}
	}

	fn get_raw(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set_raw(&self, key: &str, value: &str) {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
	}
}
