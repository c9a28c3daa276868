use crate::{filter::FilterState, registry::ListId, theme::ThemeChoice};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

mod local;
pub use local::*;
#[cfg(test)]
pub mod memory;

pub static DEFAULT_PREFIX: &str = "signup_lists_";
static THEME_KEY: &str = "theme";

/// Raw key/value capability the [`Store`] is layered on.
/// Absent and unparsable values both read as `None`.
pub trait Backend {
	fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
	fn set<T: Serialize>(&self, key: &str, value: &T);
	fn get_raw(&self, key: &str) -> Option<String>;
	fn set_raw(&self, key: &str, value: &str);
}

/// A record persisted as one JSON object under `prefix + id()`.
pub trait StoredValue: Serialize + DeserializeOwned + Default {
	fn id() -> &'static str;
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccordionStatus(pub BTreeMap<String, bool>);
impl StoredValue for AccordionStatus {
	fn id() -> &'static str {
		"accordion_status"
	}
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelections(pub BTreeMap<String, Vec<String>>);
impl StoredValue for CategorySelections {
	fn id() -> &'static str {
		"category_selection"
	}
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHighlights(pub BTreeMap<String, String>);
impl StoredValue for UserHighlights {
	fn id() -> &'static str {
		"user_highlighting"
	}
}

impl StoredValue for FilterState {
	fn id() -> &'static str {
		"filter_selection"
	}
}

#[derive(Debug, Clone)]
pub struct Store<B> {
	prefix: String,
	backend: B,
}

impl Store<LocalBackend> {
	pub fn local() -> Self {
		Self::new(DEFAULT_PREFIX, LocalBackend)
	}
}

impl<B: Backend> Store<B> {
	pub fn new(prefix: impl Into<String>, backend: B) -> Self {
		Self {
			prefix: prefix.into(),
			backend,
		}
	}

	#[cfg(test)]
	pub fn backend(&self) -> &B {
		&self.backend
	}

	fn key<T: StoredValue>(&self) -> String {
		format!("{}{}", self.prefix, T::id())
	}

	pub fn load<T: StoredValue>(&self) -> Option<T> {
		self.backend.get::<T>(&self.key::<T>())
	}

	pub fn load_or_default<T: StoredValue>(&self) -> T {
		self.load::<T>().unwrap_or_default()
	}

	pub fn save<T: StoredValue>(&self, value: &T) {
		self.backend.set(&self.key::<T>(), value);
	}

	pub fn update<T, F>(&self, mutator: F)
	where
		T: StoredValue,
		F: FnOnce(&mut T),
	{
		let mut value = self.load_or_default::<T>();
		mutator(&mut value);
		self.save(&value);
	}

	pub fn accordion_status(&self, accordion_id: &str) -> bool {
		let AccordionStatus(status) = self.load_or_default();
		status.get(accordion_id).copied().unwrap_or(false)
	}

	pub fn set_accordion_status(&self, accordion_id: &str, is_open: bool) {
		self.update(|AccordionStatus(status)| {
			status.insert(accordion_id.to_owned(), is_open);
		});
	}

	pub fn filter_selection(&self) -> Option<FilterState> {
		self.load::<FilterState>()
	}

	pub fn set_filter_selection(&self, state: &FilterState) {
		self.save(state);
	}

	pub fn category_selection(&self, list: &ListId) -> Option<Vec<String>> {
		let CategorySelections(mut selections) = self.load_or_default();
		selections.remove(list.as_str())
	}

	pub fn set_category_selection<'a>(&self, list: &ListId, labels: impl IntoIterator<Item = &'a String>) {
		let labels: Vec<String> = labels.into_iter().cloned().collect();
		self.update(|CategorySelections(selections)| {
			selections.insert(list.to_string(), labels);
		});
	}

	pub fn user_highlighting(&self, list: &ListId) -> Option<String> {
		let UserHighlights(mut highlights) = self.load_or_default();
		highlights.remove(list.as_str())
	}

	pub fn all_user_highlightings(&self) -> BTreeMap<String, String> {
		self.load_or_default::<UserHighlights>().0
	}

	pub fn set_user_highlighting(&self, list: &ListId, user: &str) {
		self.update(|UserHighlights(highlights)| {
			highlights.insert(list.to_string(), user.to_owned());
		});
	}

	pub fn remove_user_highlighting(&self, list: &ListId) {
		self.update(|UserHighlights(highlights)| {
			highlights.remove(list.as_str());
		});
	}

	pub fn theme(&self) -> Option<ThemeChoice> {
		self.backend.get_raw(THEME_KEY)?.parse().ok()
	}

	pub fn set_theme(&self, choice: ThemeChoice) {
		self.backend.set_raw(THEME_KEY, &choice.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::{memory::MemoryBackend, *};

	fn store() -> Store<MemoryBackend> {
		Store::new("test_", MemoryBackend::default())
	}

	#[test]
	fn records_are_prefixed() {
		let store = store();
		store.set_accordion_status("faq", true);
		assert_eq!(
			store.backend().get_raw("test_accordion_status").as_deref(),
			Some(r#"{"faq":true}"#)
		);
	}

	#[test]
	fn absent_accordion_is_closed() {
		let store = store();
		assert!(!store.accordion_status("missing"));
		store.set_accordion_status("faq", true);
		store.set_accordion_status("rules", false);
		assert!(store.accordion_status("faq"));
		assert!(!store.accordion_status("rules"));
	}

	#[test]
	fn corrupt_values_degrade_to_empty() {
		let store = store();
		store.backend().set_raw("test_category_selection", "{not json");
		assert_eq!(store.category_selection(&ListId::from("a")), None);
		store.set_category_selection(&ListId::from("a"), &["Rock".to_owned()]);
		assert_eq!(store.category_selection(&ListId::from("a")), Some(vec!["Rock".to_owned()]));
	}

	#[test]
	fn filter_selection_absent_until_written() {
		let store = store();
		assert_eq!(store.filter_selection(), None);
		let state = FilterState::default().with_column(crate::filter::Column::Maybe, true);
		store.set_filter_selection(&state);
		assert_eq!(store.filter_selection(), Some(state));
		assert_eq!(
			store.backend().get_raw("test_filter_selection").as_deref(),
			Some(r#"{"all":false,"yes":false,"no":false,"maybe":true,"pending":false}"#)
		);
	}

	#[test]
	fn user_highlights_are_per_list() {
		let store = store();
		let (a, b) = (ListId::from("a"), ListId::from("b"));
		store.set_user_highlighting(&a, "u7");
		store.set_user_highlighting(&b, "u2");
		store.remove_user_highlighting(&a);
		assert_eq!(store.user_highlighting(&a), None);
		assert_eq!(store.user_highlighting(&b).as_deref(), Some("u2"));
	}

	#[test]
	fn theme_is_raw_and_unprefixed() {
		let store = store();
		assert_eq!(store.theme(), None);
		store.set_theme(ThemeChoice::Dark);
		assert_eq!(store.backend().get_raw("theme").as_deref(), Some("dark"));
		assert_eq!(store.theme(), Some(ThemeChoice::Dark));
		store.backend().set_raw("theme", "sepia");
		assert_eq!(store.theme(), None);
	}
}
