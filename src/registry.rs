use crate::filter::Column;
use multimap::MultiMap;
use std::collections::{BTreeMap, BTreeSet};

/// Identifier embedded in every per-list element id (`mucke-{id}`, `filter-all-{id}`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId(String);

impl ListId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl From<&str> for ListId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<String> for ListId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl std::fmt::Display for ListId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// One rendered row of a list: a user's response, or an empty slot when `user` is absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry {
	pub user: Option<String>,
	/// Name of the category section the entry is rendered in.
	pub category: Option<String>,
	pub column: Option<Column>,
}
impl Entry {
	#[cfg(test)]
	pub fn user(user: &str, category: &str, column: Column) -> Self {
		Self {
			user: Some(user.to_owned()),
			category: Some(category.to_owned()),
			column: Some(column),
		}
	}

	#[cfg(test)]
	pub fn slot(category: &str, column: Column) -> Self {
		Self {
			user: None,
			category: Some(category.to_owned()),
			column: Some(column),
		}
	}
}

pub type Selection = BTreeSet<String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct List {
	pub id: ListId,
	categories: Vec<String>,
	selected: Selection,
	entries: Vec<Entry>,
}

impl List {
	pub fn new(id: impl Into<ListId>) -> Self {
		Self {
			id: id.into(),
			..Default::default()
		}
	}

	pub fn with_categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for category in categories {
			let category = category.into();
			if !self.categories.contains(&category) {
				self.categories.push(category);
			}
		}
		self
	}

	pub fn with_selected<I, S>(mut self, selected: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.set_selected(selected.into_iter().map(Into::into));
		self
	}

	pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
		self.entries.extend(entries);
		self
	}

	pub fn all_categories(&self) -> &[String] {
		&self.categories
	}

	pub fn has_category(&self, label: &str) -> bool {
		self.categories.iter().any(|category| category == label)
	}

	pub fn selected_categories(&self) -> &Selection {
		&self.selected
	}

	/// Replaces the selection, dropping labels this list does not offer.
	pub fn set_selected(&mut self, labels: impl IntoIterator<Item = String>) {
		let selected = labels.into_iter().filter(|label| self.has_category(label)).collect();
		self.selected = selected;
	}

	pub fn set_checked(&mut self, label: &str, checked: bool) {
		if !self.has_category(label) {
			return;
		}
		match checked {
			true => self.selected.insert(label.to_owned()),
			false => self.selected.remove(label),
		};
	}

	pub fn select_all(&mut self) {
		self.selected = self.categories.iter().cloned().collect();
	}

	/// Both an empty and a complete selection mean every section is shown.
	pub fn shows_everything(&self) -> bool {
		self.selected.is_empty() || self.selected.len() == self.categories.len()
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn entry(&self, index: usize) -> Option<&Entry> {
		self.entries.get(index)
	}

	fn occurrences(&self) -> MultiMap<&str, &Entry> {
		self.entries
			.iter()
			.filter_map(|entry| Some((entry.user.as_deref()?, entry)))
			.collect()
	}

	/// Users that occur more than once in this list.
	pub fn highlightable_users(&self) -> BTreeSet<&str> {
		self.occurrences()
			.iter_all()
			.filter(|(_, entries)| entries.len() > 1)
			.map(|(user, _)| *user)
			.collect()
	}

	pub fn is_highlightable(&self, user: &str) -> bool {
		self.occurrences().get_vec(user).map_or(false, |entries| entries.len() > 1)
	}

	/// Labels of the category sections that contain at least one entry of `user`.
	pub fn categories_with_user(&self, user: &str) -> Selection {
		let occurrences = self.occurrences();
		let Some(entries) = occurrences.get_vec(user) else {
			return Selection::new();
		};
		entries.iter().filter_map(|entry| entry.category.clone()).collect()
	}
}

/// Every list found on the page, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
	lists: Vec<List>,
}

impl Registry {
	pub fn new(lists: Vec<List>) -> Self {
		Self { lists }
	}

	pub fn lists(&self) -> &[List] {
		&self.lists
	}

	pub fn lists_mut(&mut self) -> impl Iterator<Item = &mut List> {
		self.lists.iter_mut()
	}

	pub fn ids(&self) -> impl Iterator<Item = &ListId> {
		self.lists.iter().map(|list| &list.id)
	}

	pub fn get(&self, id: &ListId) -> Option<&List> {
		self.lists.iter().find(|list| &list.id == id)
	}

	/// Categories offered by every list. Empty when no list is registered.
	pub fn common_categories(&self) -> BTreeSet<String> {
		let mut lists = self.lists.iter();
		let Some(first) = lists.next() else {
			return BTreeSet::new();
		};
		let mut common = first.categories.iter().cloned().collect::<BTreeSet<_>>();
		for list in lists {
			common.retain(|category| list.has_category(category));
		}
		common
	}

	pub fn selections(&self) -> BTreeMap<ListId, Selection> {
		self.lists
			.iter()
			.map(|list| (list.id.clone(), list.selected.clone()))
			.collect()
	}
}
