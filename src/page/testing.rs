use super::View;
use crate::{
	category::SectionFilter,
	filter::FilterState,
	registry::{List, ListId, Selection},
};
use std::{cell::RefCell, collections::BTreeMap};

/// Keeps the last state rendered for each list.
#[derive(Debug, Default)]
pub struct RecordingView {
	filters: RefCell<BTreeMap<ListId, FilterState>>,
	checked: RefCell<BTreeMap<ListId, Selection>>,
	selection_renders: RefCell<BTreeMap<ListId, usize>>,
	sections: RefCell<BTreeMap<ListId, SectionFilter>>,
	marked: RefCell<BTreeMap<ListId, Option<String>>>,
}

impl RecordingView {
	pub fn filter(&self, list: &ListId) -> Option<FilterState> {
		self.filters.borrow().get(list).copied()
	}

	pub fn checked(&self, list: &ListId) -> Option<Selection> {
		self.checked.borrow().get(list).cloned()
	}

	/// How many times the list's checkboxes were written.
	pub fn selection_renders(&self, list: &ListId) -> usize {
		self.selection_renders.borrow().get(list).copied().unwrap_or_default()
	}

	pub fn sections(&self, list: &ListId) -> Option<SectionFilter> {
		self.sections.borrow().get(list).cloned()
	}

	pub fn marked(&self, list: &ListId) -> Option<Option<String>> {
		self.marked.borrow().get(list).cloned()
	}
}

impl View for RecordingView {
	fn show_filter(&self, list: &ListId, state: &FilterState) {
		self.filters.borrow_mut().insert(list.clone(), *state);
	}

	fn show_selection(&self, list: &List) {
		*self.selection_renders.borrow_mut().entry(list.id.clone()).or_default() += 1;
		self.checked
			.borrow_mut()
			.insert(list.id.clone(), list.selected_categories().clone());
	}

	fn show_sections(&self, list: &List, sections: &SectionFilter) {
		self.sections.borrow_mut().insert(list.id.clone(), sections.clone());
	}

	fn show_users(&self, list: &List, marked: Option<&str>) {
		self.marked
			.borrow_mut()
			.insert(list.id.clone(), marked.map(str::to_owned));
	}
}
