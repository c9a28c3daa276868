use crate::{
	category::{self, SectionFilter, Shortcut},
	filter::{FilterKind, FilterState},
	highlight::HighlightController,
	registry::{List, ListId, Registry, Selection},
	storage::{Backend, Store},
};

#[cfg(test)]
pub mod testing;

/// Where the page state is pushed after every change. Implementations must
/// tolerate missing elements; rendering the same state twice is a no-op.
pub trait View {
	/// Filter checkbox states and column visibility of one list.
	fn show_filter(&self, list: &ListId, state: &FilterState);
	/// Checked categories, i.e. the list's selection.
	fn show_selection(&self, list: &List);
	/// Which category sections of the list are visible.
	fn show_sections(&self, list: &List, sections: &SectionFilter);
	/// Marks every occurrence of `marked` within the list and flags highlightable entries.
	fn show_users(&self, list: &List, marked: Option<&str>);
}

/// Everything a DOM listener can report.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	FilterChanged { kind: FilterKind, checked: bool },
	/// A category checkbox changed; `selected` is what the list's menu now shows checked.
	CategoriesChanged { list: ListId, selected: Selection },
	SelectAllCategories { list: ListId },
	CategoryShortcut { list: ListId, category: String, shortcut: Shortcut },
	UserEntered { list: ListId, entry: usize },
	UserLeft { list: ListId, entry: usize },
	/// A user or slot entry was clicked.
	EntryActivated { list: ListId, entry: usize },
	ClickedOutside,
}

/// Owns the registry, the store, and the filter, category, and highlight state.
pub struct Page<B, V> {
	registry: Registry,
	store: Store<B>,
	view: V,
	filter: FilterState,
	highlight: HighlightController,
}

impl<B: Backend, V: View> Page<B, V> {
	/// Restores persisted state and renders once.
	///
	/// A persisted filter wins over `controls`, the state the page's filter
	/// checkboxes were rendered with.
	pub fn mount(mut registry: Registry, store: Store<B>, view: V, controls: Option<FilterState>) -> Self {
		let filter = match store.filter_selection() {
			Some(persisted) => persisted.normalized(),
			None => controls.unwrap_or_default().normalized(),
		};
		category::initialize(&mut registry, &store);
		let mut highlight = HighlightController::default();
		highlight.restore(&mut registry, &store);
		category::persist(&registry, &store);

		log::info!(
			target: "page",
			"mounted {} list(s), {} common categories",
			registry.lists().len(),
			registry.common_categories().len()
		);
		let page = Self {
			registry,
			store,
			view,
			filter,
			highlight,
		};
		page.render_filters();
		page.render_categories();
		page
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	#[cfg(test)]
	pub fn store(&self) -> &Store<B> {
		&self.store
	}

	#[cfg(test)]
	pub fn view(&self) -> &V {
		&self.view
	}

	#[cfg(test)]
	pub fn filter(&self) -> &FilterState {
		&self.filter
	}

	#[cfg(test)]
	pub fn highlight(&self) -> &HighlightController {
		&self.highlight
	}

	pub fn dispatch(&mut self, action: Action) {
		log::debug!(target: "page", "{action:?}");
		match action {
			Action::FilterChanged { kind, checked } => {
				self.filter = self.filter.with(kind, checked);
				self.store.set_filter_selection(&self.filter);
				self.render_filters();
			}
			Action::CategoriesChanged { list, selected } => {
				self.highlight.clear(&mut self.registry, &self.store, false);
				category::set_selection(&mut self.registry, &list, &selected);
				self.categories_changed();
			}
			Action::SelectAllCategories { list } => {
				self.highlight.clear(&mut self.registry, &self.store, false);
				category::select_all(&mut self.registry, &list);
				self.categories_changed();
			}
			Action::CategoryShortcut {
				list,
				category,
				shortcut,
			} => {
				self.highlight.clear(&mut self.registry, &self.store, false);
				category::apply_shortcut(&mut self.registry, &list, &category, shortcut);
				self.categories_changed();
			}
			Action::UserEntered { list, entry } => {
				if self.highlight.enter(&self.registry, &list, entry) {
					self.render_users();
				}
			}
			Action::UserLeft { .. } => {
				if self.highlight.leave() {
					self.render_users();
				}
			}
			Action::EntryActivated { list, entry } => {
				self.highlight.activate(&mut self.registry, &self.store, &list, entry);
				self.categories_changed();
			}
			Action::ClickedOutside => {
				if self.highlight.marked().is_none() {
					return;
				}
				self.highlight.clear(&mut self.registry, &self.store, false);
				self.highlight.leave();
				// Checkboxes are left alone: the click may be the one toggling them.
				category::persist(&self.registry, &self.store);
				self.render_sections();
			}
		}
	}

	fn categories_changed(&self) {
		category::persist(&self.registry, &self.store);
		self.render_categories();
	}

	fn render_filters(&self) {
		for list in self.registry.ids() {
			self.view.show_filter(list, &self.filter);
		}
	}

	/// Sections follow the selection, except while a highlight is committed:
	/// then each list shows exactly the sections containing the highlighted user.
	pub fn section_filter(&self, list: &List) -> SectionFilter {
		match self.highlight.committed() {
			Some(focus) => SectionFilter::Only(list.categories_with_user(&focus.user)),
			None => category::section_filter(list),
		}
	}

	fn render_categories(&self) {
		for list in self.registry.lists() {
			self.view.show_selection(list);
		}
		self.render_sections();
	}

	fn render_sections(&self) {
		for list in self.registry.lists() {
			self.view.show_sections(list, &self.section_filter(list));
		}
		self.render_users();
	}

	fn render_users(&self) {
		let marked = self.highlight.marked();
		for list in self.registry.lists() {
			let user = marked.filter(|focus| focus.list == list.id).map(|focus| focus.user.as_str());
			self.view.show_users(list, user);
		}
	}
}
