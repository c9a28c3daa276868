//! Category selection shared between lists.
//!
//! Categories offered by every list are kept in sync: selecting one on any list
//! selects it everywhere. Categories only some lists offer stay local to the list
//! they were changed on.
use crate::{
	registry::{List, ListId, Registry, Selection},
	storage::{Backend, Store},
};

/// Quick-select gestures on a category label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
	/// Click, or a tap released without dragging.
	Toggle,
	/// Double click, or a long press.
	SelectOnly,
}

/// Which category sections of a list are visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionFilter {
	All,
	Only(Selection),
}
impl SectionFilter {
	pub fn shows(&self, category: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(selection) => selection.contains(category),
		}
	}
}

/// Restores each list's persisted selection; lists with nothing to restore
/// and nothing checked start with every category selected. A persisted
/// selection naming only categories the list no longer offers counts as nothing.
pub fn initialize<B: Backend>(registry: &mut Registry, store: &Store<B>) {
	for list in registry.lists_mut() {
		if let Some(labels) = store.category_selection(&list.id) {
			if !labels.is_empty() {
				log::debug!(target: "category", "restoring {} for list {}", labels.len(), list.id);
				list.set_selected(labels);
			}
		}
		if list.selected_categories().is_empty() {
			list.select_all();
		}
	}
	persist(registry, store);
}

/// Applies a selection made on `owner`.
///
/// Common categories follow `labels` on every list, except that an empty
/// selection selects every common category. Local categories of `owner`
/// follow `labels` when it is non-empty. Other lists' local categories are untouched.
pub fn set_selection(registry: &mut Registry, owner: &ListId, labels: &Selection) {
	let common = registry.common_categories();
	for list in registry.lists_mut() {
		let is_owner = &list.id == owner;
		for category in list.all_categories().to_vec() {
			if common.contains(&category) {
				list.set_checked(&category, labels.is_empty() || labels.contains(&category));
			} else if is_owner && !labels.is_empty() {
				list.set_checked(&category, labels.contains(&category));
			}
		}
	}
}

pub fn select_all(registry: &mut Registry, owner: &ListId) {
	let Some(list) = registry.get(owner) else {
		return;
	};
	let labels = list.all_categories().iter().cloned().collect();
	set_selection(registry, owner, &labels);
}

pub fn apply_shortcut(registry: &mut Registry, owner: &ListId, category: &str, shortcut: Shortcut) {
	let Some(list) = registry.get(owner) else {
		return;
	};
	if !list.has_category(category) {
		return;
	}
	let labels = match shortcut {
		Shortcut::Toggle => {
			let mut labels = list.selected_categories().clone();
			if !labels.remove(category) {
				labels.insert(category.to_owned());
			}
			labels
		}
		Shortcut::SelectOnly => Selection::from([category.to_owned()]),
	};
	set_selection(registry, owner, &labels);
}

/// Empty and complete selections both show every section.
pub fn section_filter(list: &List) -> SectionFilter {
	match list.shows_everything() {
		true => SectionFilter::All,
		false => SectionFilter::Only(list.selected_categories().clone()),
	}
}

pub fn persist<B: Backend>(registry: &Registry, store: &Store<B>) {
	for list in registry.lists() {
		store.set_category_selection(&list.id, list.selected_categories());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::memory::MemoryBackend;

	fn labels(values: &[&str]) -> Selection {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn music() -> Registry {
		Registry::new(vec![
			List::new("l1").with_categories(["Rock", "Jazz"]).with_selected(["Rock", "Jazz"]),
			List::new("l2").with_categories(["Rock", "Funk"]).with_selected(["Rock", "Funk"]),
		])
	}

	fn selected(registry: &Registry, id: &str) -> Selection {
		registry.get(&ListId::from(id)).unwrap().selected_categories().clone()
	}

	#[test]
	fn common_category_syncs_local_stays() {
		let mut registry = music();
		set_selection(&mut registry, &ListId::from("l1"), &labels(&["Rock"]));
		assert_eq!(selected(&registry, "l1"), labels(&["Rock"]));
		assert_eq!(selected(&registry, "l2"), labels(&["Funk", "Rock"]));

		let l1 = registry.get(&ListId::from("l1")).unwrap();
		assert_eq!(section_filter(l1), SectionFilter::Only(labels(&["Rock"])));
		let l2 = registry.get(&ListId::from("l2")).unwrap();
		assert_eq!(section_filter(l2), SectionFilter::All);
		assert!(section_filter(l2).shows("Funk"));
	}

	#[test]
	fn deselecting_common_hides_it_everywhere() {
		let mut registry = music();
		set_selection(&mut registry, &ListId::from("l2"), &labels(&["Funk"]));
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz"]));
		assert_eq!(selected(&registry, "l2"), labels(&["Funk"]));
	}

	#[test]
	fn empty_selection_selects_common_and_keeps_local() {
		let mut registry = Registry::new(vec![
			List::new("l1").with_categories(["A", "B", "C"]).with_selected(["C"]),
			List::new("l2").with_categories(["A", "B", "D"]).with_selected(["D"]),
		]);
		set_selection(&mut registry, &ListId::from("l1"), &Selection::new());
		assert_eq!(selected(&registry, "l1"), labels(&["A", "B", "C"]));
		assert_eq!(selected(&registry, "l2"), labels(&["A", "B", "D"]));

		let mut registry = Registry::new(vec![
			List::new("l1").with_categories(["A", "B", "C"]).with_selected(["A"]),
			List::new("l2").with_categories(["A", "B", "D"]).with_selected(["A"]),
		]);
		set_selection(&mut registry, &ListId::from("l1"), &Selection::new());
		assert_eq!(selected(&registry, "l1"), labels(&["A", "B"]));
		assert_eq!(selected(&registry, "l2"), labels(&["A", "B"]));
	}

	#[test]
	fn toggle_shortcut_flips_one() {
		let mut registry = music();
		let l1 = ListId::from("l1");
		apply_shortcut(&mut registry, &l1, "Jazz", Shortcut::Toggle);
		assert_eq!(selected(&registry, "l1"), labels(&["Rock"]));
		apply_shortcut(&mut registry, &l1, "Jazz", Shortcut::Toggle);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz", "Rock"]));
		apply_shortcut(&mut registry, &l1, "Polka", Shortcut::Toggle);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz", "Rock"]));
	}

	#[test]
	fn select_only_shortcut_replaces_selection() {
		let mut registry = music();
		apply_shortcut(&mut registry, &ListId::from("l1"), "Jazz", Shortcut::SelectOnly);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz"]));
		assert_eq!(selected(&registry, "l2"), labels(&["Funk"]));

		apply_shortcut(&mut registry, &ListId::from("l2"), "Rock", Shortcut::SelectOnly);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz", "Rock"]));
		assert_eq!(selected(&registry, "l2"), labels(&["Rock"]));

		select_all(&mut registry, &ListId::from("l2"));
		assert_eq!(selected(&registry, "l2"), labels(&["Funk", "Rock"]));
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz", "Rock"]));
	}

	#[test]
	fn visibility_is_idempotent() {
		let list = List::new("l1").with_categories(["Rock", "Jazz"]).with_selected(["Jazz"]);
		assert_eq!(section_filter(&list), section_filter(&list));
		assert!(!section_filter(&list).shows("Rock"));
		let empty = List::new("l1").with_categories(["Rock", "Jazz"]);
		assert_eq!(section_filter(&empty), SectionFilter::All);
	}

	#[test]
	fn initialize_restores_or_selects_all() {
		let store = Store::new("test_", MemoryBackend::default());
		store.set_category_selection(&ListId::from("l1"), &["Jazz".to_owned(), "Gone".to_owned()]);
		let mut registry = Registry::new(vec![
			List::new("l1").with_categories(["Rock", "Jazz"]),
			List::new("l2").with_categories(["Rock", "Funk"]),
			List::new("l3").with_categories(["Rock", "Soul"]).with_selected(["Soul"]),
		]);
		initialize(&mut registry, &store);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz"]));
		assert_eq!(selected(&registry, "l2"), labels(&["Funk", "Rock"]));
		assert_eq!(selected(&registry, "l3"), labels(&["Soul"]));
		assert_eq!(store.category_selection(&ListId::from("l2")), Some(vec!["Funk".to_owned(), "Rock".to_owned()]));
	}

	#[test]
	fn stale_persisted_selection_selects_all() {
		let store = Store::new("test_", MemoryBackend::default());
		store.set_category_selection(&ListId::from("l1"), &["Gone".to_owned()]);
		let mut registry = Registry::new(vec![List::new("l1").with_categories(["Rock", "Jazz"])]);
		initialize(&mut registry, &store);
		assert_eq!(selected(&registry, "l1"), labels(&["Jazz", "Rock"]));
		assert_eq!(store.category_selection(&ListId::from("l1")), Some(vec!["Jazz".to_owned(), "Rock".to_owned()]));
	}
}
