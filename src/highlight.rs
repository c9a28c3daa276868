use crate::{
	registry::{ListId, Registry, Selection},
	storage::{Backend, Store},
};
use std::collections::BTreeMap;

/// A user singled out within one list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focus {
	pub user: String,
	pub list: ListId,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum HighlightState {
	#[default]
	Idle,
	/// Shown while the pointer rests on an occurrence.
	Transient(Focus),
	/// Set by clicking an occurrence; narrows every list to the user's categories.
	Committed {
		focus: Focus,
		/// Entry index that was clicked to commit.
		anchor: usize,
		/// Selections from before the highlight, when one was captured on this page load.
		snapshot: Option<BTreeMap<ListId, Selection>>,
	},
}

#[derive(Debug, Default)]
pub struct HighlightController {
	state: HighlightState,
}

impl HighlightController {
	#[cfg(test)]
	pub fn state(&self) -> &HighlightState {
		&self.state
	}

	/// The user whose occurrences are currently marked.
	pub fn marked(&self) -> Option<&Focus> {
		match &self.state {
			HighlightState::Idle => None,
			HighlightState::Transient(focus) => Some(focus),
			HighlightState::Committed { focus, .. } => Some(focus),
		}
	}

	pub fn committed(&self) -> Option<&Focus> {
		match &self.state {
			HighlightState::Committed { focus, .. } => Some(focus),
			_ => None,
		}
	}

	fn highlightable_focus(registry: &Registry, list_id: &ListId, index: usize) -> Option<Focus> {
		let list = registry.get(list_id)?;
		let user = list.entry(index)?.user.as_deref()?;
		list.is_highlightable(user).then(|| Focus {
			user: user.to_owned(),
			list: list_id.clone(),
		})
	}

	/// Pointer entered an entry. Returns whether anything changed.
	pub fn enter(&mut self, registry: &Registry, list: &ListId, index: usize) -> bool {
		if self.committed().is_some() {
			return false;
		}
		let Some(focus) = Self::highlightable_focus(registry, list, index) else {
			return false;
		};
		self.state = HighlightState::Transient(focus);
		true
	}

	pub fn leave(&mut self) -> bool {
		match self.state {
			HighlightState::Transient(_) => {
				self.state = HighlightState::Idle;
				true
			}
			_ => false,
		}
	}

	/// An entry was clicked: commits, toggles off, or clears depending on what was hit.
	pub fn activate<B: Backend>(&mut self, registry: &mut Registry, store: &Store<B>, list: &ListId, index: usize) {
		let Some(focus) = Self::highlightable_focus(registry, list, index) else {
			// slots and users that only occur once
			self.clear(registry, store, false);
			return;
		};
		match &mut self.state {
			HighlightState::Committed {
				focus: current, anchor, ..
			} if *current == focus => {
				if *anchor == index {
					self.clear(registry, store, true);
				} else {
					*anchor = index;
				}
			}
			HighlightState::Committed { snapshot, .. } => {
				let snapshot = snapshot.take();
				self.commit(registry, store, focus, index, snapshot);
			}
			_ => {
				let snapshot = Some(registry.selections());
				self.commit(registry, store, focus, index, snapshot);
			}
		}
	}

	fn commit<B: Backend>(
		&mut self,
		registry: &mut Registry,
		store: &Store<B>,
		focus: Focus,
		anchor: usize,
		snapshot: Option<BTreeMap<ListId, Selection>>,
	) {
		log::debug!(target: "highlight", "highlighting {:?} in list {}", focus.user, focus.list);
		for list in registry.lists_mut() {
			let categories = list.categories_with_user(&focus.user);
			list.set_selected(categories);
		}
		for list_id in registry.ids() {
			if *list_id != focus.list {
				store.remove_user_highlighting(list_id);
			}
		}
		store.set_user_highlighting(&focus.list, &focus.user);
		self.state = HighlightState::Committed {
			focus,
			anchor,
			snapshot,
		};
	}

	/// Drops any highlight. With `restore`, a committed highlight puts back
	/// the selections captured when it was made.
	pub fn clear<B: Backend>(&mut self, registry: &mut Registry, store: &Store<B>, restore: bool) {
		match std::mem::take(&mut self.state) {
			HighlightState::Idle | HighlightState::Transient(_) => {}
			HighlightState::Committed { focus, snapshot, .. } => {
				log::debug!(target: "highlight", "clearing {:?} in list {}", focus.user, focus.list);
				store.remove_user_highlighting(&focus.list);
				if let (true, Some(snapshot)) = (restore, snapshot) {
					for list in registry.lists_mut() {
						if let Some(selection) = snapshot.get(&list.id) {
							list.set_selected(selection.iter().cloned());
						}
					}
				}
			}
		}
	}

	/// Re-applies the persisted highlight of the first list whose user is still
	/// highlightable there. No snapshot exists across a reload.
	pub fn restore<B: Backend>(&mut self, registry: &mut Registry, store: &Store<B>) {
		let persisted = store.all_user_highlightings();
		let found = registry.lists().iter().find_map(|list| {
			let user = persisted.get(list.id.as_str())?;
			let index = list.entries().iter().position(|entry| entry.user.as_ref() == Some(user))?;
			list.is_highlightable(user).then(|| (list.id.clone(), user.clone(), index))
		});
		let Some((list, user, index)) = found else {
			for list_id in registry.ids() {
				store.remove_user_highlighting(list_id);
			}
			return;
		};
		self.commit(registry, store, Focus { user, list }, index, None);
	}
}
