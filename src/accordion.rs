use crate::storage::{Backend, Store};

/// Attributes a collapsible section and its header carry for a given open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionAttributes {
	pub show: bool,
	pub aria_expanded: &'static str,
	pub header_collapsed: bool,
}
impl AccordionAttributes {
	pub fn new(is_open: bool) -> Self {
		Self {
			show: is_open,
			aria_expanded: if is_open { "true" } else { "false" },
			header_collapsed: !is_open,
		}
	}
}

pub fn restore<B: Backend>(store: &Store<B>, section_id: &str) -> AccordionAttributes {
	AccordionAttributes::new(store.accordion_status(section_id))
}

/// Records a finished open/close transition. Collapse events bubble, so ones
/// raised by a nested section (`target_id` differs) are ignored.
pub fn on_transition<B: Backend>(store: &Store<B>, section_id: &str, target_id: &str, is_open: bool) -> bool {
	if target_id != section_id {
		return false;
	}
	store.set_accordion_status(section_id, is_open);
	true
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::memory::MemoryBackend;

	#[test]
	fn closed_until_opened() {
		let store = Store::new("test_", MemoryBackend::default());
		assert_eq!(restore(&store, "faq"), AccordionAttributes::new(false));
		assert!(on_transition(&store, "faq", "faq", true));
		let attributes = restore(&store, "faq");
		assert!(attributes.show);
		assert_eq!(attributes.aria_expanded, "true");
		assert!(!attributes.header_collapsed);
	}

	#[test]
	fn nested_events_are_ignored() {
		let store = Store::new("test_", MemoryBackend::default());
		assert!(!on_transition(&store, "outer", "inner", true));
		assert!(!store.accordion_status("outer"));
		assert!(!store.accordion_status("inner"));
	}
}
