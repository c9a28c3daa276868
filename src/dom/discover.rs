use super::{
	ext::{by_id, query_all, ElementExt},
	hooks,
};
use crate::{
	filter::{Column, FilterKind, FilterState},
	registry::{Entry, List, ListId, Registry},
};
use enumset::EnumSet;
use itertools::Itertools;
use web_sys::Element;

/// Builds the registry from the lists rendered on the page, in document order,
/// along with the filter state the first list's checkboxes were rendered with.
pub fn discover() -> (Registry, Option<FilterState>) {
	let ids = query_all(&format!("[id^=\"{}\"]", hooks::LIST_MARKER_PREFIX))
		.into_iter()
		.filter_map(|marker| Some(ListId::from(marker.id().strip_prefix(hooks::LIST_MARKER_PREFIX)?)))
		.collect::<Vec<_>>();
	let controls = ids.first().map(read_filter_controls);
	let lists = ids.into_iter().map(read_list).collect::<Vec<_>>();
	log::debug!(target: "dom", "discovered lists [{}]", lists.iter().map(|list| list.id.as_str()).join(", "));
	(Registry::new(lists), controls)
}

fn read_filter_controls(list: &ListId) -> FilterState {
	FilterState::from_controls(|kind: FilterKind| {
		by_id(&hooks::filter_control(kind, list))
			.and_then(|element| element.as_input())
			.map_or(false, |input| input.checked())
	})
}

fn read_list(id: ListId) -> List {
	let mut list = List::new(id.clone());
	if let Some(menu) = by_id(&hooks::category_menu(&id)) {
		let checkboxes = menu
			.query_all(hooks::CATEGORY_CHECKBOX)
			.into_iter()
			.filter_map(|element| element.as_input())
			.collect::<Vec<_>>();
		let checked = checkboxes
			.iter()
			.filter(|checkbox| checkbox.checked())
			.map(|checkbox| checkbox.value())
			.collect::<Vec<_>>();
		list = list
			.with_categories(checkboxes.iter().map(|checkbox| checkbox.value()).unique())
			.with_selected(checked);
	}
	if let Some(container) = by_id(&hooks::container(&id)) {
		list = list.with_entries(container.query_all(hooks::ENTRY).iter().map(read_entry));
	}
	list
}

fn read_entry(element: &Element) -> Entry {
	Entry {
		user: element.get_attribute(hooks::USER_ID_ATTR),
		category: element
			.closest_element(hooks::CATEGORY_SECTION)
			.and_then(|section| section.get_attribute(hooks::CATEGORY_NAME_ATTR)),
		column: element.closest_element(".column").and_then(|column| column_of(&column)),
	}
}

fn column_of(element: &Element) -> Option<Column> {
	let classes = element.class_list();
	EnumSet::<Column>::all()
		.iter()
		.find(|column| classes.contains(column.class()))
}
