use super::{
	ext::{by_id, ElementExt},
	hooks,
};
use crate::{
	category::SectionFilter,
	filter::{Column, FilterKind, FilterState},
	page::View,
	registry::{List, ListId},
};
use enumset::EnumSet;

/// Writes page state into the server-rendered markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomView;

impl View for DomView {
	fn show_filter(&self, list: &ListId, state: &FilterState) {
		for kind in FilterKind::iter() {
			if let Some(input) = by_id(&hooks::filter_control(kind, list)).and_then(|element| element.as_input()) {
				input.set_checked(state.get(kind));
			}
		}
		let Some(container) = by_id(&hooks::container(list)) else {
			return;
		};
		let visible = state.visible_columns();
		for column in EnumSet::<Column>::all() {
			for element in container.query_all(&format!(".column.{}", column.class())) {
				element.set_class(hooks::HIDDEN, !visible.contains(column));
			}
		}
		for element in container.query_all(hooks::FILL_ENTRY) {
			element.set_class("hidden", state.hides_fill());
		}
	}

	fn show_selection(&self, list: &List) {
		let Some(menu) = by_id(&hooks::category_menu(&list.id)) else {
			return;
		};
		for checkbox in menu.query_all(hooks::CATEGORY_CHECKBOX) {
			let Some(input) = checkbox.as_input() else {
				continue;
			};
			input.set_checked(list.selected_categories().contains(&input.value()));
		}
	}

	fn show_sections(&self, list: &List, sections: &SectionFilter) {
		let Some(container) = by_id(&hooks::container(&list.id)) else {
			return;
		};
		for section in container.query_all(hooks::CATEGORY_SECTION) {
			let name = section.get_attribute(hooks::CATEGORY_NAME_ATTR).unwrap_or_default();
			section.set_class(hooks::HIDDEN, !sections.shows(&name));
		}
	}

	fn show_users(&self, list: &List, marked: Option<&str>) {
		let Some(container) = by_id(&hooks::container(&list.id)) else {
			return;
		};
		let highlightable = list.highlightable_users();
		for element in container.query_all(hooks::USER_ENTRY) {
			let Some(user) = element.get_attribute(hooks::USER_ID_ATTR) else {
				continue;
			};
			element.set_class(hooks::HIGHLIGHTED, marked == Some(user.as_str()));
			element.set_class(hooks::CLICKABLE, highlightable.contains(user.as_str()));
		}
	}
}
