use super::{
	dispatch,
	ext::{by_id, event_element, ElementExt},
	hooks, SharedPage,
};
use crate::{
	filter::FilterKind,
	page::Action,
	registry::{ListId, Selection},
};
use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Element;

/// Wires filter checkboxes, category menus and user entries to page actions.
pub fn attach(page: &SharedPage, hover: bool) {
	let ids = page.borrow().registry().ids().cloned().collect::<Vec<_>>();
	for list in &ids {
		attach_filters(page, list);
		attach_category_menu(page, list);
		attach_entries(page, list, hover);
	}
	attach_outside_click(page);
}

fn attach_filters(page: &SharedPage, list: &ListId) {
	for kind in FilterKind::iter() {
		let Some(input) = by_id(&hooks::filter_control(kind, list)).and_then(|element| element.as_input()) else {
			continue;
		};
		let page = page.clone();
		let control = input.clone();
		EventListener::new(&input, "change", move |_| {
			dispatch(&page, Action::FilterChanged { kind, checked: control.checked() });
		})
		.forget();
	}
}

fn attach_category_menu(page: &SharedPage, list: &ListId) {
	let Some(menu) = by_id(&hooks::category_menu(list)) else {
		return;
	};
	{
		let page = page.clone();
		let list = list.clone();
		let source = menu.clone();
		EventListener::new(&menu, "change", move |event| {
			let is_checkbox = event_element(event).map_or(false, |target| target.matches(hooks::CATEGORY_CHECKBOX).unwrap_or(false));
			if !is_checkbox {
				return;
			}
			let selected = checked_labels(&source);
			dispatch(&page, Action::CategoriesChanged { list: list.clone(), selected });
		})
		.forget();
	}
	for button in menu.query_all(hooks::CATEGORY_SELECT_ALL) {
		let page = page.clone();
		let list = list.clone();
		EventListener::new_with_options(&button, "click", EventListenerOptions::enable_prevent_default(), move |event| {
			event.prevent_default();
			dispatch(&page, Action::SelectAllCategories { list: list.clone() });
		})
		.forget();
	}
}

fn checked_labels(menu: &Element) -> Selection {
	menu.query_all(hooks::CATEGORY_CHECKBOX)
		.into_iter()
		.filter_map(|element| element.as_input())
		.filter(|input| input.checked())
		.map(|input| input.value())
		.collect()
}

fn attach_entries(page: &SharedPage, list: &ListId, hover: bool) {
	let Some(container) = by_id(&hooks::container(list)) else {
		return;
	};
	for (entry, element) in container.query_all(hooks::ENTRY).into_iter().enumerate() {
		{
			let page = page.clone();
			let list = list.clone();
			EventListener::new(&element, "click", move |event| {
				event.stop_propagation();
				dispatch(&page, Action::EntryActivated { list: list.clone(), entry });
			})
			.forget();
		}
		if !hover || element.get_attribute(hooks::USER_ID_ATTR).is_none() {
			continue;
		}
		{
			let page = page.clone();
			let list = list.clone();
			EventListener::new(&element, "mouseenter", move |_| {
				dispatch(&page, Action::UserEntered { list: list.clone(), entry });
			})
			.forget();
		}
		{
			let page = page.clone();
			let list = list.clone();
			EventListener::new(&element, "mouseleave", move |_| {
				dispatch(&page, Action::UserLeft { list: list.clone(), entry });
			})
			.forget();
		}
	}
}

fn attach_outside_click(page: &SharedPage) {
	let Some(body) = gloo_utils::document().body() else {
		return;
	};
	let page = page.clone();
	EventListener::new(&body, "click", move |event| {
		let Some(target) = event_element(event) else {
			return;
		};
		// category controls clear the highlight through their own change event
		let handled_elsewhere = [hooks::ENTRY, hooks::CATEGORY_MENU]
			.iter()
			.any(|selector| target.closest_element(selector).is_some());
		if !handled_elsewhere {
			dispatch(&page, Action::ClickedOutside);
		}
	})
	.forget();
}
