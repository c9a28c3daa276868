//! Theme switcher, persisted accordions and the navbar.
use super::{
	ext::{event_element, query, query_all, ElementExt},
	Error,
};
use crate::{
	accordion,
	navbar::{self, ScrollTracker},
	storage::{LocalBackend, Store},
	theme::{self, ThemeChoice, ThemeUpdate, PREFERS_DARK_QUERY},
};
use gloo_events::EventListener;
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MediaQueryList, Window};

fn apply_theme(update: ThemeUpdate) {
	let Some(html) = gloo_utils::document().document_element() else {
		return;
	};
	let theme = update.theme.attribute();
	let _ = html.set_attribute("data-bs-theme", theme);
	html.set_class("dark", theme == "dark");
}

fn show_active_choice(choice: ThemeChoice, focus: bool) {
	let Some(switcher) = query("#bd-theme") else {
		return;
	};
	let value = choice.to_string();
	if let Some(icon) = query(".theme-icon-active") {
		icon.set_class_name(&format!("bi {} theme-icon-active", choice.icon_class()));
	}
	for button in query_all("[data-bs-theme-value]") {
		let active = button.get_attribute("data-bs-theme-value").as_deref() == Some(value.as_str());
		button.set_class("active", active);
		let _ = button.set_attribute("aria-pressed", if active { "true" } else { "false" });
	}
	if let Some(text) = query("#bd-theme-text").and_then(|text| text.text_content()) {
		let _ = switcher.set_attribute("aria-label", &format!("{text} ({value})"));
	}
	if focus {
		if let Some(switcher) = switcher.dyn_ref::<HtmlElement>() {
			let _ = switcher.focus();
		}
	}
}

pub fn mount_theme(window: &Window, store: Store<LocalBackend>) -> Result<(), Error> {
	let prefers_dark: MediaQueryList = match window.match_media(PREFERS_DARK_QUERY) {
		Ok(Some(list)) => list,
		_ => return Err(Error::MediaQuery(PREFERS_DARK_QUERY)),
	};
	let update = theme::current(&store, prefers_dark.matches());
	apply_theme(update);
	show_active_choice(update.choice, false);

	{
		let store = store.clone();
		let media = prefers_dark.clone();
		EventListener::new(&prefers_dark, "change", move |_| {
			if let Some(update) = theme::on_system_change(&store, media.matches()) {
				apply_theme(update);
				show_active_choice(update.choice, false);
			}
		})
		.forget();
	}

	for button in query_all("[data-bs-theme-value]") {
		let store = store.clone();
		let media = prefers_dark.clone();
		EventListener::new(&button, "click", move |event| {
			let Some(button) = event_element(event).and_then(|target| target.closest_element("[data-bs-theme-value]")) else {
				return;
			};
			let choice = button.get_attribute("data-bs-theme-value").map(|value| value.parse::<ThemeChoice>());
			match choice {
				Some(Ok(choice)) => {
					let update = theme::choose(&store, choice, media.matches());
					log::debug!(target: "theme", "chose {update:?}");
					apply_theme(update);
					show_active_choice(choice, true);
				}
				Some(Err(err)) => log::warn!(target: "theme", "{err}"),
				None => {}
			}
		})
		.forget();
	}
	Ok(())
}

pub fn mount_accordions(store: Store<LocalBackend>) {
	for section in query_all(".accordion-collapse") {
		let id = section.id();
		if id.is_empty() {
			continue;
		}
		let attributes = accordion::restore(&store, &id);
		section.set_class("show", attributes.show);
		let _ = section.set_attribute("aria-expanded", attributes.aria_expanded);
		if let Some(header) = query(&format!("[data-bs-target=\"#{id}\"]")) {
			header.set_class("collapsed", attributes.header_collapsed);
		}

		for (event_type, is_open) in [("shown.bs.collapse", true), ("hidden.bs.collapse", false)] {
			let store = store.clone();
			let id = id.clone();
			EventListener::new(&section, event_type, move |event| {
				let target_id = event_element(event).map(|target| target.id()).unwrap_or_default();
				accordion::on_transition(&store, &id, &target_id, is_open);
			})
			.forget();
		}
	}
}

pub fn mount_navbar(window: &Window) {
	let Some(navbar) = query(".navbar").and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok()) else {
		return;
	};

	let update_height = {
		let navbar = navbar.clone();
		move || {
			let Some(html) = gloo_utils::document().document_element() else {
				return;
			};
			let Some(html) = html.dyn_ref::<HtmlElement>() else {
				return;
			};
			let height = navbar::header_height_property(navbar.offset_height());
			let _ = html.style().set_property("--header-height", &height);
		}
	};
	update_height();
	for event_type in ["load", "resize"] {
		let update_height = update_height.clone();
		EventListener::new(window, event_type, move |_| update_height()).forget();
	}

	let tracker = Rc::new(Cell::new(ScrollTracker::default()));
	let source = window.clone();
	EventListener::new(window, "scroll", move |_| {
		let top = source.scroll_y().unwrap_or_default();
		let mut scroll = tracker.get();
		let classes = scroll.scrolled(top);
		tracker.set(scroll);
		navbar.set_class("scroll-down", classes.scroll_down);
		navbar.set_class("scroll-up", classes.scroll_up);
	})
	.forget();
}
