//! Quick-select gestures on category labels and checkboxes.
//!
//! Clicking a label toggles just that category, double clicking it selects it
//! alone. On touch screens a tap toggles and a long press selects alone.
use super::{
	dispatch,
	ext::{by_id, ElementExt},
	hooks, SharedPage,
};
use crate::{
	category::Shortcut,
	gesture::{Press, PressGesture, LONG_PRESS_MS},
	page::Action,
	registry::ListId,
};
use fluvio_wasm_timer::Instant;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use web_sys::Element;

/// What releasing a press on the element does when no long press fired.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Target {
	/// Labels toggle their category themselves and suppress the browser's toggle.
	Label,
	/// Checkboxes are toggled by the browser.
	Checkbox,
}

struct Binding {
	page: SharedPage,
	list: ListId,
	category: String,
	target: Target,
	gesture: RefCell<PressGesture>,
	timer: RefCell<Option<Timeout>>,
}

impl Binding {
	fn fire(&self, shortcut: Shortcut) {
		log::debug!(target: "shortcut", "{shortcut:?} {} on list {}", self.category, self.list);
		dispatch(
			&self.page,
			Action::CategoryShortcut {
				list: self.list.clone(),
				category: self.category.clone(),
				shortcut,
			},
		);
	}
}

pub fn attach(page: &SharedPage) {
	let ids = page.borrow().registry().ids().cloned().collect::<Vec<_>>();
	for list in ids {
		let Some(menu) = by_id(&hooks::category_menu(&list)) else {
			continue;
		};
		for label in menu.query_all(hooks::CATEGORY_SHORTCUT) {
			let Some(checkbox) = label
				.get_attribute("for")
				.and_then(|id| by_id(&id))
				.and_then(|element| element.as_input())
			else {
				continue;
			};
			bind(&label, page, &list, checkbox.value(), Target::Label);
		}
		for checkbox in menu.query_all(hooks::CATEGORY_CHECKBOX) {
			let Some(input) = checkbox.as_input() else {
				continue;
			};
			bind(&checkbox, page, &list, input.value(), Target::Checkbox);
		}
	}
}

fn bind(element: &Element, page: &SharedPage, list: &ListId, category: String, target: Target) {
	let press = Rc::new(Binding {
		page: page.clone(),
		list: list.clone(),
		category,
		target,
		gesture: RefCell::new(PressGesture::default()),
		timer: RefCell::new(None),
	});

	if target == Target::Label {
		let press = press.clone();
		EventListener::new_with_options(element, "click", EventListenerOptions::enable_prevent_default(), move |event| {
			event.prevent_default();
			event.stop_propagation();
			if press.gesture.borrow().accepts_mouse(Instant::now()) {
				press.fire(Shortcut::Toggle);
			}
		})
		.forget();
	}
	{
		let press = press.clone();
		EventListener::new_with_options(element, "dblclick", EventListenerOptions::enable_prevent_default(), move |event| {
			event.prevent_default();
			event.stop_propagation();
			if press.gesture.borrow().accepts_mouse(Instant::now()) {
				press.fire(Shortcut::SelectOnly);
			}
		})
		.forget();
	}
	{
		let press = press.clone();
		EventListener::new(element, "touchstart", move |_| {
			press.gesture.borrow_mut().start();
			let fired = press.clone();
			let timer = Timeout::new(LONG_PRESS_MS, move || {
				let shortcut = fired.gesture.borrow_mut().elapsed();
				if let Some(shortcut) = shortcut {
					fired.fire(shortcut);
				}
			});
			*press.timer.borrow_mut() = Some(timer);
		})
		.forget();
	}
	{
		let press = press.clone();
		EventListener::new(element, "touchmove", move |_| {
			if press.gesture.borrow_mut().moved() {
				press.timer.borrow_mut().take();
			}
		})
		.forget();
	}
	{
		let press = press.clone();
		EventListener::new_with_options(element, "touchend", EventListenerOptions::enable_prevent_default(), move |event| {
			press.timer.borrow_mut().take();
			let long_pressed = press.gesture.borrow().press() == Press::Fired;
			let released = press.gesture.borrow_mut().release(Instant::now());
			match press.target {
				Target::Label => {
					event.prevent_default();
					if let Some(shortcut) = released {
						press.fire(shortcut);
					}
				}
				Target::Checkbox if long_pressed => event.prevent_default(),
				Target::Checkbox => {}
			}
		})
		.forget();
	}
}
