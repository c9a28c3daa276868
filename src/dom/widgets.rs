//! Bootstrap tooltips and masonry grids. Both libraries are optional globals.
use super::{
	ext::{by_id, event_element, query_all, ElementExt},
	hooks,
};
use crate::{
	masonry::{Grids, Layout},
	registry::Registry,
};
use gloo_events::EventListener;
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_namespace = bootstrap)]
	type Tooltip;

	#[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
	fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
	#[derive(Debug)]
	type Masonry;

	#[wasm_bindgen(constructor, catch)]
	fn new(element: &Element, options: &JsValue) -> Result<Masonry, JsValue>;

	#[wasm_bindgen(method, js_name = layout)]
	fn run_layout(this: &Masonry);
}

impl Layout for Masonry {
	fn layout(&self) {
		self.run_layout();
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MasonryOptions {
	percent_position: bool,
}

fn has_global(name: &str) -> bool {
	js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

pub fn mount_tooltips(registry: &Registry) {
	if !has_global("bootstrap") {
		log::debug!(target: "widgets", "bootstrap not loaded, skipping tooltips");
		return;
	}
	let info_icons = registry.ids().filter_map(|list| {
		by_id(&hooks::category_dropdown(list))?
			.parent_element()?
			.next_element_sibling()?
			.query_selector(".bi-info-circle")
			.ok()
			.flatten()
	});
	for element in query_all("[data-bs-toggle=\"tooltip\"]").into_iter().chain(info_icons) {
		if let Err(err) = Tooltip::new(&element) {
			log::warn!(target: "widgets", "tooltip failed: {err:?}");
		}
	}
}

pub fn mount_masonry() {
	if !has_global("Masonry") {
		log::debug!(target: "widgets", "masonry not loaded, skipping grids");
		return;
	}
	let options = match serde_wasm_bindgen::to_value(&MasonryOptions { percent_position: true }) {
		Ok(options) => options,
		Err(err) => {
			log::error!(target: "widgets", "masonry options: {err}");
			return;
		}
	};
	let mut grids = Grids::<Element, Masonry>::default();
	for grid in query_all("[data-masonry]") {
		grids.insert_with(grid, |grid| match Masonry::new(grid, &options) {
			Ok(instance) => Some(instance),
			Err(err) => {
				log::warn!(target: "widgets", "masonry failed: {err:?}");
				None
			}
		});
	}
	log::debug!(target: "widgets", "{} masonry grids", grids.len());

	let grids = Rc::new(RefCell::new(grids));
	for toggle in query_all("input[type=\"checkbox\"][id^=\"truncate-toggle-\"]") {
		let grids = grids.clone();
		EventListener::new(&toggle, "change", move |event| {
			let Some(grid) = event_element(event).and_then(|toggle| toggle.closest_element(".row[data-masonry]")) else {
				return;
			};
			grids.borrow().relayout(&grid);
		})
		.forget();
	}
}
