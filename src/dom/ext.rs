use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, NodeList, Window};

fn elements(nodes: NodeList) -> Vec<Element> {
	(0..nodes.length())
		.filter_map(|index| nodes.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

pub trait ElementExt {
	fn query_all(&self, selector: &str) -> Vec<Element>;
	fn set_class(&self, class: &str, enabled: bool);
	fn closest_element(&self, selector: &str) -> Option<Element>;
	fn as_input(&self) -> Option<HtmlInputElement>;
}

impl ElementExt for Element {
	fn query_all(&self, selector: &str) -> Vec<Element> {
		match self.query_selector_all(selector) {
			Ok(nodes) => elements(nodes),
			Err(_) => Vec::new(),
		}
	}

	fn set_class(&self, class: &str, enabled: bool) {
		let _ = self.class_list().toggle_with_force(class, enabled);
	}

	fn closest_element(&self, selector: &str) -> Option<Element> {
		self.closest(selector).ok().flatten()
	}

	fn as_input(&self) -> Option<HtmlInputElement> {
		self.dyn_ref::<HtmlInputElement>().cloned()
	}
}

pub fn query_all(selector: &str) -> Vec<Element> {
	match gloo_utils::document().query_selector_all(selector) {
		Ok(nodes) => elements(nodes),
		Err(_) => Vec::new(),
	}
}

pub fn query(selector: &str) -> Option<Element> {
	gloo_utils::document().query_selector(selector).ok().flatten()
}

pub fn by_id(id: &str) -> Option<Element> {
	gloo_utils::document().get_element_by_id(id)
}

pub fn event_element(event: &web_sys::Event) -> Option<Element> {
	event.target()?.dyn_into::<Element>().ok()
}

pub fn matches_media(window: &Window, query: &str) -> bool {
	match window.match_media(query) {
		Ok(Some(list)) => list.matches(),
		_ => false,
	}
}
