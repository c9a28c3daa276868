//! Binds the page state to the server-rendered document.
use crate::{
	page::Page,
	storage::{LocalBackend, Store},
};
use std::{cell::RefCell, rc::Rc};

mod discover;
mod ext;
mod hooks;
mod layout;
mod listeners;
mod shortcuts;
mod view;
mod widgets;

pub use view::DomView;

pub type SharedPage = Rc<RefCell<Page<LocalBackend, DomView>>>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("no global window")]
	NoWindow,
	#[error("media query {0:?} is not supported")]
	MediaQuery(&'static str),
}

/// Mounts the lists first; the page-wide widgets after them are each optional.
pub fn mount() -> anyhow::Result<()> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let store = Store::local();

	let (registry, controls) = discover::discover();
	let page: SharedPage = Rc::new(RefCell::new(Page::mount(registry, store.clone(), DomView, controls)));

	let hover = ext::matches_media(&window, "(hover: hover)");
	listeners::attach(&page, hover);
	shortcuts::attach(&page);

	if let Err(err) = layout::mount_theme(&window, store.clone()) {
		log::warn!(target: "dom", "theme switcher disabled: {err}");
	}
	layout::mount_accordions(store);
	widgets::mount_tooltips(page.borrow().registry());
	widgets::mount_masonry();
	layout::mount_navbar(&window);
	Ok(())
}

/// Runs an action unless another one is being handled, which would mean a
/// listener fired from inside a render.
pub fn dispatch(page: &SharedPage, action: crate::page::Action) {
	match page.try_borrow_mut() {
		Ok(mut page) => page.dispatch(action),
		Err(_) => log::warn!(target: "dom", "dropped re-entrant {action:?}"),
	}
}
