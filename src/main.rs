#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

mod accordion;
mod category;
#[cfg(target_family = "wasm")]
mod dom;
mod filter;
mod gesture;
mod highlight;
mod logging;
mod masonry;
mod navbar;
mod page;
mod registry;
mod storage;
mod theme;

#[cfg(target_family = "wasm")]
fn main() {
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	if let Err(err) = dom::mount() {
		log::error!(target: "main", "failed to mount: {err:?}");
	}
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	logging::native::init(logging::Config::default());
	log::error!(target: "main", "signup lists only run in the browser, build for wasm32-unknown-unknown");
}
