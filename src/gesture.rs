//! Press tracking for category quick-select labels.
//!
//! A touch press is armed on `touchstart`. If it is held for [`LONG_PRESS_MS`]
//! without moving, the long-press timer fires and the press becomes `Fired`,
//! which swallows the toggle that releasing would otherwise produce.
use crate::category::Shortcut;
use fluvio_wasm_timer::Instant;
use std::time::Duration;

pub static LONG_PRESS_MS: u32 = 500;
/// Browsers follow a tap with emulated mouse events; those are ignored for this long.
static EMULATED_MOUSE_MS: u64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Press {
	#[default]
	Idle,
	Armed {
		moved: bool,
	},
	Fired,
}

#[derive(Clone, Debug, Default)]
pub struct PressGesture {
	press: Press,
	touch_ended: Option<Instant>,
}

impl PressGesture {
	pub fn press(&self) -> Press {
		self.press
	}

	pub fn start(&mut self) {
		self.press = Press::Armed { moved: false };
	}

	/// Returns true if a pending long-press timer must be cancelled.
	pub fn moved(&mut self) -> bool {
		match self.press {
			Press::Armed { moved: false } => {
				self.press = Press::Armed { moved: true };
				true
			}
			_ => false,
		}
	}

	/// The long-press timer elapsed.
	pub fn elapsed(&mut self) -> Option<Shortcut> {
		match self.press {
			Press::Armed { moved: false } => {
				self.press = Press::Fired;
				Some(Shortcut::SelectOnly)
			}
			_ => None,
		}
	}

	/// The touch was released. The caller drops its timer before calling this.
	pub fn release(&mut self, now: Instant) -> Option<Shortcut> {
		let press = std::mem::take(&mut self.press);
		self.touch_ended = Some(now);
		match press {
			Press::Armed { moved: false } => Some(Shortcut::Toggle),
			Press::Armed { moved: true } | Press::Fired | Press::Idle => None,
		}
	}

	/// Whether a mouse click or double click should be handled, as opposed to
	/// being the browser's emulation of a touch that was already handled.
	pub fn accepts_mouse(&self, now: Instant) -> bool {
		if self.press != Press::Idle {
			return false;
		}
		match self.touch_ended {
			Some(ended) => now.duration_since(ended) >= Duration::from_millis(EMULATED_MOUSE_MS),
			None => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tap_toggles() {
		let mut gesture = PressGesture::default();
		gesture.start();
		assert_eq!(gesture.release(Instant::now()), Some(Shortcut::Toggle));
		assert_eq!(gesture.press(), Press::Idle);
	}

	#[test]
	fn long_press_selects_only_and_swallows_release() {
		let mut gesture = PressGesture::default();
		gesture.start();
		assert_eq!(gesture.elapsed(), Some(Shortcut::SelectOnly));
		assert_eq!(gesture.press(), Press::Fired);
		assert_eq!(gesture.release(Instant::now()), None);
	}

	#[test]
	fn drag_does_nothing() {
		let mut gesture = PressGesture::default();
		gesture.start();
		assert!(gesture.moved());
		assert!(!gesture.moved());
		assert_eq!(gesture.elapsed(), None);
		assert_eq!(gesture.release(Instant::now()), None);
	}

	#[test]
	fn timer_after_release_is_ignored() {
		let mut gesture = PressGesture::default();
		gesture.start();
		assert_eq!(gesture.release(Instant::now()), Some(Shortcut::Toggle));
		assert_eq!(gesture.elapsed(), None);
	}

	#[test]
	fn emulated_mouse_after_touch_is_ignored() {
		let mut gesture = PressGesture::default();
		let start = Instant::now();
		assert!(gesture.accepts_mouse(start));
		gesture.start();
		assert!(!gesture.accepts_mouse(start));
		gesture.release(start);
		assert!(!gesture.accepts_mouse(start + Duration::from_millis(20)));
		assert!(gesture.accepts_mouse(start + Duration::from_millis(150)));
	}
}
