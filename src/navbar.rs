#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollClasses {
	pub scroll_down: bool,
	pub scroll_up: bool,
}

/// Tracks scroll direction so the navbar can hide on the way down.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
	last_top: f64,
}

impl ScrollTracker {
	pub fn scrolled(&mut self, top: f64) -> ScrollClasses {
		let classes = ScrollClasses {
			scroll_down: top > self.last_top,
			scroll_up: top < self.last_top && top > 0.0,
		};
		self.last_top = top;
		classes
	}
}

pub fn header_height_property(height: i32) -> String {
	format!("{height}px")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tracks_direction() {
		let mut tracker = ScrollTracker::default();
		assert_eq!(tracker.scrolled(120.0), ScrollClasses {
			scroll_down: true,
			scroll_up: false
		});
		assert_eq!(tracker.scrolled(120.0), ScrollClasses::default());
		assert_eq!(tracker.scrolled(40.0), ScrollClasses {
			scroll_down: false,
			scroll_up: true
		});
		// reaching the top drops both classes
		assert_eq!(tracker.scrolled(0.0), ScrollClasses::default());
		assert_eq!(header_height_property(56), "56px");
	}
}
